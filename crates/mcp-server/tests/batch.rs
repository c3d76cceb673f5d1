use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use std::time::Duration;
use tokio::process::Command;

mod support;

#[tokio::test]
async fn batch_renders_ordered_dataurl_images() -> Result<()> {
    let bin = support::locate_qrgen_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let args = serde_json::json!({ "texts": ["one", "two"] });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_batch".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_batch")??;

    assert_ne!(result.is_error, Some(true), "batch returned error");
    let summary = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("batch missing summary segment")?;
    assert_eq!(summary, "Batch QR code generation completed: 2/2 successful");

    // summary + (label, image) per item, in input order
    assert_eq!(result.content.len(), 5);
    let label_one = result.content[1].as_text().context("missing first label")?;
    assert_eq!(label_one.text, "1. QR code for \"one\":");
    let image_one = result.content[2].as_image().context("missing first image")?;
    assert!(image_one.data.starts_with("data:image/png;base64,"));
    assert_eq!(image_one.mime_type, "image/png");
    let label_two = result.content[3].as_text().context("missing second label")?;
    assert_eq!(label_two.text, "2. QR code for \"two\":");
    assert!(result.content[4].as_image().is_some());

    let structured = result
        .structured_content
        .context("batch missing structured_content")?;
    assert_eq!(structured["total"], 2);
    assert_eq!(structured["success_count"], 2);
    let outcomes = structured["outcomes"]
        .as_array()
        .context("outcomes missing")?;
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["text"], "one");
    assert_eq!(outcomes[1]["text"], "two");
    assert!(outcomes.iter().all(|o| o["status"] == "ok"));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn terminal_batch_returns_text_payloads_only() -> Result<()> {
    let bin = support::locate_qrgen_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let args = serde_json::json!({ "texts": ["hello"], "format": "terminal" });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_batch".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_batch")??;

    assert_ne!(result.is_error, Some(true), "batch returned error");
    let summary = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("batch missing summary segment")?;
    assert_eq!(summary, "Batch QR code generation completed: 1/1 successful");

    assert!(
        result.content.iter().all(|c| c.as_image().is_none()),
        "terminal batches must not produce image segments"
    );
    let payload = result
        .content
        .get(2)
        .and_then(|c| c.as_text())
        .context("missing glyph payload segment")?;
    assert!(payload.text.contains('█'));

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn oversized_batch_is_rejected_with_zero_outcomes() -> Result<()> {
    let bin = support::locate_qrgen_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let texts: Vec<String> = (0..11).map(|i| format!("item-{i}")).collect();
    let args = serde_json::json!({ "texts": texts });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_batch".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_batch")??;

    assert_eq!(result.is_error, Some(true), "expected boundary rejection");
    let message = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("missing error text")?;
    assert!(message.contains("at most 10"));
    let structured = result
        .structured_content
        .context("missing structured error")?;
    assert_eq!(structured["error"]["code"], "invalid_request");
    assert!(structured.get("outcomes").is_none(), "no partial outcomes");

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn batch_with_one_empty_element_is_rejected_entirely() -> Result<()> {
    let bin = support::locate_qrgen_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let args = serde_json::json!({ "texts": ["first", "", "third"] });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_batch".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_batch")??;

    assert_eq!(result.is_error, Some(true), "expected boundary rejection");
    let message = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("missing error text")?;
    assert!(message.contains("texts[1] must not be empty"));
    // Pre-flight validation: the valid siblings produced nothing either.
    assert_eq!(result.content.len(), 1);

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn partial_failure_is_isolated_and_tallied() -> Result<()> {
    let bin = support::locate_qrgen_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    // The second text exceeds symbol capacity at level H but the first fits.
    let oversized = "a".repeat(2000);
    let args = serde_json::json!({
        "texts": ["fits", oversized],
        "format": "dataurl",
        "options": { "errorCorrectionLevel": "H" }
    });
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "generate_batch".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling generate_batch")??;

    assert_ne!(
        result.is_error,
        Some(true),
        "partial failure must not fail the batch call"
    );
    let summary = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("batch missing summary segment")?;
    assert_eq!(summary, "Batch QR code generation completed: 1/2 successful");

    let error_segment = result
        .content
        .last()
        .and_then(|c| c.as_text())
        .context("missing error segment")?;
    assert!(error_segment.text.starts_with("2. Error for"));

    let structured = result
        .structured_content
        .context("batch missing structured_content")?;
    assert_eq!(structured["success_count"], 1);
    assert_eq!(structured["total"], 2);
    let outcomes = structured["outcomes"]
        .as_array()
        .context("outcomes missing")?;
    assert_eq!(outcomes[0]["status"], "ok");
    assert_eq!(outcomes[1]["status"], "error");
    let message = outcomes[1]["message"].as_str().context("missing message")?;
    assert!(!message.is_empty());

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn identical_batches_are_idempotent() -> Result<()> {
    let bin = support::locate_qrgen_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let args = serde_json::json!({
        "texts": ["stable"],
        "options": { "width": 200, "margin": 2 }
    });
    let mut payloads = Vec::new();
    for _ in 0..2 {
        let result = tokio::time::timeout(
            Duration::from_secs(10),
            service.call_tool(CallToolRequestParam {
                name: "generate_batch".into(),
                arguments: args.as_object().cloned(),
            }),
        )
        .await
        .context("timeout calling generate_batch")??;
        assert_ne!(result.is_error, Some(true), "batch returned error");
        payloads.push(
            result
                .structured_content
                .context("batch missing structured_content")?,
        );
    }
    assert_eq!(payloads[0], payloads[1]);

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
