use qrgen_render::{RenderOptions, TerminalOptions};
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use super::error::{attach_structured_content, invalid_request};
use crate::tools::schemas::batch::{
    BatchFormat, BatchOutcome, BatchRequest, BatchResult, OutcomeStatus,
};

const MAX_BATCH_ITEMS: usize = 10;

/// Generate up to [`MAX_BATCH_ITEMS`] QR codes in one call.
///
/// Shape validation covers the whole input set before any encoding starts,
/// so a malformed batch is rejected with zero outcomes. Once encoding
/// begins, one item's failure is captured in its outcome and never aborts
/// the siblings; the call itself succeeds even if every item failed.
pub(in crate::tools::dispatch) fn generate_batch(
    request: BatchRequest,
) -> Result<CallToolResult, McpError> {
    if let Some(message) = validate_texts(&request.texts) {
        return Ok(invalid_request(message));
    }
    let format = request.format.unwrap_or_default();
    let options = match request.options.unwrap_or_default().resolve() {
        Ok(options) => options,
        Err(message) => return Ok(invalid_request(message)),
    };

    let result = run_batch(&request.texts, format, &options);
    let content = assemble_content(&result, format);
    Ok(attach_structured_content(
        CallToolResult::success(content),
        &result,
        "generate_batch",
    ))
}

fn validate_texts(texts: &[String]) -> Option<String> {
    if texts.is_empty() {
        return Some("texts must contain at least 1 item".to_string());
    }
    if texts.len() > MAX_BATCH_ITEMS {
        return Some(format!(
            "texts must contain at most {MAX_BATCH_ITEMS} items, got {}",
            texts.len()
        ));
    }
    texts
        .iter()
        .position(|text| text.trim().is_empty())
        .map(|index| format!("texts[{index}] must not be empty"))
}

/// Encode every item sequentially, in input order. Exactly one outcome per
/// input, regardless of failures.
fn run_batch(texts: &[String], format: BatchFormat, options: &RenderOptions) -> BatchResult {
    let mut outcomes = Vec::with_capacity(texts.len());
    for text in texts {
        // Request options only reach dataurl items. The single-item svg tool
        // forwards them; batch svg/terminal items render with defaults, and
        // the divergence is documented rather than silently fixed.
        let rendered = match format {
            BatchFormat::Dataurl => qrgen_render::render_data_url(text, options),
            BatchFormat::Svg => qrgen_render::render_svg(text, &RenderOptions::default()),
            BatchFormat::Terminal => {
                qrgen_render::render_terminal(text, &TerminalOptions::default())
            }
        };
        outcomes.push(match rendered {
            Ok(payload) => BatchOutcome {
                text: text.clone(),
                status: OutcomeStatus::Ok,
                payload: Some(payload),
                message: None,
            },
            Err(err) => BatchOutcome {
                text: text.clone(),
                status: OutcomeStatus::Error,
                payload: None,
                message: Some(err.to_string()),
            },
        });
    }

    let success_count = outcomes
        .iter()
        .filter(|outcome| outcome.status == OutcomeStatus::Ok)
        .count();
    BatchResult {
        total: outcomes.len(),
        success_count,
        outcomes,
    }
}

/// Flatten the outcomes into ordered content segments: the summary first,
/// then per item a numbered label plus its payload, or a single error line.
/// Failures are always text segments, never images.
fn assemble_content(result: &BatchResult, format: BatchFormat) -> Vec<Content> {
    let mut content = vec![Content::text(format!(
        "Batch QR code generation completed: {}/{} successful",
        result.success_count, result.total
    ))];

    for (index, outcome) in result.outcomes.iter().enumerate() {
        let position = index + 1;
        match outcome.status {
            OutcomeStatus::Ok => {
                content.push(Content::text(format!(
                    "{position}. QR code for \"{}\":",
                    outcome.text
                )));
                let payload = outcome.payload.clone().unwrap_or_default();
                if format == BatchFormat::Dataurl {
                    content.push(Content::image(payload, "image/png"));
                } else {
                    content.push(Content::text(payload));
                }
            }
            OutcomeStatus::Error => {
                content.push(Content::text(format!(
                    "{position}. Error for \"{}\": {}",
                    outcome.text,
                    outcome.message.as_deref().unwrap_or("unknown error")
                )));
            }
        }
    }

    content
}
