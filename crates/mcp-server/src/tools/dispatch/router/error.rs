use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::json;

/// Machine-readable error payload mirrored into `structured_content` so
/// agents can branch on `code` without parsing prose.
#[derive(Debug, Clone, Serialize)]
pub(in crate::tools::dispatch) struct ErrorEnvelope {
    pub code: String,
    pub message: String,
}

pub(in crate::tools::dispatch) fn tool_error(
    code: &'static str,
    message: impl Into<String>,
) -> CallToolResult {
    let envelope = ErrorEnvelope {
        code: code.to_string(),
        message: message.into(),
    };
    let mut result = CallToolResult::error(vec![Content::text(envelope.message.clone())]);
    result.structured_content = Some(json!({ "error": envelope }));
    result
}

pub(in crate::tools::dispatch) fn invalid_request(message: impl Into<String>) -> CallToolResult {
    tool_error("invalid_request", message)
}

pub(in crate::tools::dispatch) fn encoding_error(message: impl Into<String>) -> CallToolResult {
    tool_error("encoding_error", message)
}

pub(in crate::tools::dispatch) fn attach_structured_content<T: Serialize>(
    mut result: CallToolResult,
    payload: &T,
    tool: &'static str,
) -> CallToolResult {
    match serde_json::to_value(payload) {
        Ok(value) => {
            result.structured_content = Some(value);
            result
        }
        Err(err) => tool_error(
            "internal",
            format!("Error: failed to serialize {tool} structured_content ({err})"),
        ),
    }
}
