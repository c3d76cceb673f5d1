use qrgen_render::TerminalOptions;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use super::error::encoding_error;
use super::validate_text;
use crate::tools::schemas::terminal::TerminalRequest;

pub(in crate::tools::dispatch) fn generate_terminal(
    request: TerminalRequest,
) -> Result<CallToolResult, McpError> {
    if let Err(rejection) = validate_text(&request.text) {
        return Ok(rejection);
    }
    let options = TerminalOptions {
        small: request.options.unwrap_or_default().small,
    };

    match qrgen_render::render_terminal(&request.text, &options) {
        Ok(glyphs) => Ok(CallToolResult::success(vec![Content::text(format!(
            "QR code for: \"{}\"\n\n{glyphs}",
            request.text
        ))])),
        Err(err) => Ok(encoding_error(format!(
            "Error generating terminal QR code: {err}"
        ))),
    }
}
