use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use super::error::{encoding_error, invalid_request};
use super::validate_text;
use crate::tools::schemas::svg::SvgRequest;

pub(in crate::tools::dispatch) fn generate_svg(
    request: SvgRequest,
) -> Result<CallToolResult, McpError> {
    if let Err(rejection) = validate_text(&request.text) {
        return Ok(rejection);
    }
    let options = match request.options.unwrap_or_default().resolve() {
        Ok(options) => options,
        Err(message) => return Ok(invalid_request(message)),
    };

    match qrgen_render::render_svg(&request.text, &options) {
        Ok(svg) => Ok(CallToolResult::success(vec![Content::text(format!(
            "QR code SVG generated successfully for: \"{}\"\n\n{svg}",
            request.text
        ))])),
        Err(err) => Ok(encoding_error(format!(
            "Error generating QR code SVG: {err}"
        ))),
    }
}
