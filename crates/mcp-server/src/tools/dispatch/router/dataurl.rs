use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;

use super::error::{encoding_error, invalid_request};
use super::validate_text;
use crate::tools::schemas::dataurl::DataurlRequest;

pub(in crate::tools::dispatch) fn generate_dataurl(
    request: DataurlRequest,
) -> Result<CallToolResult, McpError> {
    if let Err(rejection) = validate_text(&request.text) {
        return Ok(rejection);
    }
    let options = match request.options.unwrap_or_default().resolve() {
        Ok(options) => options,
        Err(message) => return Ok(invalid_request(message)),
    };

    match qrgen_render::render_data_url(&request.text, &options) {
        Ok(data_url) => Ok(CallToolResult::success(vec![
            Content::text(format!(
                "QR code generated successfully for: \"{}\"",
                request.text
            )),
            Content::image(data_url, "image/png"),
        ])),
        Err(err) => Ok(encoding_error(format!("Error generating QR code: {err}"))),
    }
}
