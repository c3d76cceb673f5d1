pub(super) mod batch;
pub(super) mod dataurl;
mod error;
pub(super) mod svg;
pub(super) mod terminal;

use rmcp::model::CallToolResult;

/// Boundary check shared by every tool: an empty or whitespace-only input
/// cannot produce a scannable symbol, so it is rejected before encoding.
fn validate_text(text: &str) -> Result<(), CallToolResult> {
    if text.trim().is_empty() {
        return Err(error::invalid_request("text must not be empty"));
    }
    Ok(())
}
