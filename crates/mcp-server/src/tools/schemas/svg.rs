use rmcp::schemars;
use serde::Deserialize;

use super::options::QrCodeOptions;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SvgRequest {
    /// The text or URL to encode.
    #[schemars(description = "The text or URL to encode in the QR code.")]
    pub text: String,

    /// Rendering options; omitted fields fall back to documented defaults.
    #[schemars(description = "QR code generation options.")]
    pub options: Option<QrCodeOptions>,
}
