use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TerminalRequest {
    /// The text or URL to encode.
    #[schemars(description = "The text or URL to encode in the QR code.")]
    pub text: String,

    /// Terminal display options.
    #[schemars(description = "Terminal display options.")]
    pub options: Option<TerminalDisplayOptions>,
}

/// Size and color options do not apply to glyph output, so the terminal
/// tool has its own option set.
#[derive(Debug, Clone, Copy, Default, Deserialize, schemars::JsonSchema)]
pub struct TerminalDisplayOptions {
    /// Use half-height glyphs so the symbol fits smaller terminals.
    #[schemars(description = "Use small format for terminal display (default: false).")]
    #[serde(default)]
    pub small: bool,
}
