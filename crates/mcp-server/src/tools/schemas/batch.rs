use rmcp::schemars;
use serde::{Deserialize, Serialize};

use super::options::QrCodeOptions;

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BatchFormat {
    #[default]
    Dataurl,
    Svg,
    Terminal,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BatchRequest {
    /// Inputs to encode, one symbol per element, outcome order matching
    /// input order.
    #[schemars(description = "Texts or URLs to encode, in order (1..=10 items, each non-empty).")]
    pub texts: Vec<String>,

    /// Output format applied to every item.
    #[schemars(description = "Output format for all QR codes: dataurl, svg, or terminal (default: dataurl).")]
    pub format: Option<BatchFormat>,

    /// Shared rendering options. Only dataurl items receive them; svg and
    /// terminal items render with default settings.
    #[schemars(
        description = "QR code generation options. Applied to dataurl output; svg and terminal batch items use default settings."
    )]
    pub options: Option<QrCodeOptions>,
}

#[derive(Debug, Serialize, schemars::JsonSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Ok,
    Error,
}

/// Per-item result: a rendered payload or a captured encoder message,
/// never both.
#[derive(Debug, Serialize, schemars::JsonSchema, Clone)]
pub struct BatchOutcome {
    pub text: String,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, schemars::JsonSchema, Clone)]
pub struct BatchResult {
    pub outcomes: Vec<BatchOutcome>,
    pub success_count: usize,
    pub total: usize,
}
