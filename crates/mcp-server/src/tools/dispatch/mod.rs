//! MCP tool dispatch for QRGen.
//!
//! The service holds no state beyond the tool router: every tool call is a
//! pure function of its request plus the stateless rendering layer, so
//! concurrent callers share nothing and need no locking.

use super::catalog;
use super::schemas::batch::BatchRequest;
use super::schemas::dataurl::DataurlRequest;
use super::schemas::svg::SvgRequest;
use super::schemas::terminal::TerminalRequest;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

mod router;

/// QRGen MCP Service
#[derive(Clone)]
pub struct QrGeneratorService {
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl QrGeneratorService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for QrGeneratorService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl QrGeneratorService {
    /// QR code as a base64 PNG data URL.
    #[tool(
        description = "Generate a QR code from text or URL and return it as a base64 data URL"
    )]
    pub async fn generate_dataurl(
        &self,
        Parameters(request): Parameters<DataurlRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::dataurl::generate_dataurl(request)
    }

    /// QR code as standalone SVG markup.
    #[tool(description = "Generate a QR code from text or URL and return it as SVG format")]
    pub async fn generate_svg(
        &self,
        Parameters(request): Parameters<SvgRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::svg::generate_svg(request)
    }

    /// QR code as block glyphs for console display.
    #[tool(
        description = "Generate a QR code from text or URL and display it in terminal format"
    )]
    pub async fn generate_terminal(
        &self,
        Parameters(request): Parameters<TerminalRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::terminal::generate_terminal(request)
    }

    /// Batch generation with per-item failure isolation.
    #[tool(
        description = "Generate multiple QR codes from an array of texts or URLs (max 10). One item failing never aborts the rest; the response reports a per-item outcome and a success tally."
    )]
    pub async fn generate_batch(
        &self,
        Parameters(request): Parameters<BatchRequest>,
    ) -> Result<CallToolResult, McpError> {
        router::batch::generate_batch(request)
    }
}

#[tool_handler]
impl ServerHandler for QrGeneratorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
