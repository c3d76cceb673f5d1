//! QRGen MCP Server
//!
//! Exposes QR-code generation tools to MCP clients over stdio. Symbol
//! encoding is delegated to the `qrgen-render` crate; this binary owns the
//! tool surface only.
//!
//! ## Tools
//!
//! - `generate_dataurl` - QR code as a base64 PNG data URL
//! - `generate_svg` - QR code as standalone SVG markup
//! - `generate_terminal` - QR code as block glyphs for console display
//! - `generate_batch` - up to 10 QR codes in one call, partial failures isolated
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "qrgen": {
//!       "command": "qrgen-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::QrGeneratorService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting QRGen MCP server");

    let service = QrGeneratorService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("QRGen MCP server stopped");
    Ok(())
}
