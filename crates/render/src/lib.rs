//! Rendering layer over the `qrcodegen` encoder.
//!
//! `qrcodegen` owns everything hard about QR symbols (segmentation, error
//! correction, masking); this crate turns an encoded module matrix into one
//! of three payloads:
//!
//! - [`render_data_url`] - PNG rasterization wrapped in a base64 data URL
//! - [`render_svg`] - vector markup with one path of module squares
//! - [`render_terminal`] - block glyphs for console display
//!
//! Every renderer is a pure function of `(text, options)`: identical inputs
//! produce byte-identical output.

mod error;
mod options;
mod raster;
mod svg;
mod terminal;

pub use error::RenderError;
pub use options::{Color, ColorError, EcLevel, RenderOptions, TerminalOptions};
pub use raster::render_data_url;
pub use svg::render_svg;
pub use terminal::render_terminal;

use qrcodegen::QrCode;

/// Encode `text` into a QR module matrix at the given error-correction level.
///
/// The encoder picks the smallest symbol version that fits; overlong input
/// surfaces as [`RenderError::DataTooLong`] with the encoder's own message.
pub fn encode(text: &str, level: EcLevel) -> Result<QrCode, RenderError> {
    Ok(QrCode::encode_text(text, level.to_ecc())?)
}
