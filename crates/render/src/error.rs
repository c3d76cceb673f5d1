use thiserror::Error;

/// Failure while encoding or rendering one QR symbol.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The text does not fit a version-40 symbol at the requested
    /// error-correction level.
    #[error("data too long: {0}")]
    DataTooLong(#[from] qrcodegen::DataTooLong),

    /// PNG encoding of the rasterized matrix failed.
    #[error("failed to encode PNG: {0}")]
    Png(#[from] image::ImageError),
}
