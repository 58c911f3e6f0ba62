//! Error types for qrpaint operations

use thiserror::Error;

/// Result type alias using qrpaint's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrpaint operations
#[derive(Error, Debug)]
pub enum Error {
    /// QR encoding failed or the request was invalid before encoding
    #[error("Failed to encode QR code: {0}")]
    Encode(String),

    /// Color specification could not be parsed
    #[error("Invalid color: {0}")]
    Color(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image serialization error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Logging configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}
