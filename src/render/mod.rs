//! Styled QR symbol rendering
//!
//! This module provides the request model and the emitter that turns a
//! payload string plus style options into a finished PNG file.

mod emitter;
mod layout;
mod raster;

pub use emitter::emit;

use crate::style::{EccLevel, Palette};
use std::path::PathBuf;

/// Default pixels per module when no scale is requested
pub const DEFAULT_SCALE: u32 = 8;

/// Standard quiet-zone width in modules
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// A single request to render a styled QR code image
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Data to encode, typically a URL or domain string
    pub payload: String,
    /// Error-correction level
    pub level: EccLevel,
    /// Destination of the finished PNG
    pub output_path: PathBuf,
    /// Pixels per module
    pub scale: u32,
    /// Quiet-zone width in modules around the symbol
    pub quiet_zone: u32,
    /// Background, module, and optional data-module accent colors
    pub palette: Palette,
}

impl RenderRequest {
    /// Create a request with the default level, scale, quiet zone, and
    /// black-on-white palette.
    pub fn new(payload: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            payload: payload.into(),
            level: EccLevel::default(),
            output_path: output_path.into(),
            scale: DEFAULT_SCALE,
            quiet_zone: DEFAULT_QUIET_ZONE,
            palette: Palette::default(),
        }
    }

    /// Set the error-correction level.
    pub fn with_level(mut self, level: EccLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the module scale in pixels.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the quiet-zone width in modules.
    pub fn with_quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    /// Set the color palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Details of a successfully written image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    /// Where the PNG was written
    pub output_path: PathBuf,
    /// Symbol width in modules per side, excluding the quiet zone
    pub modules: u32,
    /// Image width in pixels per side
    pub pixels: u32,
    /// QR symbol version (1..=40)
    pub version: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = RenderRequest::new("https://example.org", "qr.png");
        assert_eq!(request.level, EccLevel::Medium);
        assert_eq!(request.scale, DEFAULT_SCALE);
        assert_eq!(request.quiet_zone, DEFAULT_QUIET_ZONE);
        assert_eq!(request.palette, Palette::default());
        assert_eq!(request.output_path, PathBuf::from("qr.png"));
    }

    #[test]
    fn test_request_setters() {
        let request = RenderRequest::new("google.com", "out.png")
            .with_level(EccLevel::High)
            .with_scale(10)
            .with_quiet_zone(2);
        assert_eq!(request.level, EccLevel::High);
        assert_eq!(request.scale, 10);
        assert_eq!(request.quiet_zone, 2);
    }
}
