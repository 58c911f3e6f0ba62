//! Color palettes and error-correction levels for rendered symbols

use crate::error::{Error, Result};
use csscolorparser::Color;
use image::Rgba;
use std::str::FromStr;

/// QR error-correction level
///
/// The four standard redundancy tiers, trading data capacity for
/// resilience to damage or misreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EccLevel {
    /// ~7% of codewords can be restored
    Low,
    /// ~15% of codewords can be restored
    #[default]
    Medium,
    /// ~25% of codewords can be restored
    Quartile,
    /// ~30% of codewords can be restored
    High,
}

impl EccLevel {
    /// Parse a one-letter level identifier (case-insensitive) from a string slice.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "l" => Some(Self::Low),
            "m" => Some(Self::Medium),
            "q" => Some(Self::Quartile),
            "h" => Some(Self::High),
            _ => None,
        }
    }
}

impl FromStr for EccLevel {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported error-correction level '{value}', expected l/m/q/h")
        })
    }
}

impl From<EccLevel> for qrcode::EcLevel {
    fn from(level: EccLevel) -> Self {
        match level {
            EccLevel::Low => qrcode::EcLevel::L,
            EccLevel::Medium => qrcode::EcLevel::M,
            EccLevel::Quartile => qrcode::EcLevel::Q,
            EccLevel::High => qrcode::EcLevel::H,
        }
    }
}

/// Colors applied when painting a symbol
///
/// `light` fills the background and quiet zone, `dark` fills the modules.
/// When `accent` is set it replaces `dark` on data modules only, leaving
/// finder, timing, and the other function patterns in the dark color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Background color
    pub light: Rgba<u8>,
    /// Module color
    pub dark: Rgba<u8>,
    /// Optional override for data modules
    pub accent: Option<Rgba<u8>>,
}

impl Palette {
    /// Build a palette from CSS color specifications (named colors or hex strings).
    pub fn parse(light: &str, dark: &str) -> Result<Self> {
        Ok(Self {
            light: parse_color(light)?,
            dark: parse_color(dark)?,
            accent: None,
        })
    }

    /// Add a data-module accent color to the palette.
    pub fn with_accent(mut self, accent: &str) -> Result<Self> {
        self.accent = Some(parse_color(accent)?);
        Ok(self)
    }

    /// Color for a dark module, taking the accent override into account.
    pub(crate) fn module_color(&self, is_function: bool) -> Rgba<u8> {
        if is_function {
            self.dark
        } else {
            self.accent.unwrap_or(self.dark)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: Rgba([255, 255, 255, 255]),
            dark: Rgba([0, 0, 0, 255]),
            accent: None,
        }
    }
}

fn parse_color(spec: &str) -> Result<Rgba<u8>> {
    let color = spec
        .parse::<Color>()
        .map_err(|e| Error::Color(format!("'{spec}': {e}")))?;
    Ok(Rgba(color.to_rgba8()))
}
