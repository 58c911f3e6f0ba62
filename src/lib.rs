//! qrpaint - styled QR code PNG generation
//!
//! This library renders QR codes for URL or domain payloads into PNG
//! files with a chosen color palette: a background color, a module
//! color, and an optional accent applied to data modules only, leaving
//! finder and timing patterns in the plain module color.
//!
//! Encoding is delegated to the `qrcode` crate and PNG serialization to
//! the `image` crate; this library assembles the parameters, paints the
//! symbol, and writes the file.
//!
//! # Example
//!
//! ```no_run
//! use qrpaint::{EccLevel, Palette, RenderRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let request = RenderRequest::new("https://example.org", "qr.png")
//!         .with_level(EccLevel::High)
//!         .with_scale(10)
//!         .with_palette(Palette::parse("white", "black")?);
//!
//!     let summary = qrpaint::emit(&request)?;
//!     println!("Wrote {} ({} px)", summary.output_path.display(), summary.pixels);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod error;
pub mod logging;
pub mod render;
pub mod style;

// Re-exports for convenience
pub use error::{Error, Result};
pub use logging::{LogRotation, LoggingOptions};
pub use render::{DEFAULT_QUIET_ZONE, DEFAULT_SCALE, EmitSummary, RenderRequest, emit};
pub use style::{EccLevel, Palette};
