//! QR code emission to PNG files

use crate::error::{Error, Result};
use crate::render::{EmitSummary, RenderRequest, raster};
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use qrcode::{QrCode, Version};
use std::fs;

/// Render the requested symbol and write it as a PNG file.
///
/// Validates the request, encodes the payload at the requested
/// error-correction level, paints it with the palette, and writes the
/// finished PNG in a single call, so a failed write leaves no partial
/// file behind.
pub fn emit(request: &RenderRequest) -> Result<EmitSummary> {
    validate(request)?;

    let code = encode(request)?;
    let image = raster::paint(&code, &request.palette, request.scale, request.quiet_zone);

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    fs::write(&request.output_path, &png)?;

    let summary = EmitSummary {
        output_path: request.output_path.clone(),
        modules: code.width() as u32,
        pixels: image.width(),
        version: version_number(&code),
    };

    tracing::info!(
        path = %summary.output_path.display(),
        modules = summary.modules,
        pixels = summary.pixels,
        version = summary.version,
        "Wrote QR code image"
    );

    Ok(summary)
}

fn validate(request: &RenderRequest) -> Result<()> {
    if request.payload.is_empty() {
        return Err(Error::Encode("payload must not be empty".to_string()));
    }
    if request.scale == 0 {
        return Err(Error::Encode(
            "scale must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn encode(request: &RenderRequest) -> Result<QrCode> {
    QrCode::with_error_correction_level(request.payload.as_bytes(), request.level.into())
        .map_err(|e| Error::Encode(e.to_string()))
}

fn version_number(code: &QrCode) -> i16 {
    match code.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    }
}
