//! Emit a Catppuccin Mocha themed QR code with flamingo data modules.

use qrpaint::{EccLevel, LoggingOptions, Palette, RenderRequest, logging};

fn main() -> anyhow::Result<()> {
    logging::init(&LoggingOptions::from_env())?;

    let palette = Palette::parse("#1e1e2e", "#cdd6f4")?.with_accent("#f2cdcd")?;
    let request = RenderRequest::new("google.com", "mocha_qrcode.png")
        .with_level(EccLevel::High)
        .with_scale(10)
        .with_palette(palette);

    qrpaint::emit(&request)?;

    println!("Generated Catppuccin Mocha QR code.");
    Ok(())
}
