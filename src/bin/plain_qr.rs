//! Emit the plain black-and-white QR code pointing lab devices at the
//! inventory frontend.

use qrpaint::{EccLevel, LoggingOptions, Palette, RenderRequest, logging};

fn main() -> anyhow::Result<()> {
    logging::init(&LoggingOptions::from_env())?;

    let request = RenderRequest::new("http://10.2.36.243", "black_and_white_qrcode.png")
        .with_level(EccLevel::High)
        .with_scale(10)
        .with_palette(Palette::parse("white", "black")?);

    qrpaint::emit(&request)?;

    println!("Generated black and white QR code.");
    Ok(())
}
