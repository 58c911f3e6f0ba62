//! Rasterization of encoded symbols into RGBA images

use crate::render::layout::ModuleMap;
use crate::style::Palette;
use image::RgbaImage;
use qrcode::{Color as ModuleColor, QrCode, Version};

/// Paint an encoded symbol with the given palette and geometry.
///
/// The image side is `(width + 2 * quiet_zone) * scale` pixels. Dark
/// modules become `scale` by `scale` blocks; data modules take the
/// palette accent when one is set.
pub(crate) fn paint(code: &QrCode, palette: &Palette, scale: u32, quiet_zone: u32) -> RgbaImage {
    let width = code.width();
    let modules = code.to_colors();

    // Micro symbols lay out their function patterns differently and are
    // never produced here; without a map the accent simply does not apply.
    let map = match code.version() {
        Version::Normal(v) => Some(ModuleMap::new(v as u8)),
        Version::Micro(_) => None,
    };

    let side = (width as u32 + 2 * quiet_zone) * scale;
    let mut image = RgbaImage::from_pixel(side, side, palette.light);

    for y in 0..width {
        for x in 0..width {
            if modules[y * width + x] != ModuleColor::Dark {
                continue;
            }
            let is_function = map.as_ref().is_none_or(|m| m.is_function(x, y));
            let color = palette.module_color(is_function);

            let px = (quiet_zone + x as u32) * scale;
            let py = (quiet_zone + y as u32) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(px + dx, py + dy, color);
                }
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn encode(payload: &str) -> QrCode {
        QrCode::with_error_correction_level(payload, qrcode::EcLevel::H).unwrap()
    }

    #[test]
    fn test_paint_dimensions() {
        let code = encode("test");
        let image = paint(&code, &Palette::default(), 2, 4);
        let expected = (code.width() as u32 + 8) * 2;
        assert_eq!(image.width(), expected);
        assert_eq!(image.height(), expected);
    }

    #[test]
    fn test_quiet_zone_and_finder_colors() {
        let code = encode("test");
        let image = paint(&code, &Palette::default(), 2, 4);

        // Quiet-zone corner stays light; the finder's first module block
        // starts right after it and fills scale x scale pixels.
        assert_eq!(*image.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*image.get_pixel(8, 8), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(9, 9), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_accent_spares_function_patterns() {
        let code = encode("google.com");
        let palette = Palette::parse("white", "black")
            .unwrap()
            .with_accent("red")
            .unwrap();
        let image = paint(&code, &palette, 1, 4);

        // Finder module keeps the dark color.
        assert_eq!(*image.get_pixel(4, 4), Rgba([0, 0, 0, 255]));
        // At least one data module picks up the accent.
        assert!(
            image.pixels().any(|p| *p == Rgba([255, 0, 0, 255])),
            "expected accent-colored data modules"
        );
    }

    #[test]
    fn test_without_accent_all_dark_modules_share_color() {
        let code = encode("google.com");
        let image = paint(&code, &Palette::default(), 1, 4);
        for pixel in image.pixels() {
            assert!(
                *pixel == Rgba([255, 255, 255, 255]) || *pixel == Rgba([0, 0, 0, 255]),
                "unexpected color {pixel:?}"
            );
        }
    }
}
