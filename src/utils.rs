//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Graduation cap on a transparent background, for the sidebar and window icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path d="M32 10 62 24 32 38 2 24Z" fill="#ffffff"/><path d="M14 30v11c0 6 36 6 36 0V30L32 39Z" fill="#bae6fd"/><path d="M55 26h3v16h-3z" fill="#ffffff"/><circle cx="56.5" cy="44" r="3" fill="#ffffff"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image. Returns None if the SVG or pixmap can't be built.
pub fn rasterize_logo(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format whole dollars with thousands separators, e.g. "$3,200"
pub fn format_currency(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(500), "$500");
        assert_eq!(format_currency(3_200), "$3,200");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_logo_rasterizes() {
        let (pixels, w, h) = rasterize_logo(32).expect("logo should rasterize");
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        assert!(pixels.chunks(4).any(|px| px[3] > 0));
    }
}
