//! CSS color parsing for the software raster surface.
//!
//! The DOM surface hands color tokens straight to `strokeStyle`; the raster
//! surface needs actual pixel values, so it resolves the named colors the
//! widget palette uses plus hex notation.

/// RGBA pixel value.
pub type Rgba = [u8; 4];

/// Named CSS colors the raster surface resolves. Covers the widget palette
/// plus the handful of names tests reach for.
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("black", [0, 0, 0, 255]),
    ("purple", [128, 0, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("brown", [165, 42, 42, 255]),
    ("white", [255, 255, 255, 255]),
    ("blue", [0, 0, 255, 255]),
];

/// Parse a CSS color token to RGBA.
///
/// Accepts the named colors above and `#rgb` / `#rrggbb` / `#rrggbbaa` hex
/// notation. Returns `None` for anything else, which callers treat the way
/// the canvas treats an invalid `strokeStyle`: the prior color stays in
/// effect.
pub fn parse_css_color(color: &str) -> Option<Rgba> {
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = color.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, rgba)| *rgba)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    match hex.len() {
        3 => {
            // #rgb -> #rrggbb
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some([r, g, b, 255])
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b, 255])
        }
        8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some([r, g, b, a])
        }
        _ => None,
    }
}
