//! Hex-color helpers for segment swatches.

use once_cell::sync::Lazy;
use regex::Regex;

/// Expected segment color form: `#RRGGBB`.
static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

/// Simplified contrast info for a segment color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorContrast {
    /// Relative luminance in `0.0..=1.0`.
    pub luminance: f64,
    /// Whether text drawn over this color should be light.
    pub needs_light_text: bool,
}

/// Returns `true` if `value` is a 6-hex-digit color token like `#3b82f6`.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Parses a `#RRGGBB` token into its channels.
pub fn rgb(value: &str) -> Option<(u8, u8, u8)> {
    if !is_hex_color(value) {
        return None;
    }
    let hex = &value[1..];
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Checks whether a color needs light or dark text drawn over it.
///
/// This is a simplified luminance check, not a full WCAG contrast ratio.
pub fn check_color_contrast(value: &str) -> Option<ColorContrast> {
    let (r, g, b) = rgb(value)?;
    let luminance = 0.2126 * (r as f64 / 255.0)
        + 0.7152 * (g as f64 / 255.0)
        + 0.0722 * (b as f64 / 255.0);
    Some(ColorContrast {
        luminance,
        needs_light_text: luminance < 0.5,
    })
}
