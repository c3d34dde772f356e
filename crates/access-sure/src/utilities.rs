//! Element tables and small helpers shared by the rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading elements, outermost level first
pub const HEADING_ELEMENTS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements whose text is checked for contrast
pub const TEXT_ELEMENTS: &[&str] = &["p", "span", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Form controls that need a label
pub const FORM_CONTROL_ELEMENTS: &[&str] = &["input", "textarea", "select"];

/// Elements reachable by keyboard focus by default
pub const INTERACTIVE_ELEMENTS: &[&str] = &["a", "button"];

/// Elements that can play media on load
pub const MEDIA_ELEMENTS: &[&str] = &["audio", "video"];

static NUMERIC_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

/// Heading level for `h1`..`h6`
pub fn heading_level(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix('h')?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// True for text made only of digits, such as pagination links
pub fn is_numeric_text(text: &str) -> bool {
    NUMERIC_TEXT.is_match(text)
}

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Relative luminance per WCAG 2.x
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn relative_luminance(self) -> f64 {
        let [r, g, b] = [self.0, self.1, self.2].map(|c| {
            let v = c as f64 / 255.0;
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        });
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

/// Contrast ratio between two colors, from 1.0 up to 21.0
pub fn contrast_ratio(foreground: Rgb, background: Rgb) -> f64 {
    let l1 = foreground.relative_luminance();
    let l2 = background.relative_luminance();
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
