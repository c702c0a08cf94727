//! Canonical string encoding for normalized color records

use serde::Deserialize;
use serde_json::Value;

/// A normalized color record with channels in `[0, 1]`.
///
/// Alpha defaults to fully opaque when absent, matching the source
/// document's convention of omitting the channel for opaque colors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    /// Red channel in `[0, 1]`
    pub r: f64,
    /// Green channel in `[0, 1]`
    pub g: f64,
    /// Blue channel in `[0, 1]`
    pub b: f64,
    /// Alpha channel in `[0, 1]`, default 1
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    /// Read a color out of a raw JSON color object.
    ///
    /// Returns `None` when the value is not a well-formed color record.
    pub fn from_value(value: &Value) -> Option<Rgba> {
        Rgba::deserialize(value).ok()
    }

    /// Render as a canonical CSS color string.
    ///
    /// Fully opaque colors render as a lowercase `#rrggbb` hex triplet;
    /// anything else renders as `rgba(R, G, B, A)` with the alpha formatted
    /// to two decimal places.
    pub fn to_css(&self) -> String {
        let r = channel(self.r);
        let g = channel(self.g);
        let b = channel(self.b);
        if self.a == 1.0 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {:.2})", r, g, b, self.a)
        }
    }
}

/// Scale a normalized channel to `0..=255`, rounding to nearest.
fn channel(c: f64) -> u8 {
    (c * 255.0).round() as u8
}

/// Encode an optional raw color object to its canonical string form.
///
/// A null or absent input yields `None`; no default color is substituted.
pub fn encode(color: Option<&Value>) -> Option<String> {
    color
        .filter(|value| !value.is_null())
        .and_then(Rgba::from_value)
        .map(|rgba| rgba.to_css())
}
