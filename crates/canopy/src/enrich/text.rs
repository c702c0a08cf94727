//! Text-metrics extraction

use serde_json::Value;

use crate::json;
use crate::node::TextStyle;

/// Extract the text-metrics group for a text node.
///
/// Text nodes always get a group, even when every sub-field is absent.
/// Character content lives on the node itself; the remaining metrics live
/// on the node's nested `style` record.
pub(super) fn extract(node: &Value) -> TextStyle {
    let style = json::field(node, "style");
    TextStyle {
        characters: json::str_field(node, "characters"),
        font_family: style.and_then(|s| json::str_field(s, "fontFamily")),
        font_size: style.and_then(|s| json::f64_field(s, "fontSize")),
        font_weight: style.and_then(|s| json::f64_field(s, "fontWeight")),
        line_height_px: style.and_then(|s| json::f64_field(s, "lineHeightPx")),
        letter_spacing: style.and_then(|s| json::f64_field(s, "letterSpacing")),
        text_align_horizontal: style.and_then(|s| json::str_field(s, "textAlignHorizontal")),
        text_align_vertical: style.and_then(|s| json::str_field(s, "textAlignVertical")),
    }
}
