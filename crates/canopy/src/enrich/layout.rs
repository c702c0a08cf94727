//! Geometry and auto-layout extraction

use serde_json::Value;

use crate::json;
use crate::node::{AutoLayout, Layout, NodeStyles, Padding};

/// Lift the absolute bounding box into a layout record.
///
/// Absence of the whole box yields all four fields absent, not zero.
pub(super) fn bounding_box(node: &Value) -> Layout {
    match json::field(node, "absoluteBoundingBox") {
        Some(bounds) => Layout {
            x: json::f64_field(bounds, "x"),
            y: json::f64_field(bounds, "y"),
            width: json::f64_field(bounds, "width"),
            height: json::f64_field(bounds, "height"),
        },
        None => Layout::default(),
    }
}

/// Extract padding, gap, auto-layout attributes, and opacity.
pub(super) fn apply(node: &Value, styles: &mut NodeStyles) {
    // paddingLeft is the presence sentinel for the whole padding group
    if json::f64_field(node, "paddingLeft").is_some() {
        styles.padding = Some(Padding {
            top: json::f64_field(node, "paddingTop"),
            right: json::f64_field(node, "paddingRight"),
            bottom: json::f64_field(node, "paddingBottom"),
            left: json::f64_field(node, "paddingLeft"),
        });
    }

    styles.gap = json::f64_field(node, "itemSpacing");

    // layoutMode gates the whole auto-layout group; sibling fields on a
    // node without a mode are suppressed
    if let Some(layout_mode) = json::str_field(node, "layoutMode") {
        styles.auto_layout = Some(AutoLayout {
            layout_mode,
            primary_axis_align_items: json::str_field(node, "primaryAxisAlignItems"),
            counter_axis_align_items: json::str_field(node, "counterAxisAlignItems"),
            layout_sizing_horizontal: json::str_field(node, "layoutSizingHorizontal"),
            layout_sizing_vertical: json::str_field(node, "layoutSizingVertical"),
            layout_wrap: json::str_field(node, "layoutWrap"),
        });
    }

    // fully opaque is the default and is elided to keep the record sparse
    styles.opacity = json::f64_field(node, "opacity").filter(|&opacity| opacity != 1.0);
}
