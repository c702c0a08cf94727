//! Fill, stroke, corner-radius, and effect extraction

use serde_json::Value;

use crate::color;
use crate::json;
use crate::node::{Effect, EffectOffset, GradientStop, NodeStyles, Paint, StrokePaint};

/// Extract paint-family attributes into the style bag.
pub(super) fn apply(node: &Value, styles: &mut NodeStyles) {
    if let Some(fills) = json::array_field(node, "fills").filter(|fills| !fills.is_empty()) {
        styles.fills = Some(fills.iter().map(fill_paint).collect());
    }

    if let Some(strokes) = json::array_field(node, "strokes").filter(|strokes| !strokes.is_empty())
    {
        styles.strokes = Some(strokes.iter().map(stroke_paint).collect());
        styles.stroke_weight = json::f64_field(node, "strokeWeight");
        styles.stroke_align = json::str_field(node, "strokeAlign");
    }

    // uniform and per-corner radii are independent and may coexist
    styles.corner_radius = json::f64_field(node, "cornerRadius");
    styles.rectangle_corner_radii = json::f64_list_field(node, "rectangleCornerRadii");

    if let Some(effects) = json::array_field(node, "effects").filter(|effects| !effects.is_empty())
    {
        styles.effects = Some(effects.iter().map(effect).collect());
    }
}

fn fill_paint(fill: &Value) -> Paint {
    Paint {
        kind: json::str_field(fill, "type"),
        color: color::encode(json::field(fill, "color")),
        opacity: json::f64_field(fill, "opacity"),
        gradient_stops: json::array_field(fill, "gradientStops")
            .map(|stops| stops.iter().map(gradient_stop).collect()),
        visible: json::bool_field(fill, "visible"),
    }
}

fn stroke_paint(stroke: &Value) -> StrokePaint {
    StrokePaint {
        kind: json::str_field(stroke, "type"),
        color: color::encode(json::field(stroke, "color")),
    }
}

fn gradient_stop(stop: &Value) -> GradientStop {
    GradientStop {
        color: color::encode(json::field(stop, "color")),
        position: json::f64_field(stop, "position"),
    }
}

fn effect(effect: &Value) -> Effect {
    Effect {
        kind: json::str_field(effect, "type"),
        color: color::encode(json::field(effect, "color")),
        offset: json::field(effect, "offset").map(|offset| EffectOffset {
            x: json::f64_field(offset, "x"),
            y: json::f64_field(offset, "y"),
        }),
        radius: json::f64_field(effect, "radius"),
        spread: json::f64_field(effect, "spread"),
        visible: json::bool_field(effect, "visible"),
    }
}
