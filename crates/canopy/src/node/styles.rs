//! Style sub-records carried by an enriched node

use serde::Serialize;

/// Sparse bag of style attributes extracted from a raw node.
///
/// Every sub-group is independently optional: an absent group means the
/// source node lacked the fields that gate it, and absent groups are not
/// serialized at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyles {
    /// Fill paints, present only when the raw fill sequence is non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,

    /// Stroke paints, present only when the raw stroke sequence is non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<StrokePaint>>,

    /// Stroke weight, carried alongside strokes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,

    /// Stroke alignment, carried alongside strokes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<String>,

    /// Uniform corner radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,

    /// Per-corner radii; may coexist with the uniform radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rectangle_corner_radii: Option<Vec<f64>>,

    /// Shadow and blur effects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,

    /// Padding group, gated on the presence of the raw left-padding field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,

    /// Inter-item spacing, renamed from the raw `itemSpacing` field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,

    /// Auto-layout attribute group, gated on the raw layout-mode field
    #[serde(flatten)]
    pub auto_layout: Option<AutoLayout>,

    /// Opacity, carried only when present and not the fully-opaque default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    /// Text metrics, always present for text nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

/// One fill paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    /// Paint kind tag (e.g. `SOLID`, `GRADIENT_LINEAR`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Canonical color string for solid paints, null otherwise
    pub color: Option<String>,

    /// Paint opacity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    /// Ordered gradient stops for gradient paints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<GradientStop>>,

    /// Visibility flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// One stroke paint. Strokes carry no gradient stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokePaint {
    /// Paint kind tag
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Canonical color string, null when the paint has no solid color
    pub color: Option<String>,
}

/// One gradient stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    /// Canonical color string at this stop
    pub color: Option<String>,

    /// Stop position along the gradient axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

/// One shadow or blur effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    /// Effect kind tag (e.g. `DROP_SHADOW`, `LAYER_BLUR`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Canonical color string, null for colorless effects
    pub color: Option<String>,

    /// Shadow offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<EffectOffset>,

    /// Blur radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,

    /// Shadow spread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,

    /// Visibility flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Shadow offset vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectOffset {
    /// Horizontal offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Padding group.
///
/// Emitted as a whole only when the raw left-padding field is present; the
/// left field is the presence sentinel for the group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    /// Top padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    /// Right padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    /// Bottom padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    /// Left padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
}

/// Auto-layout attribute group.
///
/// The layout-mode field is the gate: when it is absent the whole group is
/// suppressed even if sibling fields exist on the raw node. Callers relying
/// on auto-layout attributes must check for the mode first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    /// Layout mode (`HORIZONTAL` or `VERTICAL`)
    pub layout_mode: String,

    /// Primary-axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<String>,

    /// Counter-axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<String>,

    /// Horizontal sizing mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_sizing_horizontal: Option<String>,

    /// Vertical sizing mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_sizing_vertical: Option<String>,

    /// Wrap flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_wrap: Option<String>,
}

/// Text metrics group.
///
/// Always emitted for text nodes, even when every sub-field is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Character content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,

    /// Font family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    /// Font weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,

    /// Line height in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,

    /// Letter spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,

    /// Horizontal alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,

    /// Vertical alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
}
