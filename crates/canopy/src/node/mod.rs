//! Enriched node representation
//!
//! An [`EnrichedNode`] is the normalized, resolver-annotated output unit of
//! the tree enricher: identity fields carried through unchanged, a sparse
//! bag of style sub-records, bound-variable references widened with their
//! resolved token names and values, and children in original document order.
//!
//! Every style sub-group is an explicit optional field rather than a
//! dynamically keyed map, so group-presence policies (such as the
//! layout-mode gate on auto-layout attributes) are part of the type.

mod display;
mod styles;

pub use styles::{
    AutoLayout, Effect, EffectOffset, GradientStop, NodeStyles, Padding, Paint, StrokePaint,
    TextStyle,
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Layout geometry lifted from a node's absolute bounding box.
///
/// Each field is independently absent when the source lacked it; a node
/// without a bounding box yields all four fields absent, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Layout {
    /// Horizontal position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// A single bound-variable reference, widened with resolution results.
///
/// The raw identifier is always preserved for traceability; an identifier
/// with no entry in the variable index resolves to a null name and value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBinding {
    /// Raw variable identifier
    pub id: Option<String>,
    /// Binding kind tag
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Resolved token display name, null when unresolvable
    pub token_name: Option<String>,
    /// Resolved default-mode value, null when unresolvable
    pub token_value: Option<Value>,
}

/// A bound-variable entry: one binding, or an ordered sequence of bindings.
///
/// Multi-stop bindings (gradients bind each stop independently) arrive as a
/// sequence whose order is semantically meaningful and is preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BindingRef {
    /// A single binding under the property
    Single(ResolvedBinding),
    /// An ordered sequence of bindings under the property
    Multiple(Vec<ResolvedBinding>),
}

/// Component-definition reference attached to instance nodes.
///
/// Present only when the node is an instance and carries a component
/// identifier; name and description stay null for unresolvable ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    /// Raw component identifier
    pub component_id: String,
    /// Resolved component display name
    pub component_name: Option<String>,
    /// Resolved component description
    pub component_description: Option<String>,
}

/// The normalized, enriched output unit of the tree enricher.
///
/// Shape-isomorphic to the raw input tree: one enriched node per raw node,
/// children in identical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedNode {
    /// Node identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Node display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Node type tag (e.g. `FRAME`, `TEXT`, `INSTANCE`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Bounding-box geometry
    pub layout: Layout,

    /// Sparse bag of extracted style attributes
    pub styles: NodeStyles,

    /// Bound-variable references, widened with resolved token names/values
    pub bound_variables: IndexMap<String, BindingRef>,

    /// Component reference, instance nodes only
    #[serde(flatten)]
    pub component: Option<ComponentRef>,

    /// Raw property-to-shared-style-id mapping, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_refs: Option<IndexMap<String, Value>>,

    /// Child nodes in original document order
    pub children: Vec<EnrichedNode>,
}

impl EnrichedNode {
    /// Create an empty enriched node carrying only identity fields.
    pub fn bare(id: Option<String>, name: Option<String>, node_type: Option<String>) -> Self {
        Self {
            id,
            name,
            node_type,
            layout: Layout::default(),
            styles: NodeStyles::default(),
            bound_variables: IndexMap::new(),
            component: None,
            style_refs: None,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(EnrichedNode::node_count).sum::<usize>()
    }
}
