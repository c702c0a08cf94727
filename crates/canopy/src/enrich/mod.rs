//! Tree extraction and enrichment
//!
//! The enricher walks a raw node tree top-down and produces an
//! [`EnrichedNode`] per raw node: identity carried through, geometry and
//! style attributes lifted into typed sub-records, bound-variable and
//! component references resolved against the run's indexes, children
//! recursed in original order.
//!
//! No step failure aborts the walk. Every extraction step is independent
//! and degrades to omitting its output field when the source fields are
//! absent or malformed, so a single broken subtree never costs the rest
//! of the tree.

mod bindings;
mod layout;
mod paint;
mod text;

use serde_json::Value;
use tracing::{trace, warn};

use crate::context::ExtractContext;
use crate::json;
use crate::node::{ComponentRef, EnrichedNode};
use crate::resolve::{ComponentIndex, VariableIndex};

/// Node type tag for text nodes.
const TEXT_NODE: &str = "TEXT";

/// Node type tag for component-instance nodes.
const INSTANCE_NODE: &str = "INSTANCE";

/// The tree enricher for one extraction run.
///
/// Holds the run's resolver indexes; purely functional over them and the
/// raw tree, with no state shared between runs.
#[derive(Debug)]
pub struct Enricher<'a> {
    variables: &'a VariableIndex,
    components: &'a ComponentIndex,
    ctx: ExtractContext,
}

impl<'a> Enricher<'a> {
    /// Create an enricher over the given resolver indexes.
    pub fn new(variables: &'a VariableIndex, components: &'a ComponentIndex) -> Self {
        Self {
            variables,
            components,
            ctx: ExtractContext::default(),
        }
    }

    /// Create an enricher with a custom extraction context.
    pub fn with_context(
        variables: &'a VariableIndex,
        components: &'a ComponentIndex,
        ctx: ExtractContext,
    ) -> Self {
        Self {
            variables,
            components,
            ctx,
        }
    }

    /// Extract and enrich a raw node tree.
    pub fn enrich(&self, node: &Value) -> EnrichedNode {
        self.enrich_at(node, 0)
    }

    fn enrich_at(&self, node: &Value, depth: usize) -> EnrichedNode {
        let mut out = EnrichedNode::bare(
            json::str_field(node, "id"),
            json::str_field(node, "name"),
            json::str_field(node, "type"),
        );
        if self.ctx.trace {
            trace!(id = ?out.id, ty = ?out.node_type, depth, "enriching node");
        }

        out.layout = layout::bounding_box(node);
        out.bound_variables = bindings::resolve(node, self.variables);

        paint::apply(node, &mut out.styles);
        layout::apply(node, &mut out.styles);
        if out.node_type.as_deref() == Some(TEXT_NODE) {
            out.styles.text = Some(text::extract(node));
        }

        out.component = self.component_ref(node, out.node_type.as_deref());
        out.style_refs = style_refs(node);

        if let Some(children) = json::array_field(node, "children") {
            if depth >= self.ctx.max_depth {
                warn!(
                    id = ?out.id,
                    max_depth = self.ctx.max_depth,
                    "depth bound reached, dropping remaining subtree"
                );
            } else {
                out.children = children
                    .iter()
                    .map(|child| self.enrich_at(child, depth + 1))
                    .collect();
            }
        }

        out
    }

    /// Attach the component reference for instance nodes.
    ///
    /// Only instance nodes carrying a component identifier get one; an
    /// identifier absent from the index resolves to null name/description.
    fn component_ref(&self, node: &Value, node_type: Option<&str>) -> Option<ComponentRef> {
        if node_type != Some(INSTANCE_NODE) {
            return None;
        }
        let component_id = json::str_field(node, "componentId")?;
        let resolved = self.components.lookup(&component_id);
        Some(ComponentRef {
            component_id,
            component_name: resolved.and_then(|c| c.name.clone()),
            component_description: resolved.and_then(|c| c.description.clone()),
        })
    }
}

/// Pass through the raw property-to-shared-style-id mapping unchanged.
fn style_refs(node: &Value) -> Option<indexmap::IndexMap<String, Value>> {
    json::object_field(node, "styles").map(|styles| {
        styles
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    })
}
