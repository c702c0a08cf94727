//! Flattening and summary queries over an enriched tree
//!
//! Consumers of an extraction run rarely want the whole tree: they ask for
//! the text content, the placed component instances, or a per-type census.
//! These queries walk the enriched tree with an explicit work stack and
//! preserve document order throughout.

use indexmap::IndexMap;
use serde::Serialize;

use crate::node::EnrichedNode;

/// A text node lifted out of the tree with its context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    /// Node identifier
    pub id: Option<String>,

    /// Node display name
    pub name: Option<String>,

    /// Slash-joined path of ancestor names down to this node
    pub path: String,

    /// Character content
    pub characters: Option<String>,
}

/// A component instance lifted out of the tree with its context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstanceNode {
    /// Node identifier
    pub id: Option<String>,

    /// Node display name
    pub name: Option<String>,

    /// Slash-joined path of ancestor names down to this node
    pub path: String,

    /// Referenced component identifier
    pub component_id: String,

    /// Resolved component name, when the id was resolvable
    pub component_name: Option<String>,
}

/// Flatten a tree into a list of node references in document order.
pub fn flatten(root: &EnrichedNode) -> Vec<&EnrichedNode> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.children.iter().rev());
    }
    out
}

/// Count nodes per type tag, in first-seen order.
pub fn type_counts(root: &EnrichedNode) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for node in flatten(root) {
        let ty = node.node_type.clone().unwrap_or_else(|| "UNKNOWN".to_string());
        *counts.entry(ty).or_insert(0) += 1;
    }
    counts
}

/// Collect every text node with its path and character content.
pub fn collect_text_nodes(root: &EnrichedNode) -> Vec<TextNode> {
    let mut out = Vec::new();
    walk_with_path(root, "", &mut |node, path| {
        if node.node_type.as_deref() == Some("TEXT") {
            out.push(TextNode {
                id: node.id.clone(),
                name: node.name.clone(),
                path: path.to_string(),
                characters: node
                    .styles
                    .text
                    .as_ref()
                    .and_then(|text| text.characters.clone()),
            });
        }
    });
    out
}

/// Collect every component instance with its path and resolved name.
pub fn collect_instances(root: &EnrichedNode) -> Vec<InstanceNode> {
    let mut out = Vec::new();
    walk_with_path(root, "", &mut |node, path| {
        if let Some(component) = &node.component {
            out.push(InstanceNode {
                id: node.id.clone(),
                name: node.name.clone(),
                path: path.to_string(),
                component_id: component.component_id.clone(),
                component_name: component.component_name.clone(),
            });
        }
    });
    out
}

/// Depth-first walk carrying the slash-joined ancestor path.
fn walk_with_path<'a, F>(node: &'a EnrichedNode, parent_path: &str, visit: &mut F)
where
    F: FnMut(&'a EnrichedNode, &str),
{
    let path = format!(
        "{}/{}",
        parent_path,
        node.name.as_deref().unwrap_or("unnamed")
    );
    visit(node, &path);
    for child in &node.children {
        walk_with_path(child, &path, visit);
    }
}
