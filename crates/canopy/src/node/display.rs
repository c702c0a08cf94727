//! Display implementation rendering an indented tree outline

use std::fmt;

use super::{BindingRef, EnrichedNode};

impl fmt::Display for EnrichedNode {
    /// Render the subtree as an indented outline, one header line per node,
    /// with resolved token and component annotations underneath.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, 0, f)
    }
}

fn fmt_node(node: &EnrichedNode, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let indent = "  ".repeat(depth);
    write!(
        f,
        "{}├─ [{}] {} ({})",
        indent,
        node.id.as_deref().unwrap_or("?"),
        node.name.as_deref().unwrap_or("unnamed"),
        node.node_type.as_deref().unwrap_or("UNKNOWN"),
    )?;
    if let (Some(width), Some(height)) = (node.layout.width, node.layout.height) {
        write!(f, " {}x{}", width.round(), height.round())?;
    }
    writeln!(f)?;

    let tokens = token_annotations(node);
    if !tokens.is_empty() {
        writeln!(f, "{}   tokens: {}", indent, tokens.join(", "))?;
    }
    if let Some(name) = node
        .component
        .as_ref()
        .and_then(|c| c.component_name.as_deref())
    {
        writeln!(f, "{}   component: {}", indent, name)?;
    }

    for child in &node.children {
        fmt_node(child, depth + 1, f)?;
    }
    Ok(())
}

/// Collect `prop:tokenName` annotations for every resolvable binding.
fn token_annotations(node: &EnrichedNode) -> Vec<String> {
    let mut out = Vec::new();
    for (prop, binding) in &node.bound_variables {
        match binding {
            BindingRef::Single(b) => {
                if let Some(name) = &b.token_name {
                    out.push(format!("{}:{}", prop, name));
                }
            }
            BindingRef::Multiple(bindings) => {
                for b in bindings {
                    if let Some(name) = &b.token_name {
                        out.push(format!("{}:{}", prop, name));
                    }
                }
            }
        }
    }
    out
}
