//! Bound-variable resolution

use indexmap::IndexMap;
use serde_json::Value;

use crate::json;
use crate::node::{BindingRef, ResolvedBinding};
use crate::resolve::VariableIndex;

/// Resolve every entry in a node's raw `boundVariables` map.
///
/// A sequence-shaped entry resolves element by element with order
/// preserved; a single binding resolves the same way without wrapping.
/// Anything else under a property name is skipped.
pub(super) fn resolve(node: &Value, variables: &VariableIndex) -> IndexMap<String, BindingRef> {
    let mut out = IndexMap::new();
    let Some(bound) = json::object_field(node, "boundVariables") else {
        return out;
    };

    for (prop, binding) in bound {
        if let Some(sequence) = binding.as_array() {
            out.insert(
                prop.clone(),
                BindingRef::Multiple(sequence.iter().map(|b| widen(b, variables)).collect()),
            );
        } else if binding.is_object() {
            out.insert(prop.clone(), BindingRef::Single(widen(binding, variables)));
        }
    }
    out
}

/// Widen one raw binding with its resolved token name and value.
///
/// Unknown identifiers keep the raw id and resolve to null name/value;
/// resolution never fails.
fn widen(binding: &Value, variables: &VariableIndex) -> ResolvedBinding {
    let id = json::str_field(binding, "id");
    let resolved = id.as_deref().and_then(|id| variables.lookup(id));
    ResolvedBinding {
        kind: json::str_field(binding, "type"),
        token_name: resolved.and_then(|v| v.name.clone()),
        token_value: resolved.and_then(|v| v.value.clone()),
        id,
    }
}
