//! Shared-style registry

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::json;

/// Style-type tag for fill (color) styles.
pub const FILL_STYLE: &str = "FILL";

/// Style-type tag for text (typography) styles.
pub const TEXT_STYLE: &str = "TEXT";

/// Name- and id-indexed registry over a flat style-metadata list,
/// partitioned by style kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleRegistry {
    /// Fill-typed styles, name to node id
    pub colors: IndexMap<String, String>,

    /// Text-typed styles, name to node id
    pub texts: IndexMap<String, String>,

    /// Every record, keyed by node id and carried in full.
    ///
    /// Records with an unrecognized style type land here and contribute to
    /// neither typed sub-map.
    pub raw_map: IndexMap<String, Value>,
}

impl StyleRegistry {
    /// Build a registry from a raw style-metadata document.
    ///
    /// Accepts either a flat list of `{node_id, name, style_type}` records
    /// or the upstream `{ meta: { styles: [...] } }` wrapper. Records
    /// without a `node_id` cannot be keyed and are dropped.
    pub fn build(document: &Value) -> Self {
        let styles = document
            .as_array()
            .or_else(|| {
                json::field(document, "meta").and_then(|meta| json::array_field(meta, "styles"))
            })
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let mut registry = Self::default();
        for record in styles {
            let Some(node_id) = json::str_field(record, "node_id") else {
                continue;
            };
            let name = json::str_field(record, "name");

            match (json::str_field(record, "style_type").as_deref(), name) {
                (Some(FILL_STYLE), Some(name)) => {
                    registry.colors.insert(name, node_id.clone());
                }
                (Some(TEXT_STYLE), Some(name)) => {
                    registry.texts.insert(name, node_id.clone());
                }
                _ => {}
            }
            registry.raw_map.insert(node_id, record.clone());
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unrecognized_type_only_in_raw_map() {
        let doc = json!([
            { "node_id": "1:1", "name": "Grid", "style_type": "GRID" }
        ]);
        let registry = StyleRegistry::build(&doc);
        assert!(registry.colors.is_empty());
        assert!(registry.texts.is_empty());
        assert_eq!(registry.raw_map.len(), 1);
    }

    #[test]
    fn test_meta_wrapper_accepted() {
        let doc = json!({ "meta": { "styles": [
            { "node_id": "1:2", "name": "Primary", "style_type": "FILL" }
        ]}});
        let registry = StyleRegistry::build(&doc);
        assert_eq!(registry.colors.get("Primary"), Some(&"1:2".to_string()));
    }
}
