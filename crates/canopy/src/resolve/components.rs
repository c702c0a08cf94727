//! Component dataset resolution

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::json;

/// A component definition resolved from the published-components dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    /// Publish key
    pub key: Option<String>,

    /// Component display name
    pub name: Option<String>,

    /// Component description
    pub description: Option<String>,

    /// Display name of the containing frame, when published with one
    pub containing_frame: Option<String>,
}

/// Flat lookup from component node identifier to its resolved record.
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    entries: IndexMap<String, ResolvedComponent>,
}

impl ComponentIndex {
    /// Create an empty index.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from a raw component dataset.
    ///
    /// The dataset is expected to be shaped as
    /// `{ meta: { components: [record, ...] } }`, each record keyed by its
    /// own `node_id`. An absent or malformed dataset yields an empty index.
    pub fn build(dataset: Option<&Value>) -> Self {
        let Some(components) = dataset
            .and_then(|d| json::field(d, "meta"))
            .and_then(|meta| json::array_field(meta, "components"))
        else {
            debug!("component dataset absent, resolving against empty index");
            return Self::empty();
        };

        let mut entries = IndexMap::new();
        for component in components {
            let Some(node_id) = json::str_field(component, "node_id") else {
                continue;
            };
            entries.insert(
                node_id,
                ResolvedComponent {
                    key: json::str_field(component, "key"),
                    name: json::str_field(component, "name"),
                    description: json::str_field(component, "description"),
                    containing_frame: json::field(component, "containing_frame")
                        .and_then(|frame| json::str_field(frame, "name")),
                },
            );
        }

        debug!(count = entries.len(), "built component index");
        Self { entries }
    }

    /// Look up a component by node identifier. Absent ids are a normal case.
    pub fn lookup(&self, id: &str) -> Option<&ResolvedComponent> {
        self.entries.get(id)
    }

    /// Number of resolved components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no components.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
