//! Variable dataset resolution

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::color;
use crate::json;

/// A variable resolved to its default-mode value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVariable {
    /// Variable display name
    pub name: Option<String>,

    /// Resolved type tag (e.g. `COLOR`, `FLOAT`, `STRING`)
    pub resolved_type: Option<String>,

    /// Value in the collection's default mode.
    ///
    /// Color values are pre-rendered through the color codec; other values
    /// pass through unchanged. Absent mode values stay `None`.
    pub value: Option<Value>,

    /// Platform-specific code-syntax alias, when published
    pub code_syntax: Option<String>,

    /// Owning collection's display name
    pub collection_name: Option<String>,
}

/// Flat lookup from variable identifier to its resolved record.
///
/// Built once per extraction run; immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct VariableIndex {
    entries: IndexMap<String, ResolvedVariable>,
}

impl VariableIndex {
    /// Create an empty index.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the index from a raw variable dataset.
    ///
    /// The dataset is expected to be shaped as
    /// `{ meta: { variables: {id -> record}, variableCollections: {id -> record} } }`.
    /// An absent or malformed dataset yields an empty index.
    pub fn build(dataset: Option<&Value>) -> Self {
        let Some(meta) = dataset.and_then(|d| json::field(d, "meta")) else {
            debug!("variable dataset absent, resolving against empty index");
            return Self::empty();
        };
        let Some(variables) = json::object_field(meta, "variables") else {
            return Self::empty();
        };
        let collections = json::field(meta, "variableCollections");

        let mut entries = IndexMap::new();
        for (id, variable) in variables {
            let collection = json::str_field(variable, "variableCollectionId")
                .and_then(|cid| collections.and_then(|c| json::field(c, &cid)));

            let default_mode = collection.and_then(|c| json::str_field(c, "defaultModeId"));
            let mode_value = default_mode.as_deref().and_then(|mode| {
                json::field(variable, "valuesByMode").and_then(|values| json::field(values, mode))
            });

            let resolved_type = json::str_field(variable, "resolvedType");
            let value = match resolved_type.as_deref() {
                Some("COLOR") => color::encode(mode_value).map(Value::String),
                _ => mode_value.cloned(),
            };

            entries.insert(
                id.clone(),
                ResolvedVariable {
                    name: json::str_field(variable, "name"),
                    resolved_type,
                    value,
                    code_syntax: json::field(variable, "codeSyntax")
                        .and_then(|syntax| json::str_field(syntax, "WEB")),
                    collection_name: collection.and_then(|c| json::str_field(c, "name")),
                },
            );
        }

        debug!(count = entries.len(), "built variable index");
        Self { entries }
    }

    /// Look up a variable by identifier. Absent ids are a normal case.
    pub fn lookup(&self, id: &str) -> Option<&ResolvedVariable> {
        self.entries.get(id)
    }

    /// Number of resolved variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no variables.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over resolved variables in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ResolvedVariable)> {
        self.entries.iter()
    }
}
