use canopy::*;
use pretty_assertions::assert_eq;
use serde_json::json;

// ═══════════════════════════════════════════════════════════════════════
// Variable Resolution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_variable_index_resolves_default_mode() {
    let dataset = json!({
        "meta": {
            "variables": {
                "VariableID:1": {
                    "name": "Surface/Base",
                    "resolvedType": "COLOR",
                    "variableCollectionId": "VariableCollectionId:1",
                    "valuesByMode": {
                        "light": { "r": 1.0, "g": 1.0, "b": 1.0 },
                        "dark": { "r": 0.0, "g": 0.0, "b": 0.0 }
                    },
                    "codeSyntax": { "WEB": "--surface-base" }
                }
            },
            "variableCollections": {
                "VariableCollectionId:1": { "name": "Core", "defaultModeId": "light" }
            }
        }
    });

    let index = VariableIndex::build(Some(&dataset));
    assert_eq!(index.len(), 1);

    let resolved = index.lookup("VariableID:1").expect("should resolve");
    assert_eq!(resolved.name.as_deref(), Some("Surface/Base"));
    assert_eq!(resolved.resolved_type.as_deref(), Some("COLOR"));
    assert_eq!(resolved.value, Some(json!("#ffffff")));
    assert_eq!(resolved.code_syntax.as_deref(), Some("--surface-base"));
    assert_eq!(resolved.collection_name.as_deref(), Some("Core"));
}

#[test]
fn test_non_color_values_pass_through_unchanged() {
    let dataset = json!({
        "meta": {
            "variables": {
                "VariableID:2": {
                    "name": "Radius/Large",
                    "resolvedType": "FLOAT",
                    "variableCollectionId": "VariableCollectionId:1",
                    "valuesByMode": { "m": 24.0 }
                },
                "VariableID:3": {
                    "name": "Brand/Label",
                    "resolvedType": "STRING",
                    "variableCollectionId": "VariableCollectionId:1",
                    "valuesByMode": { "m": "Acme" }
                }
            },
            "variableCollections": {
                "VariableCollectionId:1": { "name": "Core", "defaultModeId": "m" }
            }
        }
    });

    let index = VariableIndex::build(Some(&dataset));
    assert_eq!(index.lookup("VariableID:2").unwrap().value, Some(json!(24.0)));
    assert_eq!(index.lookup("VariableID:3").unwrap().value, Some(json!("Acme")));
}

#[test]
fn test_missing_mode_value_resolves_to_null_value() {
    let dataset = json!({
        "meta": {
            "variables": {
                "VariableID:4": {
                    "name": "Orphan",
                    "resolvedType": "FLOAT",
                    "variableCollectionId": "VariableCollectionId:1",
                    "valuesByMode": { "other-mode": 1.0 }
                }
            },
            "variableCollections": {
                "VariableCollectionId:1": { "name": "Core", "defaultModeId": "m" }
            }
        }
    });

    let index = VariableIndex::build(Some(&dataset));
    let resolved = index.lookup("VariableID:4").expect("entry should exist");
    assert_eq!(resolved.name.as_deref(), Some("Orphan"));
    assert_eq!(resolved.value, None);
}

#[test]
fn test_unknown_collection_degrades_gracefully() {
    let dataset = json!({
        "meta": {
            "variables": {
                "VariableID:5": {
                    "name": "Detached",
                    "resolvedType": "FLOAT",
                    "variableCollectionId": "VariableCollectionId:404",
                    "valuesByMode": { "m": 2.0 }
                }
            },
            "variableCollections": {}
        }
    });

    let index = VariableIndex::build(Some(&dataset));
    let resolved = index.lookup("VariableID:5").expect("entry should exist");
    assert_eq!(resolved.value, None);
    assert_eq!(resolved.collection_name, None);
}

#[test]
fn test_absent_or_malformed_dataset_yields_empty_index() {
    assert!(VariableIndex::build(None).is_empty());
    assert!(VariableIndex::build(Some(&json!({}))).is_empty());
    assert!(VariableIndex::build(Some(&json!({ "meta": { "variables": 42 } }))).is_empty());
    assert!(VariableIndex::empty().lookup("VariableID:1").is_none());
}

// ═══════════════════════════════════════════════════════════════════════
// Component Resolution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_component_index_keyed_by_node_id() {
    let dataset = json!({
        "meta": {
            "components": [
                {
                    "node_id": "10:1",
                    "key": "k1",
                    "name": "Input/Default",
                    "description": "Single-line input",
                    "containing_frame": { "name": "Forms" }
                },
                { "node_id": "10:2", "key": "k2", "name": "Input/Error" }
            ]
        }
    });

    let index = ComponentIndex::build(Some(&dataset));
    assert_eq!(index.len(), 2);

    let first = index.lookup("10:1").expect("should resolve");
    assert_eq!(first.name.as_deref(), Some("Input/Default"));
    assert_eq!(first.containing_frame.as_deref(), Some("Forms"));

    let second = index.lookup("10:2").expect("should resolve");
    assert_eq!(second.description, None);
    assert_eq!(second.containing_frame, None);
}

#[test]
fn test_component_records_without_node_id_dropped() {
    let dataset = json!({ "meta": { "components": [{ "name": "Nameless" }] } });
    assert!(ComponentIndex::build(Some(&dataset)).is_empty());
}

#[test]
fn test_absent_component_dataset_yields_empty_index() {
    assert!(ComponentIndex::build(None).is_empty());
    assert!(ComponentIndex::build(Some(&json!({ "meta": {} }))).is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Style Registry
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_style_registry_partitions_by_kind() {
    let document = json!([
        { "node_id": "a", "name": "Primary/Blue", "style_type": "FILL" },
        { "node_id": "b", "name": "Body", "style_type": "TEXT" }
    ]);

    let registry = StyleRegistry::build(&document);
    assert_eq!(registry.colors["Primary/Blue"], "a");
    assert_eq!(registry.texts["Body"], "b");
    assert_eq!(registry.raw_map.len(), 2);
    assert_eq!(registry.raw_map["a"]["style_type"], json!("FILL"));
    assert_eq!(registry.raw_map["b"]["name"], json!("Body"));
}

#[test]
fn test_style_registry_keeps_unrecognized_kinds_raw_only() {
    let document = json!([
        { "node_id": "c", "name": "Soft Shadow", "style_type": "EFFECT" }
    ]);

    let registry = StyleRegistry::build(&document);
    assert!(registry.colors.is_empty());
    assert!(registry.texts.is_empty());
    assert_eq!(registry.raw_map["c"]["name"], json!("Soft Shadow"));
}

#[test]
fn test_style_registry_drops_unkeyable_records() {
    let document = json!([{ "name": "No id", "style_type": "FILL" }]);
    let registry = StyleRegistry::build(&document);
    assert!(registry.raw_map.is_empty());
    assert!(registry.colors.is_empty());
}
