//! Best-effort field access over raw JSON documents
//!
//! Raw node trees are treated as opaque records: every accessor returns
//! `Option` and a wrong-typed field reads the same as an absent one. A
//! malformed subtree therefore never aborts a whole-tree walk.

use serde_json::{Map, Value};

/// Get a named field from an object value.
pub(crate) fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|obj| obj.get(key))
}

/// Get a named field as a string, cloned out of the document.
pub(crate) fn str_field(value: &Value, key: &str) -> Option<String> {
    field(value, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Get a named field as a float.
pub(crate) fn f64_field(value: &Value, key: &str) -> Option<f64> {
    field(value, key).and_then(Value::as_f64)
}

/// Get a named field as a boolean.
pub(crate) fn bool_field(value: &Value, key: &str) -> Option<bool> {
    field(value, key).and_then(Value::as_bool)
}

/// Get a named field as an array slice.
pub(crate) fn array_field<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    field(value, key).and_then(Value::as_array)
}

/// Get a named field as an object map.
pub(crate) fn object_field<'a>(value: &'a Value, key: &str) -> Option<&'a Map<String, Value>> {
    field(value, key).and_then(Value::as_object)
}

/// Get a named field as a list of floats, dropping non-numeric elements.
pub(crate) fn f64_list_field(value: &Value, key: &str) -> Option<Vec<f64>> {
    array_field(value, key).map(|items| items.iter().filter_map(Value::as_f64).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_type_reads_as_absent() {
        let doc = json!({ "name": 42, "width": "wide" });
        assert_eq!(str_field(&doc, "name"), None);
        assert_eq!(f64_field(&doc, "width"), None);
    }

    #[test]
    fn test_accessors_on_non_object() {
        let doc = json!([1, 2, 3]);
        assert_eq!(field(&doc, "anything"), None);
        assert_eq!(bool_field(&doc, "visible"), None);
    }

    #[test]
    fn test_f64_list_drops_non_numeric() {
        let doc = json!({ "radii": [4.0, "x", 8.0, null] });
        assert_eq!(f64_list_field(&doc, "radii"), Some(vec![4.0, 8.0]));
    }
}
