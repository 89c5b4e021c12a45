//! Recursive flattening of nested mappings into single-level records.
//!
//! Nested keys are joined with `_`, so `{"a": {"b": 1}}` flattens to
//! `{"a_b": 1}`. The separator is part of the public column-naming contract
//! of every flatten-mode endpoint. Keys listed in `skip_keys` pass through
//! unflattened (arrays or objects meant to survive verbatim); non-mapping
//! values are copied unchanged.

use serde_json::{Map, Value};

use crate::record::FlatRecord;

pub fn flatten(record: &Map<String, Value>, skip_keys: &[&str]) -> FlatRecord {
    let mut out = FlatRecord::new();
    flatten_into(&mut out, record, "", skip_keys);
    out
}

fn flatten_into(
    out: &mut FlatRecord,
    record: &Map<String, Value>,
    prefix: &str,
    skip_keys: &[&str],
) {
    for (key, value) in record {
        if skip_keys.contains(&key.as_str()) {
            out.insert(format!("{prefix}{key}"), value.clone());
        } else if let Some(nested) = value.as_object() {
            flatten_into(out, nested, &format!("{prefix}{key}_"), skip_keys);
        } else {
            out.insert(format!("{prefix}{key}"), value.clone());
        }
    }
}

/// Copy-then-rename of a key inside a nested sub-mapping, used to
/// disambiguate known column collisions before flattening (e.g. an ice rink
/// `id` colliding with the game `id`). The input is left untouched.
pub fn rename_nested(
    record: &Map<String, Value>,
    parent: &str,
    from: &str,
    to: &str,
) -> Map<String, Value> {
    let mut out = record.clone();
    if let Some(Value::Object(sub)) = out.get_mut(parent) {
        if let Some(value) = sub.remove(from) {
            sub.insert(to.to_string(), value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn every_leaf_appears_once_under_its_path() {
        let record = as_map(json!({
            "id": 1,
            "iceRink": {"name": "Arena", "location": {"city": "Tampere"}},
            "tags": ["a", "b"],
        }));
        let flat = flatten(&record, &[]);
        let columns: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(
            columns,
            vec!["id", "iceRink_name", "iceRink_location_city", "tags"]
        );
        assert_eq!(flat["iceRink_location_city"], json!("Tampere"));
        assert_eq!(flat["tags"], json!(["a", "b"]));
    }

    #[test]
    fn skip_keys_pass_through_unflattened() {
        let record = as_map(json!({
            "id": 1,
            "logos": {"darkBg": "a.png", "lightBg": "b.png"},
        }));
        let flat = flatten(&record, &["logos"]);
        assert_eq!(flat["logos"], json!({"darkBg": "a.png", "lightBg": "b.png"}));
        assert_eq!(flat["id"], json!(1));
    }

    #[test]
    fn rename_nested_copies_and_leaves_input_alone() {
        let record = as_map(json!({"id": 1, "iceRink": {"id": 9, "name": "Arena"}}));
        let renamed = rename_nested(&record, "iceRink", "id", "rinkId");

        assert_eq!(renamed["iceRink"], json!({"name": "Arena", "rinkId": 9}));
        assert_eq!(record["iceRink"], json!({"id": 9, "name": "Arena"}));

        let flat = flatten(&renamed, &[]);
        assert_eq!(flat["id"], json!(1));
        assert_eq!(flat["iceRink_rinkId"], json!(9));
    }
}
