//! Nested field extraction driven by a [`ColumnSpec`].

use serde_json::Value;

use crate::record::FlatRecord;

/// Ordered mapping from a dotted source path to an output column name,
/// declared statically per endpoint. Output column names are unique within
/// one spec; source paths may address any depth.
#[derive(Clone, Copy)]
pub struct ColumnSpec {
    entries: &'static [(&'static str, &'static str)],
}

impl ColumnSpec {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Iterates `(source path, output column)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves a dotted path inside a nested mapping.
///
/// Returns JSON null as soon as a segment is absent or the traversal reaches
/// a non-mapping value. The resolved value is returned as-is, which may
/// itself be a nested mapping or an array. Absence is never an error.
pub fn extract(record: &Value, path: &str) -> Value {
    let mut current = record;
    for segment in path.split('.') {
        match current.as_object().and_then(|map| map.get(segment)) {
            Some(next) => current = next,
            None => return Value::Null,
        }
    }
    current.clone()
}

/// Applies [`extract`] once per spec entry, building a record keyed by the
/// declared output column names. The key set of the result always equals the
/// spec's column names, whatever the input looks like.
pub fn extract_record(record: &Value, spec: &ColumnSpec) -> FlatRecord {
    let mut out = FlatRecord::new();
    for (path, column) in spec.entries() {
        out.insert(column.to_string(), extract(record, path));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_resolves_nested_paths() {
        let record = json!({"a": {"b": {"c": 7}}});
        assert_eq!(extract(&record, "a.b.c"), json!(7));
        assert_eq!(extract(&record, "a.b"), json!({"c": 7}));
    }

    #[test]
    fn extract_returns_null_for_all_three_missing_cases() {
        // Top-level key absent.
        assert_eq!(extract(&json!({}), "a.b"), Value::Null);
        // Intermediate value present but not a mapping.
        assert_eq!(extract(&json!({"a": 5}), "a.b"), Value::Null);
        // Leaf key absent.
        assert_eq!(extract(&json!({"a": {}}), "a.b"), Value::Null);
    }

    #[test]
    fn extract_record_key_set_equals_the_spec() {
        static SPEC: ColumnSpec = ColumnSpec::new(&[
            ("id", "gameId"),
            ("homeTeam.goals", "homeGoals"),
            ("missing.path", "nowhere"),
        ]);
        let record = json!({"id": 1, "homeTeam": {"goals": 3}});
        let out = extract_record(&record, &SPEC);
        let columns: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(columns, vec!["gameId", "homeGoals", "nowhere"]);
        assert_eq!(out["gameId"], json!(1));
        assert_eq!(out["homeGoals"], json!(3));
        assert_eq!(out["nowhere"], Value::Null);

        // Same key set on an empty input.
        let empty = extract_record(&json!({}), &SPEC);
        assert_eq!(empty.len(), SPEC.len());
        assert!(empty.values().all(Value::is_null));
    }
}
