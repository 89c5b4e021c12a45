//! The flat record type and scalar helpers shared across the normalization core.

use serde_json::{Map, Number, Value};

/// A single flat output record: output column name to scalar (or opaque
/// passthrough) value. Column order follows the declaration order of the
/// endpoint's column spec.
pub type FlatRecord = Map<String, Value>;

/// Reduces a composite `"<id>:<name>"` string to its id part.
///
/// Non-string values and strings without a delimiter are returned unchanged.
pub fn split_composite_id(value: &Value) -> Value {
    match value.as_str().and_then(|s| s.split_once(':')) {
        Some((id, _)) => Value::String(id.to_string()),
        None => value.clone(),
    }
}

/// Applies [`split_composite_id`] in place to one field of a record, if present.
pub fn split_id_field(record: &mut FlatRecord, field: &str) {
    if let Some(value) = record.get(field) {
        let split = split_composite_id(value);
        record.insert(field.to_string(), split);
    }
}

/// Adds two JSON numbers, staying in integer arithmetic when both sides are
/// integers. Non-numeric operands count as zero.
pub fn add_numeric(a: &Value, b: &Value) -> Value {
    match (a.as_i64(), b.as_i64()) {
        (Some(x), Some(y)) => Value::from(x + y),
        _ => {
            let sum = a.as_f64().unwrap_or(0.0) + b.as_f64().unwrap_or(0.0);
            Number::from_f64(sum).map(Value::Number).unwrap_or(Value::Null)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_composite_id_keeps_id_part() {
        assert_eq!(split_composite_id(&json!("123:Team Name")), json!("123"));
        assert_eq!(split_composite_id(&json!("plain")), json!("plain"));
        assert_eq!(split_composite_id(&json!(42)), json!(42));
        assert_eq!(split_composite_id(&Value::Null), Value::Null);
    }

    #[test]
    fn add_numeric_prefers_integers() {
        assert_eq!(add_numeric(&json!(2), &json!(3)), json!(5));
        assert_eq!(add_numeric(&json!(1.5), &json!(2)), json!(3.5));
        assert_eq!(add_numeric(&json!("x"), &json!(2)), json!(2.0));
    }
}
