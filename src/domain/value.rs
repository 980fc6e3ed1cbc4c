//! The result value model.
//!
//! The query backend answers with arbitrary JSON; the whole pipeline works
//! on [`ResultValue`], an explicit sum type over the shapes that can arrive.
//! Every consumer matches exhaustively, so a new variant cannot silently
//! fall through a dispatch.

use serde_json::Value;

/// One value returned by the query backend.
///
/// Values are built once from the response body and never mutated after;
/// rendering is a read-only projection.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    /// Absence of data.
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar. Kept as [`serde_json::Number`] so the canonical
    /// string form is exactly what was on the wire.
    Number(serde_json::Number),
    /// A string scalar.
    Text(String),
    /// An ordered sequence. Order is meaningful and preserved.
    List(Vec<ResultValue>),
    /// A key/value mapping. Insertion order is preserved and drives
    /// display order (serde_json is built with `preserve_order`).
    Record(Vec<(String, ResultValue)>),
    /// A leaf of a kind JSON cannot express, reaching the renderer from
    /// some richer source. Carries a type descriptor for display. JSON
    /// deserialization never produces this variant.
    Opaque(String),
}

impl From<Value> for ResultValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ResultValue::Null,
            Value::Bool(b) => ResultValue::Bool(b),
            Value::Number(n) => ResultValue::Number(n),
            Value::String(s) => ResultValue::Text(s),
            Value::Array(items) => {
                ResultValue::List(items.into_iter().map(ResultValue::from).collect())
            }
            Value::Object(map) => ResultValue::Record(
                map.into_iter()
                    .map(|(k, v)| (k, ResultValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl ResultValue {
    /// Look up a key in a record. `None` for every other variant.
    pub fn get(&self, key: &str) -> Option<&ResultValue> {
        match self {
            ResultValue::Record(fields) => {
                fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// The string content, if this is a text scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ResultValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Compact one-line JSON-ish form. Used for stringifying non-scalar
    /// table cells, where there is no room for nested layout.
    pub fn compact(&self) -> String {
        match self {
            ResultValue::Null => "null".to_string(),
            ResultValue::Bool(b) => b.to_string(),
            ResultValue::Number(n) => n.to_string(),
            ResultValue::Text(s) => {
                serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
            }
            ResultValue::List(items) => {
                let inner: Vec<String> = items.iter().map(ResultValue::compact).collect();
                format!("[{}]", inner.join(","))
            }
            ResultValue::Record(fields) => {
                let inner: Vec<String> = fields
                    .iter()
                    .map(|(k, v)| {
                        let key = serde_json::to_string(k).unwrap_or_else(|_| format!("\"{k}\""));
                        format!("{}:{}", key, v.compact())
                    })
                    .collect();
                format!("{{{}}}", inner.join(","))
            }
            ResultValue::Opaque(_) => "unsupported".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conversion_preserves_record_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid_key": 3}"#).unwrap();
        let converted = ResultValue::from(value);

        match converted {
            ResultValue::Record(fields) => {
                let keys: Vec<&str> = fields.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, vec!["zeta", "alpha", "mid_key"]);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn conversion_covers_every_json_type() {
        let value = json!({
            "s": "hello",
            "n": 3.5,
            "b": true,
            "nothing": null,
            "seq": [1, 2],
        });

        let converted = ResultValue::from(value);
        assert_eq!(converted.get("s"), Some(&ResultValue::Text("hello".into())));
        assert_eq!(converted.get("b"), Some(&ResultValue::Bool(true)));
        assert_eq!(converted.get("nothing"), Some(&ResultValue::Null));
        assert!(matches!(converted.get("n"), Some(ResultValue::Number(_))));
        assert!(matches!(
            converted.get("seq"),
            Some(ResultValue::List(items)) if items.len() == 2
        ));
    }

    #[test]
    fn get_is_none_for_non_records() {
        assert_eq!(ResultValue::Null.get("x"), None);
        assert_eq!(ResultValue::Text("x".into()).get("x"), None);
        assert_eq!(ResultValue::List(vec![]).get("x"), None);
    }

    #[test]
    fn compact_is_one_line() {
        let value = ResultValue::from(json!({"a": [1, "two\nlines"], "b": null}));
        let compact = value.compact();
        assert_eq!(compact, r#"{"a":[1,"two\nlines"],"b":null}"#);
        assert!(!compact.contains('\n'));
    }

    #[test]
    fn compact_marks_opaque_leaves() {
        let value = ResultValue::List(vec![ResultValue::Opaque("handle".into())]);
        assert_eq!(value.compact(), "[unsupported]");
    }
}
