//! Lenient field readers used through `#[serde(deserialize_with = ...)]`.
//!
//! Hand-authored documents drift: keys go missing, ages get written as
//! numbers, a list turns into a string. None of that is an error here; the
//! affected field simply reads as its default.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Read a nested record. Anything but a JSON object reads as `T::default()`.
pub fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(record_from_value(value))
}

/// Read a scalar as text. Numbers and booleans are coerced to their text form.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value).unwrap_or_default())
}

/// Read an ordered sequence of lines. Non-scalar items are dropped.
pub fn lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lines_from_value(&value))
}

/// Read the raw fields of a record. Anything but a JSON object reads as no fields.
///
/// Used by records that accept a legacy key next to the wire key.
pub fn fields<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// Take the value stored under `key`, or under `alias` when `key` is absent.
///
/// Both keys are removed. When a document carries both, the wire key wins and
/// the alias is ignored.
pub fn take_aliased(fields: &mut Map<String, Value>, key: &str, alias: &str) -> Option<Value> {
    let value = fields.remove(key);
    let legacy = fields.remove(alias);
    value.or(legacy)
}

/// Lines of an already parsed value.
pub fn lines_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    }
}

/// Read an ordered name -> record mapping, keeping source order.
///
/// An entry whose record has the wrong shape keeps its name and reads as an
/// empty record.
pub fn entries<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(IndexMap::new());
    };

    Ok(map
        .into_iter()
        .map(|(name, value)| (name, record_from_value(value)))
        .collect())
}

/// Record of an already parsed value. Anything but an object reads as default.
pub fn record_from_value<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    // Derived structs also accept JSON arrays positionally, which is never
    // what a hand-authored document means.
    match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "text")]
        name: String,
        #[serde(default, deserialize_with = "lines")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "entries")]
        groups: IndexMap<String, Nested>,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Nested {
        #[serde(deserialize_with = "text")]
        label: String,
    }

    fn sample(json: &str) -> Sample {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_coerces_numbers() {
        assert_eq!(sample(r#"{"name": 17}"#).name, "17");
        assert_eq!(sample(r#"{"name": true}"#).name, "true");
        assert_eq!(sample(r#"{"name": null}"#).name, "");
        assert_eq!(sample(r#"{"name": ["x"]}"#).name, "");
    }

    #[test]
    fn test_lines_drop_nested_values() {
        let p = sample(r#"{"items": ["a", 2, null, {"x": 1}, "b"]}"#);
        assert_eq!(p.items, vec!["a", "2", "b"]);

        assert!(sample(r#"{"items": "not a list"}"#).items.is_empty());
    }

    #[test]
    fn test_entries_keep_source_order() {
        let p = sample(
            r#"{"groups": {"zeta": {"label": "z"}, "alpha": {"label": "a"}, "mid": ["m"]}}"#,
        );
        let names: Vec<_> = p.groups.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(p.groups["zeta"].label, "z");
        assert_eq!(p.groups["mid"], Nested::default());
    }

    #[test]
    fn test_take_aliased_prefers_wire_key() {
        let Value::Object(mut map) =
            serde_json::json!({"wire": 1, "legacy": 2, "other": 3})
        else {
            unreachable!()
        };
        assert_eq!(take_aliased(&mut map, "wire", "legacy"), Some(Value::from(1)));
        assert!(!map.contains_key("legacy"));
        assert!(map.contains_key("other"));

        let Value::Object(mut map) = serde_json::json!({"legacy": 2}) else {
            unreachable!()
        };
        assert_eq!(take_aliased(&mut map, "wire", "legacy"), Some(Value::from(2)));
        assert_eq!(take_aliased(&mut map, "wire", "legacy"), None);
    }

    #[test]
    fn test_entries_wrong_type_is_empty() {
        assert!(sample(r#"{"groups": []}"#).groups.is_empty());
    }
}
