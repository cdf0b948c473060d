use serde_json::{Map, Value};
use tracing::trace;

use crate::models::{Dataset, ResourceRecord, UNKNOWN_RESOURCE};
use super::canonical::extract_actual_url;
use super::names::extract_domain_name;

/// Fields that may carry an endpoint, in extraction priority order
const URL_FIELDS: [&str; 4] = ["api", "base_url", "url", "link"];

/// Fields that may carry a display name, in priority order
const NAME_FIELDS: [&str; 2] = ["name", "key"];

/// Recursively walks a parsed JSON document collecting resource records
///
/// Objects that directly describe a resource (a name/key plus a valid endpoint
/// field) are extracted as one unit and not descended into. Any other string
/// value holding a valid endpoint becomes a record named after the nearest
/// sensible label.
///
/// # Arguments
/// * `value` - The JSON value to walk
/// * `parent_key` - Key under which `value` was found, empty at the top level
///
/// # Returns
/// * `Dataset` - Records in document order
pub fn walk_json(value: &Value, parent_key: &str) -> Dataset {
    let mut records = Dataset::new();
    collect(value, parent_key, &mut records);
    records
}

fn collect(value: &Value, parent_key: &str, records: &mut Dataset) {
    match value {
        Value::Object(object) => collect_object(object, parent_key, records),
        Value::Array(items) => {
            for item in items {
                collect(item, parent_key, records);
            }
        }
        _ => {}
    }
}

fn collect_object(object: &Map<String, Value>, parent_key: &str, records: &mut Dataset) {
    if let Some(record) = extract_resource_object(object) {
        trace!("Resource object found under '{}': {}", parent_key, record);
        records.push(record);
        return;
    }

    for (key, value) in object {
        match value {
            Value::String(text) => {
                if let Some(url) = extract_actual_url(text) {
                    let name = name_for_field(object, key, parent_key);
                    records.push(ResourceRecord::new(name, url));
                }
            }
            Value::Object(_) => collect(value, key, records),
            Value::Array(items) => {
                for item in items {
                    match item.as_object().and_then(extract_resource_object) {
                        Some(record) => records.push(record),
                        None => collect(item, key, records),
                    }
                }
            }
            _ => {}
        }
    }
}

/// Extracts the single record described by a resource object, if it is one
///
/// An object qualifies when it has a `name` or `key` field and at least one of
/// the endpoint fields canonicalizes.
fn extract_resource_object(object: &Map<String, Value>) -> Option<ResourceRecord> {
    if !NAME_FIELDS.iter().any(|field| object.contains_key(*field)) {
        return None;
    }

    let url = URL_FIELDS
        .iter()
        .filter_map(|field| object.get(*field).and_then(Value::as_str))
        .find_map(extract_actual_url)?;

    let name = NAME_FIELDS
        .iter()
        .find_map(|field| object.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .unwrap_or_default();

    let name = if name.is_empty() {
        extract_domain_name(&url)
    } else {
        name.to_string()
    };

    Some(ResourceRecord::new(name, url))
}

/// Picks a name for an endpoint found in a plain field of a non-resource object
fn name_for_field(object: &Map<String, Value>, current_key: &str, parent_key: &str) -> String {
    if let Some(name) = NAME_FIELDS
        .iter()
        .find_map(|field| object.get(*field).and_then(Value::as_str))
    {
        return name.trim().to_string();
    }

    if !parent_key.is_empty() && parent_key != current_key {
        parent_key.to_string()
    } else if !current_key.is_empty() {
        current_key.to_string()
    } else {
        UNKNOWN_RESOURCE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_resource_object_extracted_once() {
        let doc = json!({"group": {"name": "G1", "api": "https://g.example.com/provide/vod"}});
        assert_eq!(
            walk_json(&doc, ""),
            vec![ResourceRecord::new("G1", "https://g.example.com/provide/vod")]
        );
    }

    #[test]
    fn test_url_field_priority() {
        let doc = json!({
            "name": "Multi",
            "link": "https://link.example.com/provide/vod",
            "url": "https://url.example.com/provide/vod",
            "api": "https://api.example.com/provide/vod/"
        });
        assert_eq!(
            walk_json(&doc, ""),
            vec![ResourceRecord::new("Multi", "https://api.example.com/provide/vod")]
        );
    }

    #[test]
    fn test_invalid_priority_field_falls_through() {
        let doc = json!({"key": " k1 ", "api": "https://api.example.com/list", "base_url": "https://b.example.com/provide/vod"});
        assert_eq!(
            walk_json(&doc, ""),
            vec![ResourceRecord::new("k1", "https://b.example.com/provide/vod")]
        );
    }

    #[test]
    fn test_empty_name_uses_host() {
        let doc = json!([{"name": "", "api": "https://api.films.com/provide/vod"}]);
        assert_eq!(
            walk_json(&doc, ""),
            vec![ResourceRecord::new("films", "https://api.films.com/provide/vod")]
        );
    }

    #[test]
    fn test_keyed_map_uses_parent_and_key_labels() {
        let doc = json!({
            "sites": {
                "alpha": "https://a.example.com/provide/vod",
                "sites": "https://s.example.com/provide/vod"
            },
            "beta": "https://b.example.com/provide/vod"
        });
        assert_eq!(
            walk_json(&doc, ""),
            vec![
                ResourceRecord::new("sites", "https://a.example.com/provide/vod"),
                ResourceRecord::new("sites", "https://s.example.com/provide/vod"),
                ResourceRecord::new("beta", "https://b.example.com/provide/vod"),
            ]
        );
    }

    #[test]
    fn test_arrays_of_resource_objects_and_nested_lists() {
        let doc = json!({
            "list": [
                {"name": "One", "url": "https://one.example.com/provide/vod"},
                {"meta": {"endpoint": "https://two.example.com/provide/vod"}},
                [{"key": "Three", "api": "https://three.example.com/provide/vod"}],
                "https://ignored.example.com/provide/vod"
            ]
        });
        assert_eq!(
            walk_json(&doc, ""),
            vec![
                ResourceRecord::new("One", "https://one.example.com/provide/vod"),
                ResourceRecord::new("meta", "https://two.example.com/provide/vod"),
                ResourceRecord::new("Three", "https://three.example.com/provide/vod"),
            ]
        );
    }

    #[test]
    fn test_scalars_produce_nothing() {
        assert!(walk_json(&json!("https://a.example.com/provide/vod"), "").is_empty());
        assert!(walk_json(&json!(42), "").is_empty());
        assert!(walk_json(&json!({"name": "No endpoint"}), "").is_empty());
    }
}
