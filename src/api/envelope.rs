//! Tolerant unwrapping of backend response bodies.
//!
//! Endpoints answer either the bare document / list or an envelope such as
//! `{ "success": true, "data": {...} }`. Singletons that were never saved
//! answer `{}` or `null`.

use serde_json::Value;

const LIST_KEYS: [&str; 4] = ["data", "items", "admins", "results"];
const DOC_KEYS: [&str; 4] = ["data", "item", "doc", "admin"];

/// Pull the document object out of a body, `None` for `null` / non-objects.
pub fn extract_document(body: Value) -> Option<Value> {
    match body {
        Value::Object(mut map) => {
            if map.contains_key("_id") {
                return Some(Value::Object(map));
            }
            for key in DOC_KEYS {
                if let Some(inner @ Value::Object(_)) = map.remove(key) {
                    return Some(inner);
                }
            }
            Some(Value::Object(map))
        }
        _ => None,
    }
}

/// Pull the item list out of a body; an absent list is empty.
pub fn extract_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in LIST_KEYS {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            map.into_iter()
                .find_map(|(_, v)| match v {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// `message` (or `error`) string of an error body.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error", "msg"].iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// `url` of an upload response.
pub fn extract_upload_url(body: &Value) -> Option<String> {
    body.get("url")
        .or_else(|| body.get("data").and_then(|d| d.get("url")))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn document_is_found_bare_or_wrapped() {
        assert_eq!(extract_document(json!({"_id": "1", "a": 2})), Some(json!({"_id": "1", "a": 2})));
        assert_eq!(
            extract_document(json!({"success": true, "data": {"_id": "9"}})),
            Some(json!({"_id": "9"}))
        );
        assert_eq!(extract_document(json!({})), Some(json!({})));
        assert_eq!(extract_document(Value::Null), None);
    }

    #[test]
    fn list_is_found_bare_or_wrapped() {
        assert_eq!(extract_list(json!([1, 2])).len(), 2);
        assert_eq!(extract_list(json!({"success": true, "admins": [{}]})).len(), 1);
        assert_eq!(extract_list(json!({"promotions": [{}, {}, {}]})).len(), 3);
        assert!(extract_list(json!({"success": true})).is_empty());
        assert!(extract_list(Value::Null).is_empty());
    }

    #[test]
    fn message_and_url_extraction() {
        assert_eq!(extract_message(r#"{"message":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
        assert_eq!(extract_message(r#"{"error":" Nope "}"#).as_deref(), Some("Nope"));
        assert_eq!(extract_message("<html>"), None);
        assert_eq!(extract_upload_url(&json!({"url": "/uploads/a.png"})).as_deref(), Some("/uploads/a.png"));
        assert_eq!(extract_upload_url(&json!({"url": ""})), None);
    }
}
