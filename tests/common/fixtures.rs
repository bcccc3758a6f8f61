//! Static request payloads used across harnesses.

use serde_json::{json, Value};

/// The payload the browse client sends with its default selection.
pub fn default_payload() -> Value {
    json!({
        "filter": {
            "color": ["white", "beige", "green", "purple", "blue"],
            "size": ["S", "M", "L"],
            "sort": "none",
            "price": [0, 100],
        }
    })
}

/// A payload with one field replaced. `filter` must already be valid apart
/// from `key`.
pub fn payload_with(key: &str, value: Value) -> Value {
    let mut payload = default_payload();
    payload["filter"][key] = value;
    payload
}

/// A payload with one field removed.
pub fn payload_without(key: &str) -> Value {
    let mut payload = default_payload();
    payload["filter"]
        .as_object_mut()
        .expect("fixture filter is an object")
        .remove(key);
    payload
}
