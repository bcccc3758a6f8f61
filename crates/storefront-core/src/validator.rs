//! Request validation: the trust boundary between client-declared filters
//! and predicate compilation.
//!
//! The payload is walked as raw JSON so the error can name the exact offending
//! path (`filter.price`, `filter.color[2]`). A payload is accepted whole or not
//! at all. Unknown keys are ignored.

use crate::types::{PriceRange, ProductFilter};
use crate::vocab::{Color, Size, SortMode, UnknownTerm};
use serde_json::{Map, Value};

/// A rejected filter payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid filter at `{path}`: {reason}")]
pub struct ValidationError {
    pub path: String,
    pub reason: String,
}

impl ValidationError {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), reason: reason.into() }
    }

    /// The request body was not JSON at all.
    pub fn malformed(err: &serde_json::Error) -> Self {
        Self::new("$", format!("malformed JSON body: {err}"))
    }
}

/// Validate a full request body `{ "filter": { … } }`.
pub fn validate_request(body: &Value) -> Result<ProductFilter, ValidationError> {
    let body = expect_object(body, "$")?;
    let filter = body
        .get("filter")
        .ok_or_else(|| ValidationError::new("filter", "required"))?;
    validate_filter(filter)
}

/// Validate the inner filter object.
pub fn validate_filter(value: &Value) -> Result<ProductFilter, ValidationError> {
    let obj = expect_object(value, "filter")?;

    let color = terms(obj, "color", |s| s.parse::<Color>())?;
    let size = terms(obj, "size", |s| s.parse::<Size>())?;

    let sort = match required(obj, "sort")? {
        Value::String(s) => s
            .parse::<SortMode>()
            .map_err(|e| ValidationError::new("filter.sort", e.to_string()))?,
        other => return Err(type_error("filter.sort", "string", other)),
    };

    let price = match required(obj, "price")? {
        Value::Array(items) if items.len() == 2 => {
            let low = number(&items[0], "filter.price[0]")?;
            let high = number(&items[1], "filter.price[1]")?;
            PriceRange::new(low, high)
        }
        Value::Array(items) => {
            return Err(ValidationError::new(
                "filter.price",
                format!("expected exactly 2 numbers, got {}", items.len()),
            ))
        }
        other => return Err(type_error("filter.price", "array", other)),
    };

    Ok(ProductFilter { color, size, sort, price })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| type_error(path, "object", value))
}

fn required<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ValidationError> {
    obj.get(key)
        .ok_or_else(|| ValidationError::new(format!("filter.{key}"), "required"))
}

fn terms<T>(
    obj: &Map<String, Value>,
    key: &str,
    parse: fn(&str) -> Result<T, UnknownTerm>,
) -> Result<Vec<T>, ValidationError> {
    let path = format!("filter.{key}");
    let items = match required(obj, key)? {
        Value::Array(items) => items,
        other => return Err(type_error(&path, "array", other)),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_path = format!("{path}[{i}]");
            match item {
                Value::String(s) => {
                    parse(s).map_err(|e| ValidationError::new(&item_path, e.to_string()))
                }
                other => Err(type_error(&item_path, "string", other)),
            }
        })
        .collect()
}

fn number(value: &Value, path: &str) -> Result<f64, ValidationError> {
    match value.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(type_error(path, "number", value)),
    }
}

fn type_error(path: &str, expected: &str, got: &Value) -> ValidationError {
    let got = match got {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    ValidationError::new(path, format!("expected {expected}, got {got}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
