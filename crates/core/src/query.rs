//! Filter-object to query-string conversion
//!
//! List endpoints take a flat object of optional scalars. Any key whose value
//! is absent (`None`/`null`) or an empty string is dropped; booleans and
//! numbers are written in their plain textual form.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("filters could not be serialized: {0}")]
    Serialize(String),

    #[error("filters must serialize to an object, got {0}")]
    NotAnObject(&'static str),
}

/// Serialize `filters` and encode it as `key=value&...` (no leading `?`).
///
/// Keys follow the order of the serialized object. Array values repeat the
/// key once per non-empty element; nested objects are sent as JSON text.
pub fn build_query<F: Serialize + ?Sized>(filters: &F) -> Result<String, QueryError> {
    let value =
        serde_json::to_value(filters).map_err(|err| QueryError::Serialize(err.to_string()))?;
    query_from_value(&value)
}

/// Encode an already-serialized filter object.
pub fn query_from_value(value: &Value) -> Result<String, QueryError> {
    let map = match value {
        Value::Null => return Ok(String::new()),
        Value::Object(map) => map,
        Value::Bool(_) => return Err(QueryError::NotAnObject("bool")),
        Value::Number(_) => return Err(QueryError::NotAnObject("number")),
        Value::String(_) => return Err(QueryError::NotAnObject("string")),
        Value::Array(_) => return Err(QueryError::NotAnObject("array")),
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in map {
        match value {
            Value::Array(values) => {
                for element in values {
                    if let Some(text) = scalar_text(element) {
                        serializer.append_pair(key, &text);
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    serializer.append_pair(key, &text);
                }
            }
        }
    }
    Ok(serializer.finish())
}

/// Append an encoded query to `path`, adding `?` only when there is one.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}
