//! Response envelope normalization
//!
//! The single place where wire payloads are unwrapped. Three shapes reach the
//! client:
//!
//! 1. `{ "success": .., "data": .., "message": .. }` at the top level
//! 2. `{ "data": { "success": .., "data": .. } }`, the envelope nested one
//!    level down
//! 3. the bare payload with no envelope at all
//!
//! A top-level envelope whose `data` is itself an envelope is collapsed too.

use opsdesk_domain::Envelope;
use serde_json::{Map, Value};

const SUCCESS: &str = "success";
const DATA: &str = "data";
const MESSAGE: &str = "message";

/// Normalize any response body into an [`Envelope`].
pub fn normalize_envelope(payload: Value) -> Envelope {
    match payload {
        Value::Object(map) if map.contains_key(SUCCESS) => {
            let outer = envelope_from_map(map);
            match outer.data {
                Value::Object(inner) if is_full_envelope(&inner) => {
                    let inner = envelope_from_map(inner);
                    Envelope {
                        success: outer.success && inner.success,
                        data: inner.data,
                        message: inner.message.or(outer.message),
                    }
                }
                data => Envelope { data, ..outer },
            }
        }
        Value::Object(mut map) if nested_envelope(&map) => match map.remove(DATA) {
            Some(Value::Object(inner)) => envelope_from_map(inner),
            _ => Envelope::wrap(Value::Object(map)),
        },
        other => Envelope::wrap(other),
    }
}

/// Server-provided `message` of an arbitrary JSON error body, if any.
pub fn extract_message(body: &Value) -> Option<String> {
    let direct = body.get(MESSAGE).and_then(Value::as_str);
    let nested = || body.get(DATA).and_then(|d| d.get(MESSAGE)).and_then(Value::as_str);
    let error = || body.get("error").and_then(Value::as_str);
    direct.or_else(nested).or_else(error).map(str::to_string).filter(|m| !m.trim().is_empty())
}

fn nested_envelope(map: &Map<String, Value>) -> bool {
    matches!(map.get(DATA), Some(Value::Object(inner)) if inner.contains_key(SUCCESS))
}

fn is_full_envelope(map: &Map<String, Value>) -> bool {
    map.contains_key(SUCCESS) && map.contains_key(DATA)
}

fn envelope_from_map(mut map: Map<String, Value>) -> Envelope {
    let success = map.get(SUCCESS).is_some_and(truthy);
    let message = map.get(MESSAGE).and_then(Value::as_str).map(str::to_string);
    let data = map.remove(DATA).unwrap_or(Value::Null);
    Envelope { success, data, message }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    }
}
