//! Conversion between MORPH values and `serde_json` values.
//!
//! Inbound payloads are decoded into a [`Record`]; outbound records are
//! turned back into JSON for the sink. Integers that fit in `i64` stay
//! integers, every other number becomes a float.

use serde_json::{Map, Number};

use crate::{CoreError, CoreResult, Record, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(object_to_record(map)),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            // JSON has no NaN or infinity
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => record_to_json(map),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn object_to_record(map: Map<String, serde_json::Value>) -> Record {
    map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

/// Convert a record into a JSON object.
pub fn record_to_json(record: &Record) -> serde_json::Value {
    let map: Map<String, serde_json::Value> = record
        .iter()
        .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
        .collect();
    serde_json::Value::Object(map)
}

/// Materialize a record from an already-decoded JSON value.
///
/// The top level must be an object.
pub fn record_from_json(json: serde_json::Value) -> CoreResult<Record> {
    match json {
        serde_json::Value::Object(map) => Ok(object_to_record(map)),
        other => Err(CoreError::not_an_object(json_type_name(&other))),
    }
}

/// Decode payload bytes into a record.
pub fn record_from_slice(payload: &[u8]) -> CoreResult<Record> {
    let json: serde_json::Value = serde_json::from_slice(payload)?;
    record_from_json(json)
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
