//! Dynamic parameter values exchanged between the interop layer and the
//! render pipeline.
//!
//! Client-supplied JSON is coerced into [`ParameterValue`] before it reaches
//! a component, so downstream code never touches raw payload bytes.

use std::collections::HashMap;

/// A dynamically typed parameter value.
///
/// Integer and floating-point numbers are kept distinct: a JSON number that
/// fits `i64` becomes [`ParameterValue::Integer`], everything else becomes
/// [`ParameterValue::Float`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    List(Vec<ParameterValue>),
    Map(HashMap<String, ParameterValue>),
    Null,
}

impl ParameterValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Float(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::String(value.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        ParameterValue::String(value)
    }
}

impl From<serde_json::Value> for ParameterValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ParameterValue::Null,
            serde_json::Value::Bool(b) => ParameterValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ParameterValue::Integer(i),
                None => ParameterValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => ParameterValue::String(s),
            serde_json::Value::Array(items) => {
                ParameterValue::List(items.into_iter().map(ParameterValue::from).collect())
            }
            serde_json::Value::Object(fields) => ParameterValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, ParameterValue::from(v)))
                    .collect::<HashMap<String, ParameterValue>>(),
            ),
        }
    }
}

impl From<ParameterValue> for serde_json::Value {
    fn from(value: ParameterValue) -> Self {
        match value {
            ParameterValue::Integer(i) => serde_json::Value::from(i),
            ParameterValue::Float(f) => serde_json::Value::from(f),
            ParameterValue::String(s) => serde_json::Value::String(s),
            ParameterValue::Boolean(b) => serde_json::Value::Bool(b),
            ParameterValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            ParameterValue::Map(fields) => serde_json::Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            ParameterValue::Null => serde_json::Value::Null,
        }
    }
}
