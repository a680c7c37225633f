//! Parameter values bound to remote procedure calls.

use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

/// A single argument of a remote procedure call.
///
/// Query-string parameters always arrive as text; action bodies may carry
/// numbers. Arrays and objects are never bound directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// Bind an optional text value, `NULL` when absent.
    pub fn text(value: Option<&str>) -> Self {
        match value {
            Some(s) => Self::Text(s.to_string()),
            None => Self::Null,
        }
    }

    /// Bind an optional text value, falling back to `default` when absent
    /// or empty.
    pub fn text_or(value: Option<&str>, default: &str) -> Self {
        match value {
            Some(s) if !s.is_empty() => Self::Text(s.to_string()),
            _ => Self::Text(default.to_string()),
        }
    }

    /// Convert a scalar JSON value from a request body.
    pub fn from_json(field: &str, value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(CoreError::Validation(format!(
                        "{field} is out of range: {n}"
                    )))
                }
            }
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => Err(CoreError::Validation(format!(
                "{field} must be a string or number"
            ))),
        }
    }

    /// Convert an optional JSON value; a missing field binds `NULL`.
    pub fn from_optional_json(field: &str, value: Option<&Value>) -> Result<Self, CoreError> {
        match value {
            Some(v) => Self::from_json(field, v),
            None => Ok(Self::Null),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// A fully bound remote procedure invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureCall {
    /// Remote procedure name.
    pub procedure: &'static str,
    /// Arguments in declaration order, keyed by parameter name.
    pub args: Vec<(&'static str, ParamValue)>,
}

impl ProcedureCall {
    /// Look up a bound argument by parameter name.
    pub fn arg(&self, name: &str) -> Option<&ParamValue> {
        self.args
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value)
    }
}
