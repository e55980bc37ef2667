// Runtime value system for the invocation layer.
//
// Values supplied by callers are loosely typed (often strings or generic
// values pulled from configuration); their declared shape is only known
// relative to the callable being invoked, so they are modeled as a tagged
// variant rather than an untyped box.

use crate::error::{RuntimeError, RuntimeResult};
use crate::types::{PrimitiveType, TypeExpr};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Vector(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(v) => {
                let items: Vec<String> = v.iter().map(|item| format!("{}", item)).collect();
                write!(f, "[{}]", items.join(" "))
            }
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
        }
    }

    /// Runtime shape of this value. A vector's element shape is the common
    /// shape of its elements; empty or heterogeneous vectors report
    /// `[:vector :any]` so the caller cannot draw conclusions about their
    /// element type.
    pub fn shape(&self) -> TypeExpr {
        match self {
            Value::Nil => TypeExpr::Primitive(PrimitiveType::Nil),
            Value::Boolean(_) => TypeExpr::Primitive(PrimitiveType::Bool),
            Value::Integer(_) => TypeExpr::Primitive(PrimitiveType::Int),
            Value::Float(_) => TypeExpr::Primitive(PrimitiveType::Float),
            Value::String(_) => TypeExpr::Primitive(PrimitiveType::String),
            Value::Vector(items) => {
                let mut elem: Option<TypeExpr> = None;
                for item in items {
                    let shape = item.shape();
                    match &elem {
                        None => elem = Some(shape),
                        Some(prev) if *prev == shape => {}
                        Some(_) => return TypeExpr::vector(TypeExpr::Any),
                    }
                }
                TypeExpr::vector(elem.unwrap_or(TypeExpr::Any))
            }
        }
    }

    /// Convert a loosely-typed JSON value (typically read from
    /// configuration) into a runtime value. JSON objects are rejected:
    /// this core has no map value kind; objects are only meaningful as
    /// named-binding dictionaries, see [`bindings_from_json`].
    pub fn from_json(json: &serde_json::Value) -> RuntimeResult<Value> {
        match json {
            serde_json::Value::Null => Ok(Value::Nil),
            serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(RuntimeError::new(&format!("unsupported JSON number: {}", n)))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(Value::from_json(item)?);
                }
                Ok(Value::Vector(values))
            }
            serde_json::Value::Object(_) => Err(RuntimeError::new(
                "JSON objects are not argument values; use bindings_from_json",
            )),
        }
    }
}

/// Convert a JSON object into a name → value dictionary suitable for
/// named-parameter binding.
pub fn bindings_from_json(json: &serde_json::Value) -> RuntimeResult<HashMap<String, Value>> {
    match json {
        serde_json::Value::Object(entries) => {
            let mut bindings = HashMap::new();
            for (name, value) in entries {
                bindings.insert(name.clone(), Value::from_json(value)?);
            }
            Ok(bindings)
        }
        other => Err(RuntimeError::new(&format!(
            "expected a JSON object for named bindings, got {}",
            other
        ))),
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Vector(items)
    }
}
