// Value-level type conversion.
//
// The coercion engine consumes a `TypeConverter` and is agnostic to how
// conversions are actually performed; `NaturalConverter` provides the
// stock conversions (text/number parsing, numeric widening, element-wise
// vector conversion).

use crate::types::{PrimitiveType, TypeExpr};
use crate::values::Value;

/// Errors raised by a converter. Folded into
/// `RuntimeError::ConversionError` by the coercion engine, which records
/// the original source value alongside the cause.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    #[error("no conversion from {actual} to {target}")]
    Incompatible {
        target: TypeExpr,
        actual: &'static str,
    },

    #[error("cannot parse {text:?} as {target}: {cause}")]
    Unparseable {
        text: String,
        target: TypeExpr,
        cause: String,
    },
}

impl PartialEq for ConvertError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

/// External capability consumed by the coercion engine: produce a value of
/// the target shape from an arbitrary source value, or fail.
pub trait TypeConverter {
    fn convert(&self, target: &TypeExpr, value: &Value) -> Result<Value, ConvertError>;
}

/// The stock converter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalConverter;

impl TypeConverter for NaturalConverter {
    fn convert(&self, target: &TypeExpr, value: &Value) -> Result<Value, ConvertError> {
        if target.matches(value) {
            return Ok(value.clone());
        }
        match target {
            TypeExpr::Any => Ok(value.clone()),
            TypeExpr::Primitive(p) => convert_primitive(p, value),
            TypeExpr::Vector(elem) => match value {
                Value::Nil => Ok(Value::Vector(Vec::new())),
                Value::Vector(items) => {
                    let mut converted = Vec::with_capacity(items.len());
                    for item in items {
                        converted.push(self.convert(elem, item)?);
                    }
                    Ok(Value::Vector(converted))
                }
                // A scalar is never silently wrapped into a one-element
                // vector; that would hide caller mistakes.
                other => Err(ConvertError::Incompatible {
                    target: target.clone(),
                    actual: other.type_name(),
                }),
            },
        }
    }
}

fn convert_primitive(target: &PrimitiveType, value: &Value) -> Result<Value, ConvertError> {
    let target_expr = || TypeExpr::Primitive(target.clone());
    match (target, value) {
        (PrimitiveType::Int, Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|e| ConvertError::Unparseable {
                text: s.clone(),
                target: target_expr(),
                cause: e.to_string(),
            }),
        (PrimitiveType::Int, Value::Float(f)) => Ok(Value::Integer(*f as i64)),
        (PrimitiveType::Float, Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| ConvertError::Unparseable {
                text: s.clone(),
                target: target_expr(),
                cause: e.to_string(),
            }),
        (PrimitiveType::Float, Value::Integer(i)) => Ok(Value::Float(*i as f64)),
        (PrimitiveType::Bool, Value::String(s)) => match s.trim() {
            "true" | "1" => Ok(Value::Boolean(true)),
            "false" | "0" => Ok(Value::Boolean(false)),
            _ => Err(ConvertError::Unparseable {
                text: s.clone(),
                target: target_expr(),
                cause: "not a boolean literal".to_string(),
            }),
        },
        (PrimitiveType::String, Value::Integer(i)) => Ok(Value::String(i.to_string())),
        (PrimitiveType::String, Value::Float(f)) => Ok(Value::String(f.to_string())),
        (PrimitiveType::String, Value::Boolean(b)) => Ok(Value::String(b.to_string())),
        _ => Err(ConvertError::Incompatible {
            target: target_expr(),
            actual: value.type_name(),
        }),
    }
}
