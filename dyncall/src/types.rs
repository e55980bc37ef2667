// Type descriptors for runtime values.
//
// A descriptor denotes a value's shape, not its storage: two descriptors are
// equal iff they denote the same shape. Vectors are parameterized by an
// element shape, so `[:vector :int]` and `[:vector :string]` are distinct.

use crate::values::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Float,
    String,
    Bool,
    Nil,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Primitive(PrimitiveType),
    Vector(Box<TypeExpr>),
    Any,
}

impl TypeExpr {
    pub const INT: TypeExpr = TypeExpr::Primitive(PrimitiveType::Int);
    pub const FLOAT: TypeExpr = TypeExpr::Primitive(PrimitiveType::Float);
    pub const STRING: TypeExpr = TypeExpr::Primitive(PrimitiveType::String);
    pub const BOOL: TypeExpr = TypeExpr::Primitive(PrimitiveType::Bool);
    pub const NIL: TypeExpr = TypeExpr::Primitive(PrimitiveType::Nil);

    pub fn vector(elem: TypeExpr) -> TypeExpr {
        TypeExpr::Vector(Box::new(elem))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, TypeExpr::Vector(_))
    }

    /// True when `value` already has exactly this shape, so no conversion
    /// is needed. A vector value matches a vector type when every element
    /// matches the element type (an empty vector matches any vector type).
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeExpr::Any, _) => true,
            (TypeExpr::Primitive(PrimitiveType::Int), Value::Integer(_)) => true,
            (TypeExpr::Primitive(PrimitiveType::Float), Value::Float(_)) => true,
            (TypeExpr::Primitive(PrimitiveType::String), Value::String(_)) => true,
            (TypeExpr::Primitive(PrimitiveType::Bool), Value::Boolean(_)) => true,
            (TypeExpr::Primitive(PrimitiveType::Nil), Value::Nil) => true,
            (TypeExpr::Vector(elem), Value::Vector(items)) => {
                items.iter().all(|item| elem.matches(item))
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(PrimitiveType::Int) => write!(f, ":int"),
            TypeExpr::Primitive(PrimitiveType::Float) => write!(f, ":float"),
            TypeExpr::Primitive(PrimitiveType::String) => write!(f, ":string"),
            TypeExpr::Primitive(PrimitiveType::Bool) => write!(f, ":bool"),
            TypeExpr::Primitive(PrimitiveType::Nil) => write!(f, ":nil"),
            TypeExpr::Vector(elem) => write!(f, "[:vector {}]", elem),
            TypeExpr::Any => write!(f, ":any"),
        }
    }
}
