// Callable signatures.

use crate::callable::Callable;
use crate::types::TypeExpr;

/// Declared shape of a callable: parameter types in declaration order,
/// return types in declaration order, and whether the trailing parameter is
/// variadic. The parameter ordering is the contract every downstream
/// component relies on for positional matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub params: Vec<TypeExpr>,
    pub returns: Vec<TypeExpr>,
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Vec<TypeExpr>, returns: Vec<TypeExpr>) -> Signature {
        Signature {
            params,
            returns,
            variadic: false,
        }
    }

    /// Build a variadic signature. The rest parameter is declared here as a
    /// vector of `rest_elem`, keeping the variadic flag and the trailing
    /// vector shape coupled in one place.
    pub fn variadic(mut params: Vec<TypeExpr>, rest_elem: TypeExpr, returns: Vec<TypeExpr>) -> Signature {
        params.push(TypeExpr::vector(rest_elem));
        Signature {
            params,
            returns,
            variadic: true,
        }
    }

    /// Declared parameter count. For a variadic signature this counts the
    /// rest parameter as one: callers supply the rest values as a single
    /// sequence, which coercion may flatten later.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// True when the coerced value at `index` must be flattened into
    /// individual trailing arguments: only at the final index of a variadic
    /// signature whose trailing declared type is a vector.
    pub fn flattens_at(&self, index: usize) -> bool {
        self.variadic && index + 1 == self.params.len() && self.params[index].is_vector()
    }
}

/// Ordered parameter types plus the variadic flag, in declaration order.
/// Pure and deterministic for a given callable.
pub fn signature_of(callable: &Callable) -> (&[TypeExpr], bool) {
    let signature = callable.signature();
    (&signature.params, signature.variadic)
}
