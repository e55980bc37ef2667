// Parameter coercion: reconcile loosely-typed argument values with a
// callable's declared parameter types.

use crate::callable::Callable;
use crate::convert::TypeConverter;
use crate::error::{RuntimeError, RuntimeResult};
use crate::types::TypeExpr;
use crate::values::Value;
use std::collections::HashMap;

/// Produce an argument list in which every value exactly matches the
/// corresponding declared parameter type, expanding the variadic tail as
/// needed.
///
/// The supplied count must equal the declared parameter count, variadic or
/// not: a variadic callable's trailing rest values arrive as one sequence.
/// Per position, in order:
/// a supplied sequence of a differently-shaped declared sequence type is
/// rejected outright (never truncated into the declared shape); a nil value
/// at a declared sequence position becomes a fresh empty sequence; anything
/// not already of the declared type goes through the converter; and the
/// coerced trailing sequence of a variadic callable is flattened into
/// individual arguments.
///
/// The returned list's length differs from the input's only through
/// variadic flattening. No partial result escapes: the first failure aborts
/// the whole coercion.
pub fn coerce(
    callable: &Callable,
    args: Vec<Value>,
    converter: &dyn TypeConverter,
) -> RuntimeResult<Vec<Value>> {
    let signature = callable.signature();
    if args.len() != signature.arity() {
        return Err(RuntimeError::ArityMismatch {
            function: callable.name.clone(),
            expected: signature.arity().to_string(),
            actual: args.len(),
        });
    }

    let mut out = Vec::with_capacity(args.len());
    for (i, supplied) in args.into_iter().enumerate() {
        let declared = &signature.params[i];

        // Sequence-vs-sequence shape check. Only fires when both sides are
        // sequences with known element shapes; scalars fall through to the
        // converter, and empty or mixed vectors stay undecided here.
        if let (TypeExpr::Vector(declared_elem), Value::Vector(_)) = (declared, &supplied) {
            if let TypeExpr::Vector(supplied_elem) = supplied.shape() {
                if **declared_elem != TypeExpr::Any
                    && *supplied_elem != TypeExpr::Any
                    && *supplied_elem != **declared_elem
                {
                    return Err(RuntimeError::TypeMismatch {
                        expected: declared.clone(),
                        actual: TypeExpr::Vector(supplied_elem),
                        position: i,
                    });
                }
            }
        }

        // A missing value at a sequence position means "no elements",
        // never a null sequence.
        let supplied = if supplied == Value::Nil && declared.is_vector() {
            Value::Vector(Vec::new())
        } else {
            supplied
        };

        let coerced = if declared.matches(&supplied) {
            supplied
        } else {
            match converter.convert(declared, &supplied) {
                Ok(value) => value,
                Err(e) => {
                    return Err(RuntimeError::ConversionError {
                        value: supplied,
                        target: declared.clone(),
                        cause: e.to_string(),
                    })
                }
            }
        };

        if signature.flattens_at(i) {
            if let Value::Vector(items) = coerced {
                out.extend(items);
                continue;
            }
        }
        out.push(coerced);
    }
    Ok(out)
}

/// Translate named values into the positional argument list and delegate to
/// [`coerce`]. `names` must already match the callable's declared parameter
/// order and count; a name absent from the dictionary yields nil, which
/// coercion then treats like any other missing value.
pub fn bind_by_name(
    callable: &Callable,
    names: &[&str],
    values: &HashMap<String, Value>,
    converter: &dyn TypeConverter,
) -> RuntimeResult<Vec<Value>> {
    let mut args = Vec::with_capacity(names.len());
    for name in names {
        args.push(values.get(*name).cloned().unwrap_or(Value::Nil));
    }
    coerce(callable, args, converter)
}
