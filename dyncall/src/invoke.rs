// Performing the call.

use crate::callable::Callable;
use crate::coerce::{bind_by_name, coerce};
use crate::convert::TypeConverter;
use crate::error::RuntimeResult;
use crate::registry::MethodTable;
use crate::values::Value;
use std::collections::HashMap;

/// Perform the call with an already-coerced argument list and return every
/// declared result in declaration order. Failures raised by the callable
/// itself propagate unmodified.
pub fn invoke(callable: &Callable, args: Vec<Value>) -> RuntimeResult<Vec<Value>> {
    (callable.func)(args)
}

/// Resolve → coerce → invoke in one step.
pub fn call_method(
    owner: &MethodTable,
    name: &str,
    args: Vec<Value>,
    converter: &dyn TypeConverter,
) -> RuntimeResult<Vec<Value>> {
    let callable = owner.resolve(name)?;
    let args = coerce(&callable, args, converter)?;
    invoke(&callable, args)
}

/// Resolve → bind by name → invoke in one step.
pub fn call_method_named(
    owner: &MethodTable,
    name: &str,
    parameter_names: &[&str],
    values: &HashMap<String, Value>,
    converter: &dyn TypeConverter,
) -> RuntimeResult<Vec<Value>> {
    let callable = owner.resolve(name)?;
    let args = bind_by_name(&callable, parameter_names, values, converter)?;
    invoke(&callable, args)
}
