//! Dynamic invocation layer.
//!
//! Given a callable whose parameter types are fixed at definition time,
//! accept loosely-typed runtime values (strings, JSON configuration
//! values), coerce each to the exact declared type, handle the variadic
//! trailing parameter, perform the call, and return the ordered results.
//!
//! The pipeline is resolve → signature → (named binding) → coercion →
//! invoke; each step is a single-shot pure function with no state carried
//! across invocations. The heavy logic lives in the submodules listed
//! below.

pub mod callable;
pub mod coerce;
pub mod convert;
pub mod error;
pub mod invoke;
pub mod registry;
pub mod signature;
pub mod types;
pub mod values;

pub use callable::{CallFn, Callable};
pub use coerce::{bind_by_name, coerce};
pub use convert::{ConvertError, NaturalConverter, TypeConverter};
pub use error::{RuntimeError, RuntimeResult};
pub use invoke::{call_method, call_method_named, invoke};
pub use registry::MethodTable;
pub use signature::{signature_of, Signature};
pub use types::{PrimitiveType, TypeExpr};
pub use values::{bindings_from_json, Value};
