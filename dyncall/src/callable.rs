// Callable values.

use crate::error::RuntimeResult;
use crate::signature::Signature;
use crate::values::Value;
use std::fmt;
use std::sync::Arc;

pub type CallFn = Arc<dyn Fn(Vec<Value>) -> RuntimeResult<Vec<Value>> + Send + Sync>;

/// An invocable unit with a fixed declared signature. Immutable once built;
/// the resolve → coerce → invoke pipeline borrows it for the duration of a
/// single invocation and caches nothing.
#[derive(Clone)]
pub struct Callable {
    pub name: String,
    pub signature: Signature,
    pub func: CallFn,
}

impl Callable {
    pub fn new(name: &str, signature: Signature, func: CallFn) -> Callable {
        Callable {
            name: name.to_string(),
            signature,
            func,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        // Compare by name and signature, not by function pointer
        self.name == other.name && self.signature == other.signature
    }
}
