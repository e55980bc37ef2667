// Per-owner capability sets.
//
// The target language has no runtime reflection over arbitrary objects, so
// an owner exposes its invocable members through an explicit method table
// built at startup.

use crate::callable::Callable;
use crate::error::{RuntimeError, RuntimeResult};
use std::collections::HashMap;
use std::sync::Arc;

/// The set of callables an owner instance exposes, keyed by declared name.
#[derive(Debug, Clone, Default)]
pub struct MethodTable {
    owner_type: String,
    methods: HashMap<String, Arc<Callable>>,
}

impl MethodTable {
    pub fn new(owner_type: &str) -> MethodTable {
        MethodTable {
            owner_type: owner_type.to_string(),
            methods: HashMap::new(),
        }
    }

    pub fn owner_type(&self) -> &str {
        &self.owner_type
    }

    /// Register a callable under its declared name, replacing any previous
    /// registration of the same name.
    pub fn define(&mut self, callable: Callable) {
        self.methods.insert(callable.name.clone(), Arc::new(callable));
    }

    /// Exact, case-sensitive lookup. No partial or fuzzy matching.
    pub fn resolve(&self, name: &str) -> RuntimeResult<Arc<Callable>> {
        self.methods
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound {
                owner: self.owner_type.clone(),
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
