use std::collections::HashMap;

use serde_json::Value;

use crate::error::InvocationFault;

/// A reference solution: takes the disambiguated positional arguments,
/// returns the result value or a fault. Faults never cross this boundary
/// as panics.
pub type SolutionFn = fn(&[Value]) -> Result<Value, InvocationFault>;

/// One registered solution. `function` is the exported entry-point name in
/// snake_case; resolution compares it against the descriptor's translated
/// `functionName`, so a solution registered under the right id but the
/// wrong name is still a lookup failure.
#[derive(Debug, Clone)]
pub struct SolutionEntry {
    pub id: &'static str,
    pub function: &'static str,
    pub run: SolutionFn,
}

/// Static id → solution mapping, populated once at process start. One
/// entry per problem id.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<&'static str, SolutionEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in reference solution.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::solutions::register(&mut registry);
        registry
    }

    pub fn insert(&mut self, entry: SolutionEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn get(&self, id: &str) -> Option<&SolutionEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
