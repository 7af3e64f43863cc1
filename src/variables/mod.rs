//! Variable storage for a SetScript interpreter session
//!
//! A mutable mapping from variable name (sigil already stripped) to integer
//! value. Owned by one interpreter session and mutated only by assignment;
//! reading a name that was never assigned is an error, not a default.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Variable storage system
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    variables: HashMap<String, i32>,
}

impl VariableStore {
    /// Create an empty variable store
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Insert a variable or overwrite its previous value
    pub fn set(&mut self, name: &str, value: i32) {
        self.variables.insert(name.to_string(), value);
    }

    /// Look up a variable's value
    pub fn get(&self, name: &str) -> Result<i32> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| Error::UndefinedVariable(name.to_string()))
    }

    /// Check if a variable exists
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Clear all variables
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut store = VariableStore::new();
        store.set("x", 42);
        assert_eq!(store.get("x").unwrap(), 42);
        assert!(store.has_variable("x"));
    }

    #[test]
    fn test_get_undefined() {
        let store = VariableStore::new();
        let result = store.get("missing");
        assert!(matches!(result, Err(Error::UndefinedVariable(name)) if name == "missing"));
    }

    #[test]
    fn test_overwrite() {
        let mut store = VariableStore::new();
        store.set("x", 10);
        store.set("x", 7);
        assert_eq!(store.get("x").unwrap(), 7);
    }

    #[test]
    fn test_clear() {
        let mut store = VariableStore::new();
        store.set("x", 1);
        store.clear();
        assert!(!store.has_variable("x"));
    }

    // Property-Based Tests

    /// Storage round-trip: any value set under any name reads back unchanged.
    #[test]
    fn prop_storage_roundtrip() {
        fn property(name: String, value: i32) -> bool {
            let mut store = VariableStore::new();
            store.set(&name, value);
            store.get(&name).unwrap() == value
        }

        let mut qc = quickcheck::QuickCheck::new().tests(100);
        qc.quickcheck(property as fn(String, i32) -> bool);
    }

    /// Overwrite semantics: the last value set wins.
    #[test]
    fn prop_last_write_wins() {
        fn property(first: i32, second: i32) -> bool {
            let mut store = VariableStore::new();
            store.set("v", first);
            store.set("v", second);
            store.get("v").unwrap() == second
        }

        let mut qc = quickcheck::QuickCheck::new().tests(100);
        qc.quickcheck(property as fn(i32, i32) -> bool);
    }
}
