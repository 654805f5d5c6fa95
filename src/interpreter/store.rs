use std::collections::HashMap;

use log::trace;
use num_bigint::BigInt;
use num_traits::Zero;

/// Maps variable names to their values for the lifetime of a session.
///
/// Entries are created by assignment or by the first read of an unknown
/// name (which stores zero), overwritten by later assignments, and never
/// removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableStore {
    values: HashMap<String, BigInt>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable without creating it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.values.get(name)
    }

    /// Returns `true` if the variable has been read or assigned before.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Reads a variable, creating it with value zero if it does not exist.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use rpncalc::interpreter::store::VariableStore;
    ///
    /// let mut store = VariableStore::new();
    /// assert_eq!(store.get_or_create("y"), BigInt::from(0));
    /// assert!(store.contains("y"));
    /// ```
    pub fn get_or_create(&mut self, name: &str) -> BigInt {
        if let Some(value) = self.values.get(name) {
            return value.clone();
        }

        trace!("creating variable '{name}' with implicit value 0");
        self.values.insert(name.to_string(), BigInt::zero());
        BigInt::zero()
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub fn assign(&mut self, name: &str, value: BigInt) {
        trace!("assigning {value} to '{name}'");
        self.values.insert(name.to_string(), value);
    }

    /// Number of variables in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        let mut entries = self.values
                              .iter()
                              .map(|(name, value)| (name.as_str(), value))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(name, _)| *name);
        entries.into_iter()
    }
}
