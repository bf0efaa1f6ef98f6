use crate::DefinitionStore;
use nestcore::{DefinitionError, NodeDefinition, Result};
use std::collections::HashMap;

/// In-memory view of all stored definitions, keyed by name.
///
/// Every load re-reads the store from scratch; nothing is cached across
/// calls, so callers never see stale data after an external save.
#[derive(Debug, Clone)]
pub struct DefinitionRegistry {
    store: DefinitionStore,
}

impl DefinitionRegistry {
    pub fn new(store: DefinitionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DefinitionStore {
        &self.store
    }

    /// Load every valid definition from the store into a fresh mapping.
    ///
    /// The store keys files by name, so duplicates can only appear when
    /// files were placed by hand. That is an authoring error and fails the
    /// load rather than letting enumeration order pick a winner.
    pub fn load_all(&self) -> Result<HashMap<String, NodeDefinition>> {
        let mut defs = HashMap::new();
        for def in self.store.list()? {
            if let Some(prev) = defs.insert(def.name.clone(), def) {
                return Err(DefinitionError::DuplicateName(prev.name).into());
            }
        }
        Ok(defs)
    }
}
