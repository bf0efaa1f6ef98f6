use crate::ExtensionConfig;
use nestcore::{NodeDefinition, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable mapping from definition name to JSON document, one file per
/// definition inside the configured directory.
#[derive(Debug, Clone)]
pub struct DefinitionStore {
    dir: PathBuf,
}

impl DefinitionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Build a store from the extension config and its install directory.
    pub fn from_config(config: &ExtensionConfig, ext_path: &Path) -> Self {
        Self::new(config.definitions_dir(ext_path))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Enumerate every `*.json` file in the directory and yield the
    /// definitions that parse and validate.
    ///
    /// One malformed file never blocks the rest: it is skipped with a warn
    /// diagnostic. Filesystem failures are surfaced, not masked.
    pub fn list(&self) -> Result<Vec<NodeDefinition>> {
        fs::create_dir_all(&self.dir)?;

        let mut defs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension() != Some("json".as_ref()) {
                continue;
            }

            let text = fs::read_to_string(&path)?;
            let doc: Value = match serde_json::from_str(&text) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::warn!("Error loading {}: {}", path.display(), e);
                    continue;
                }
            };
            match NodeDefinition::from_document(doc) {
                Ok(def) => defs.push(def),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
            }
        }
        Ok(defs)
    }

    /// Persist one definition as `<name>.json`, overwriting any existing
    /// file of the same name. Names that are not a plain file-name
    /// component are rejected so the file always lands in the directory.
    pub fn save(&self, definition: &NodeDefinition) -> Result<()> {
        NodeDefinition::validate_name(&definition.name)?;

        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}.json", definition.name));
        let json = serde_json::to_string_pretty(definition)?;
        fs::write(&path, json)?;

        tracing::debug!("Saved definition `{}` to {}", definition.name, path.display());
        Ok(())
    }
}
