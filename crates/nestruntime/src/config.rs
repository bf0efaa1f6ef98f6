use nestcore::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file expected next to the extension install directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Subdirectory used when no definitions path is configured
pub const DEFAULT_DEFINITIONS_DIR: &str = "nested_nodes";

/// Extension configuration
///
/// One recognized option: where definition files live. Absolute paths are
/// used as-is; relative paths resolve against the extension install
/// directory, never the process working directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtensionConfig {
    pub nested_nodes_path: Option<PathBuf>,
}

impl ExtensionConfig {
    /// Load `config.yaml` from the extension install directory.
    pub fn load(ext_path: &Path) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(ext_path.join(CONFIG_FILE))?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Load the config, falling back to defaults on any failure.
    ///
    /// A missing or malformed file still leaves the extension usable with
    /// the default definitions directory.
    pub fn load_or_default(ext_path: &Path) -> Self {
        match Self::load(ext_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Error loading extension config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Resolve the definitions directory against the install directory.
    pub fn definitions_dir(&self, ext_path: &Path) -> PathBuf {
        match &self.nested_nodes_path {
            None => {
                tracing::warn!(
                    "Missing entry `nested_nodes_path` in {}, using default path `{}`",
                    CONFIG_FILE,
                    DEFAULT_DEFINITIONS_DIR
                );
                ext_path.join(DEFAULT_DEFINITIONS_DIR)
            }
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => ext_path.join(path),
        }
    }
}
