//! Nested-node runtime
//!
//! This crate provides the definition store and registry, the composite
//! node factory, and the recursive executor that drives an embedded
//! sub-graph against the host's node-class registry.

mod composite;
mod config;
mod executor;
mod registry;
mod store;

pub use composite::{register_definitions, CompositeNode, NESTED_CATEGORY};
pub use config::{ExtensionConfig, CONFIG_FILE, DEFAULT_DEFINITIONS_DIR};
pub use executor::{execute_nested, MAX_NESTING_DEPTH};
pub use registry::DefinitionRegistry;
pub use store::DefinitionStore;

// The host owns the node-class registry; re-exported here because runtime
// callers wire composites into it.
pub use nestcore::NodeClassRegistry;
