//! Core abstractions for the nested-node extension
//!
//! This crate provides the definition data model, the host node contract,
//! and the error taxonomy that the runtime and server crates depend on.

mod definition;
mod error;
mod node;

pub use definition::{EmbeddedNodeCall, NodeDefinition};
pub use error::{ConfigError, DefinitionError, NestError, NodeError};
pub use node::{NodeClass, NodeClassRegistry, NodeContext, NodeOutput};

/// Result type for extension operations
pub type Result<T> = std::result::Result<T, NestError>;
