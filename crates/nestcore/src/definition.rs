use crate::DefinitionError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Component, Path};

/// Persisted blueprint for one composite node
///
/// The `inputs` and `output` declarations are in the host's native shape and
/// are carried through opaquely; this core never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDefinition {
    /// Unique identifier, primary key of the registry and the store
    pub name: String,

    /// Human-facing label shown by the host UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// External input port declaration, host-native shape
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub inputs: Value,

    /// External output port declaration, host-native shape
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub output: Value,

    /// Ordered sub-graph executed when the composite node runs
    #[serde(default)]
    pub nested_workflow: Vec<EmbeddedNodeCall>,

    /// Fields written by the authoring UI that this core does not interpret;
    /// kept so a save/load round trip is lossless
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeDefinition {
    /// Validate a raw JSON document and convert it into a definition.
    ///
    /// A document without a usable `name` is rejected before any shape
    /// checking so callers can distinguish the validation failure.
    pub fn from_document(doc: Value) -> Result<Self, DefinitionError> {
        match doc.get("name") {
            None => return Err(DefinitionError::MissingName),
            Some(Value::String(s)) => Self::validate_name(s)?,
            _ => {}
        }
        serde_json::from_value(doc).map_err(DefinitionError::InvalidShape)
    }

    /// Check that a name can serve as the store's file-naming key.
    ///
    /// The name becomes `<name>.json` inside the definitions directory, so
    /// anything other than a single plain path component would write
    /// outside the store and never be seen by a later load.
    pub fn validate_name(name: &str) -> Result<(), DefinitionError> {
        if name.is_empty() {
            return Err(DefinitionError::EmptyName);
        }
        let mut components = Path::new(name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain || name.contains('\\') {
            return Err(DefinitionError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}

/// One step of a nested workflow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedNodeCall {
    /// Name of a node class that must exist in the host's node-class
    /// registry at execution time
    #[serde(rename = "type")]
    pub node_type: String,

    /// The embedded node's own parameters and wiring, opaque to this core
    /// and passed through unmodified
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl EmbeddedNodeCall {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            params: Map::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}
