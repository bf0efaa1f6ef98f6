use crate::NodeError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Contract every node class visible to the host satisfies
///
/// Composite nodes synthesized from definitions implement this alongside
/// whatever ordinary node classes the host itself registers.
#[async_trait]
pub trait NodeClass: Send + Sync {
    /// Unique type identifier the host registry is keyed by
    fn node_type(&self) -> &str;

    /// Label the host UI shows for this node
    fn display_name(&self) -> &str {
        self.node_type()
    }

    /// Input port declaration in the host's native shape
    fn input_types(&self) -> Value;

    /// Output port declaration in the host's native shape
    fn return_types(&self) -> Value;

    /// Category label the host UI groups this node under
    fn category(&self) -> &str {
        "general"
    }

    /// Execute the node with the given context
    async fn execute(&self, ctx: NodeContext) -> Result<NodeOutput, NodeError>;
}

/// Execution context passed to each node
#[derive(Clone)]
pub struct NodeContext {
    /// Parameters recorded in the embedded call, passed through unmodified
    pub params: Map<String, Value>,

    /// Runtime inputs visible to this step: the caller's keyword inputs
    /// plus the outputs of earlier steps in the same workflow
    pub inputs: HashMap<String, Value>,

    /// Host node-class registry used for recursive dispatch
    pub classes: Arc<NodeClassRegistry>,

    /// Current nesting depth, incremented per embedded dispatch
    pub depth: usize,
}

impl NodeContext {
    pub fn new(classes: Arc<NodeClassRegistry>) -> Self {
        Self {
            params: Map::new(),
            inputs: HashMap::new(),
            classes,
            depth: 0,
        }
    }

    pub fn with_inputs(mut self, inputs: HashMap<String, Value>) -> Self {
        self.inputs = inputs;
        self
    }

    /// Get required input or return error
    pub fn require_input(&self, name: &str) -> Result<&Value, NodeError> {
        self.inputs
            .get(name)
            .ok_or_else(|| NodeError::MissingInput(name.to_string()))
    }

    /// Get a recorded call parameter, if present
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

/// Output from node execution, keyed by output port name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeOutput {
    pub outputs: HashMap<String, Value>,
}

impl NodeOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, port: impl Into<String>, value: impl Into<Value>) -> Self {
        self.outputs.insert(port.into(), value.into());
        self
    }
}

/// Registry of node classes available to the host
///
/// Owned by the host and consumed read-only at execution time; this core
/// only ever resolves names against it.
#[derive(Default)]
pub struct NodeClassRegistry {
    classes: HashMap<String, Arc<dyn NodeClass>>,
}

impl NodeClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node class, replacing any previous class of the same name
    pub fn register(&mut self, class: Arc<dyn NodeClass>) {
        let node_type = class.node_type().to_string();
        tracing::info!("Registering node type: {}", node_type);
        self.classes.insert(node_type, class);
    }

    pub fn get(&self, node_type: &str) -> Option<Arc<dyn NodeClass>> {
        self.classes.get(node_type).cloned()
    }

    /// Look up a node class or fail the way embedded dispatch does
    pub fn resolve(&self, node_type: &str) -> Result<Arc<dyn NodeClass>, NodeError> {
        self.get(node_type)
            .ok_or_else(|| NodeError::UnknownNodeType(node_type.to_string()))
    }

    /// Get all registered node types
    pub fn list_node_types(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }
}
