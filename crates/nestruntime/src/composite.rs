use crate::executor::execute_nested;
use crate::DefinitionRegistry;
use async_trait::async_trait;
use nestcore::{
    NodeClass, NodeClassRegistry, NodeContext, NodeDefinition, NodeError, NodeOutput, Result,
};
use serde_json::Value;
use std::sync::Arc;

/// Category label the host UI groups synthesized composite nodes under
pub const NESTED_CATEGORY: &str = "Nested Nodes";

/// A node synthesized from one definition.
///
/// One generic wrapper parameterized by the definition value, rather than a
/// distinct nominal type per definition: the host-contract fields all read
/// straight out of the definition, and the entry point runs the embedded
/// workflow recursively.
pub struct CompositeNode {
    definition: NodeDefinition,
}

impl CompositeNode {
    /// Synthesize a node from a definition. Pure and deterministic: no
    /// store or registry access; shape correctness of the host-native
    /// `inputs`/`output` declarations is the author's responsibility.
    pub fn new(definition: NodeDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &NodeDefinition {
        &self.definition
    }
}

#[async_trait]
impl NodeClass for CompositeNode {
    fn node_type(&self) -> &str {
        &self.definition.name
    }

    fn display_name(&self) -> &str {
        self.definition
            .display_name
            .as_deref()
            .unwrap_or(&self.definition.name)
    }

    fn input_types(&self) -> Value {
        self.definition.inputs.clone()
    }

    fn return_types(&self) -> Value {
        self.definition.output.clone()
    }

    fn category(&self) -> &str {
        NESTED_CATEGORY
    }

    async fn execute(&self, ctx: NodeContext) -> std::result::Result<NodeOutput, NodeError> {
        execute_nested(&self.definition.nested_workflow, ctx).await
    }
}

/// Load all stored definitions and register a composite node for each with
/// the host's node-class registry. Returns how many were registered.
pub fn register_definitions(
    registry: &DefinitionRegistry,
    classes: &mut NodeClassRegistry,
) -> Result<usize> {
    let defs = registry.load_all()?;
    let count = defs.len();
    for def in defs.into_values() {
        classes.register(Arc::new(CompositeNode::new(def)));
    }
    Ok(count)
}
