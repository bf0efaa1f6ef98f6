use nestcore::{EmbeddedNodeCall, NodeContext, NodeError, NodeOutput};
use std::sync::Arc;

/// Hard cap on composite-in-composite nesting.
///
/// Nothing in the data model stops a nested workflow from referencing its
/// own composite name; the guard turns that into a deterministic error
/// instead of unbounded recursion.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Run an embedded sub-graph in its stored order.
///
/// Each step resolves its node class against the host registry and is
/// dispatched with its recorded parameters plus the inputs flowing through
/// the workflow; a step's outputs become visible to every later step. No
/// reordering is performed, so a step referencing a value produced later is
/// an authoring error surfaced by the step itself. A failure stops the
/// traversal where it happened; earlier side effects stay in place.
pub async fn execute_nested(
    workflow: &[EmbeddedNodeCall],
    ctx: NodeContext,
) -> Result<NodeOutput, NodeError> {
    if ctx.depth >= MAX_NESTING_DEPTH {
        return Err(NodeError::RecursionLimit {
            max: MAX_NESTING_DEPTH,
        });
    }

    let mut flowing = ctx.inputs;
    let mut last = NodeOutput::new();
    for call in workflow {
        let class = ctx.classes.resolve(&call.node_type)?;
        tracing::debug!(step = %call.node_type, depth = ctx.depth, "dispatching embedded node");

        let step_ctx = NodeContext {
            params: call.params.clone(),
            inputs: flowing.clone(),
            classes: Arc::clone(&ctx.classes),
            depth: ctx.depth + 1,
        };
        let output = class.execute(step_ctx).await?;

        flowing.extend(output.outputs.clone());
        last = output;
    }
    Ok(last)
}
