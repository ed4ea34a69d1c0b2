//! Output targets.

use crate::rules::{MarkRenderers, NodeRenderers};

/// An output family the serializer can produce.
///
/// Implementors are marker types; all behaviour is in associated functions.
pub trait Target: Sized {
    /// What one node (or one sequence of nodes) renders to
    type Output;

    /// Contribution of a container that has no renderer
    fn empty() -> Self::Output;

    /// Output for a text leaf before any mark is applied.
    ///
    /// Markup targets escape here; structured targets keep the raw text.
    fn text(text: &str) -> Self::Output;

    /// Aggregate the outputs of sibling nodes, preserving their order
    fn sequence(outputs: Vec<Self::Output>) -> Self::Output;

    /// Built-in node renderers, keyed by container `type`
    fn default_node_renderers() -> NodeRenderers<Self>;

    /// Built-in mark renderers
    fn default_mark_renderers() -> MarkRenderers<Self>;
}
