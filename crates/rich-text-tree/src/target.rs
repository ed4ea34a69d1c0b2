//! The renderable-tree target.

use rich_text_core::{MarkRenderers, NodeRenderers, Target};

use crate::node::RenderNode;
use crate::rules;

/// Tree output: every node renders to a [`RenderNode`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Tree;

impl Target for Tree {
    type Output = RenderNode;

    fn empty() -> RenderNode {
        RenderNode::Null
    }

    fn text(text: &str) -> RenderNode {
        RenderNode::text(text)
    }

    fn sequence(outputs: Vec<RenderNode>) -> RenderNode {
        RenderNode::Fragment(outputs)
    }

    fn default_node_renderers() -> NodeRenderers<Self> {
        rules::default_node_renderers()
    }

    fn default_mark_renderers() -> MarkRenderers<Self> {
        rules::default_mark_renderers()
    }
}
