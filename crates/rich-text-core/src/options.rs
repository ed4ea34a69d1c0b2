//! Caller-supplied render configuration.

use std::fmt;

use rich_text_types::{Element, Mark};

use crate::rules::{MarkRenderer, MarkRenderers, NodeRenderer, NodeRenderers};
use crate::serialize::Nested;
use crate::target::Target;

/// How several marks on one text leaf combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkMode {
    /// Each set mark renders the plain leaf text and replaces the previous
    /// result, so the last set mark in priority order wins.
    #[default]
    Overwrite,
    /// Each set mark wraps the previous result; bold is innermost, code
    /// outermost.
    Compose,
}

/// Render options: renderer overrides plus the mark mode.
///
/// Overrides replace the target's built-in renderer for the same key. Keys
/// without a built-in (custom container types) are added.
pub struct RenderOptions<T: Target> {
    /// Node renderer overrides, keyed by container `type`
    pub node: NodeRenderers<T>,

    /// Mark renderer overrides
    pub mark: MarkRenderers<T>,

    /// Mark combination mode
    pub mark_mode: MarkMode,
}

impl<T: Target> RenderOptions<T> {
    /// Options with no overrides
    pub fn new() -> Self {
        Self {
            node: NodeRenderers::new(),
            mark: MarkRenderers::new(),
            mark_mode: MarkMode::default(),
        }
    }

    /// Override the renderer for a container `type`, builder style
    pub fn with_node<F>(mut self, kind: &str, render: F) -> Self
    where
        F: Fn(&Element, &Nested<'_, T>) -> T::Output + Send + Sync + 'static,
    {
        self.add_node(kind, NodeRenderer::new(render));
        self
    }

    /// Override the renderer for a mark, builder style
    pub fn with_mark<F>(mut self, mark: Mark, render: F) -> Self
    where
        F: Fn(T::Output) -> T::Output + Send + Sync + 'static,
    {
        self.add_mark(mark, MarkRenderer::new(render));
        self
    }

    /// Select the mark combination mode, builder style
    pub fn with_mark_mode(mut self, mode: MarkMode) -> Self {
        self.mark_mode = mode;
        self
    }

    /// Override the renderer for a container `type`
    pub fn add_node(&mut self, kind: &str, renderer: NodeRenderer<T>) -> &mut Self {
        self.node.insert(kind.to_string(), renderer);
        self
    }

    /// Override the renderer for a mark
    pub fn add_mark(&mut self, mark: Mark, renderer: MarkRenderer<T>) -> &mut Self {
        self.mark.insert(mark, renderer);
        self
    }
}

impl<T: Target> Default for RenderOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Target> fmt::Debug for RenderOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("node", &self.node.keys().collect::<Vec<_>>())
            .field("mark", &self.mark.keys().collect::<Vec<_>>())
            .field("mark_mode", &self.mark_mode)
            .finish()
    }
}
