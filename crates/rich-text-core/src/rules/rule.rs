//! Node and mark renderer types.

use std::fmt;

use rich_text_types::Element;

use crate::serialize::Nested;
use crate::target::Target;

type NodeRenderFn<T> =
    Box<dyn Fn(&Element, &Nested<'_, T>) -> <T as Target>::Output + Send + Sync>;

type MarkRenderFn<T> =
    Box<dyn Fn(<T as Target>::Output) -> <T as Target>::Output + Send + Sync>;

/// Renders one container node.
///
/// The renderer receives the node and a [`Nested`] handle; it decides where
/// (and whether) the node's children are rendered by calling
/// [`Nested::render`].
pub struct NodeRenderer<T: Target> {
    render: NodeRenderFn<T>,
}

impl<T: Target> NodeRenderer<T> {
    /// Create a new node renderer
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Element, &Nested<'_, T>) -> T::Output + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Apply this renderer
    pub fn render(&self, node: &Element, nested: &Nested<'_, T>) -> T::Output {
        (self.render)(node, nested)
    }
}

impl<T: Target> fmt::Debug for NodeRenderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRenderer").finish_non_exhaustive()
    }
}

/// Renders a text mark around a text leaf's output.
///
/// In the default overwrite mode the input is always the plain leaf output
/// (`Target::text`); in compose mode it is whatever the previous mark produced.
pub struct MarkRenderer<T: Target> {
    render: MarkRenderFn<T>,
}

impl<T: Target> MarkRenderer<T> {
    /// Create a new mark renderer
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(T::Output) -> T::Output + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Apply this renderer
    pub fn render(&self, content: T::Output) -> T::Output {
        (self.render)(content)
    }
}

impl<T: Target> fmt::Debug for MarkRenderer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkRenderer").finish_non_exhaustive()
    }
}
