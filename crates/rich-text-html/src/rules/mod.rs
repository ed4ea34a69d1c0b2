//! Built-in HTML renderers.

mod builtin;

pub use builtin::{default_mark_renderers, default_node_renderers};

use rich_text_core::{MarkRenderer, NodeRenderer};

use crate::target::Html;

/// A node renderer that wraps the rendered children in `<tag>…</tag>`
pub fn wrap_children(tag: impl Into<String>) -> NodeRenderer<Html> {
    let tag = tag.into();
    NodeRenderer::new(move |node, nested| {
        format!("<{tag}>{}</{tag}>", nested.render(&node.children))
    })
}

/// A mark renderer that wraps the text in `<tag>…</tag>`
pub fn wrap_text(tag: impl Into<String>) -> MarkRenderer<Html> {
    let tag = tag.into();
    MarkRenderer::new(move |text| format!("<{tag}>{text}</{tag}>"))
}
