//! # rich-text-tree
//!
//! Serialize Plateo rich text documents to renderable element trees.
//!
//! Same renderer model as `rich-text-html`, but renderers produce
//! [`RenderNode`] values instead of strings. A UI layer can walk the tree
//! directly, or call [`RenderNode::to_html`] for markup.
//!
//! Unlike the HTML target, "no document" and "empty document" are different
//! at the root: non-array input yields `None`, an empty array yields an
//! empty [`RenderNode::Fragment`].
//!
//! ## Example
//!
//! ```rust
//! use rich_text_tree::{convert_document_to_tree, RenderNode, TreeRenderOptions};
//! use serde_json::json;
//!
//! let document = json!([
//!     { "type": "heading-one", "children": [{ "text": "I work" }] },
//! ]);
//!
//! let tree = convert_document_to_tree(&document, &TreeRenderOptions::new()).unwrap();
//! assert_eq!(
//!     tree,
//!     RenderNode::Fragment(vec![
//!         RenderNode::element("h1").with_child(RenderNode::text("I work")),
//!     ])
//! );
//! assert_eq!(tree.to_html(), "<h1>I work</h1>");
//! ```

mod node;
mod rules;
mod service;
mod target;

pub use node::RenderNode;
pub use rich_text_core::MarkMode;
pub use rules::{default_mark_renderers, default_node_renderers, wrap_children, wrap_text};
pub use service::{convert_document_to_tree, convert_json_to_tree, convert_nodes_to_tree};
pub use target::Tree;

/// Render options for the tree target
pub type TreeRenderOptions = rich_text_core::RenderOptions<Tree>;

/// Render-children handle passed to tree node renderers
pub type TreeNested<'r> = rich_text_core::Nested<'r, Tree>;

/// Error type for tree serialization
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Invalid document: {0}")]
    Document(#[from] rich_text_types::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
