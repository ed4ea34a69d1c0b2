//! rich-text-types - Plateo rich text document model
//!
//! This crate defines the node vocabulary ([`Block`], [`Inline`], [`Mark`])
//! and the decoded document tree ([`Document`], [`NodeElement`]). It is shared
//! by the serializer crates (`rich-text-html`, `rich-text-tree`).
//!
//! Documents arrive as JSON produced by the editor. Decoding decides once per
//! node whether it is a text leaf or a container, so renderers never have to
//! re-inspect raw JSON.
//!
//! # Example
//!
//! ```rust
//! use rich_text_types::{Block, Document, NodeElement};
//! use serde_json::json;
//!
//! let value = json!([
//!     { "type": "heading-one", "children": [{ "text": "Hello World" }] },
//! ]);
//!
//! let document = Document::from_value(&value).unwrap();
//! let NodeElement::Element(heading) = &document.nodes()[0] else {
//!     panic!("expected a container node");
//! };
//! assert_eq!(heading.block_kind(), Some(Block::HeadingOne));
//! assert_eq!(heading.text_content(), "Hello World");
//! ```

mod kinds;
mod node;

pub use kinds::{Block, Inline, Mark};
pub use node::{AssetTarget, Document, Element, NodeElement, Text};

/// Error type for document decoding
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown {kind} name: {name}")]
    UnknownKind { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
