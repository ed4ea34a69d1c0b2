//! # rich-text-html
//!
//! Serialize Plateo rich text documents to HTML strings.
//!
//! ## Design
//!
//! Every container `type` maps to a node renderer and every text mark to a
//! mark renderer. Built-in renderers cover all block kinds, links and the four
//! marks; callers override any of them per key through [`HtmlRenderOptions`].
//!
//! - Leaf text and attribute values are HTML-escaped
//! - Containers without a renderer produce nothing
//! - The output is a fragment: no `<html>`/`<body>` wrapper
//!
//! ## Example
//!
//! ```rust
//! use rich_text_html::{convert_document_to_html_string, HtmlRenderOptions};
//! use serde_json::json;
//!
//! let document = json!([
//!     { "type": "paragraph", "children": [{ "text": "Nice Paragraph", "bold": true }] },
//! ]);
//!
//! let html = convert_document_to_html_string(&document, &HtmlRenderOptions::new());
//! assert_eq!(html, "<p><strong>Nice Paragraph</strong></p>");
//! ```
//!
//! ## Example (custom renderer)
//!
//! ```rust
//! use rich_text_html::{HtmlRenderOptions, HtmlSerializer};
//! use serde_json::json;
//!
//! let options = HtmlRenderOptions::new().with_node("paragraph", |node, nested| {
//!     format!("<div>{}</div>", nested.render(&node.children))
//! });
//! let serializer = HtmlSerializer::with_options(options);
//!
//! let document = json!([
//!     { "type": "paragraph", "children": [{ "text": "Nice Paragraph", "bold": true }] },
//! ]);
//! assert_eq!(serializer.render(&document), "<div><strong>Nice Paragraph</strong></div>");
//! ```

mod rules;
mod service;
mod target;
mod utilities;

pub use rich_text_core::MarkMode;
pub use rules::{default_mark_renderers, default_node_renderers, wrap_children, wrap_text};
pub use service::{convert_document_to_html_string, convert_nodes_to_html_string, HtmlSerializer};
pub use target::Html;
pub use utilities::escape_html;

/// Render options for the HTML target
pub type HtmlRenderOptions = rich_text_core::RenderOptions<Html>;

/// Render-children handle passed to HTML node renderers
pub type HtmlNested<'r> = rich_text_core::Nested<'r, Html>;

/// Error type for HTML serialization
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Invalid document: {0}")]
    Document(#[from] rich_text_types::Error),
}

pub type Result<T> = std::result::Result<T, HtmlError>;
