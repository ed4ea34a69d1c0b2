//! rich-text-core - renderer registry and recursive serializer
//!
//! This crate holds the part of rich text serialization that does not depend
//! on the output format. It is used by `rich-text-html` (markup strings) and
//! `rich-text-tree` (renderable trees).
//!
//! # Architecture
//!
//! ```text
//!  target defaults ──┐
//!                    ├──▶ Renderers (per call) ──▶ Nested walk ──▶ T::Output
//!  RenderOptions ────┘        node: type  ─▶ NodeRenderer
//!                             mark: flag  ─▶ MarkRenderer
//! ```
//!
//! A [`Target`] names the output type, the value unknown nodes contribute, how
//! leaf text becomes output and how sibling outputs aggregate. It also
//! provides the built-in renderers. Caller overrides in [`RenderOptions`]
//! replace built-ins key by key.
//!
//! # Example
//!
//! ```rust
//! use rich_text_core::{serialize_value, MarkRenderers, NodeRenderer, NodeRenderers, RenderOptions, Target};
//! use serde_json::json;
//!
//! /// Plain text output: containers are transparent, marks are ignored.
//! struct Plain;
//!
//! impl Target for Plain {
//!     type Output = String;
//!
//!     fn empty() -> String {
//!         String::new()
//!     }
//!
//!     fn text(text: &str) -> String {
//!         text.to_string()
//!     }
//!
//!     fn sequence(outputs: Vec<String>) -> String {
//!         outputs.concat()
//!     }
//!
//!     fn default_node_renderers() -> NodeRenderers<Self> {
//!         let mut renderers: NodeRenderers<Self> = NodeRenderers::new();
//!         renderers.insert(
//!             "paragraph".to_string(),
//!             NodeRenderer::new(|node, nested| nested.render(&node.children)),
//!         );
//!         renderers
//!     }
//!
//!     fn default_mark_renderers() -> MarkRenderers<Self> {
//!         MarkRenderers::new()
//!     }
//! }
//!
//! let document = json!([{ "type": "paragraph", "children": [{ "text": "Hi" }] }]);
//! let output = serialize_value(&document, &RenderOptions::<Plain>::new());
//! assert_eq!(output.as_deref(), Some("Hi"));
//! ```

mod options;
mod rules;
mod serialize;
mod target;

pub use options::{MarkMode, RenderOptions};
pub use rules::{MarkRenderer, MarkRenderers, NodeRenderer, NodeRenderers, Renderers};
pub use serialize::{serialize_document, serialize_value, Nested};
pub use target::Target;
