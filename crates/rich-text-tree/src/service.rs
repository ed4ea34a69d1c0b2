//! Entry points for rich text to tree conversion.

use rich_text_core::{serialize_document, serialize_value};
use rich_text_types::Document;
use serde_json::Value;

use crate::node::RenderNode;
use crate::{Result, TreeRenderOptions};

/// Serialize a JSON rich text document into a render tree.
///
/// Returns `None` when the input is not an array (no document); an empty
/// array yields an empty fragment.
pub fn convert_document_to_tree(document: &Value, options: &TreeRenderOptions) -> Option<RenderNode> {
    serialize_value(document, options)
}

/// Serialize an already decoded document into a render tree
pub fn convert_nodes_to_tree(document: &Document, options: &TreeRenderOptions) -> RenderNode {
    serialize_document(document, options)
}

/// Parse JSON text and serialize it into a render tree
pub fn convert_json_to_tree(json: &str, options: &TreeRenderOptions) -> Result<Option<RenderNode>> {
    Ok(Document::from_json_str(json)?.map(|document| convert_nodes_to_tree(&document, options)))
}
