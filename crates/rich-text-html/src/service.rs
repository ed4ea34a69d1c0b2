//! HtmlSerializer - the main entry point for rich text to HTML conversion.

use rich_text_core::{serialize_document, serialize_value, MarkMode, MarkRenderer, NodeRenderer};
use rich_text_types::{Document, Mark};
use serde_json::Value;

use crate::target::Html;
use crate::{HtmlRenderOptions, Result};

/// Serialize a JSON rich text document into an HTML string.
///
/// Anything that is not an array, including `null` and `{}`, yields `""`.
pub fn convert_document_to_html_string(document: &Value, options: &HtmlRenderOptions) -> String {
    serialize_value(document, options).unwrap_or_default()
}

/// Serialize an already decoded document into an HTML string
pub fn convert_nodes_to_html_string(document: &Document, options: &HtmlRenderOptions) -> String {
    serialize_document(document, options)
}

/// Reusable HTML serializer holding a set of render options
#[derive(Debug, Default)]
pub struct HtmlSerializer {
    options: HtmlRenderOptions,
}

impl HtmlSerializer {
    /// Create a serializer with the built-in renderers only
    pub fn new() -> Self {
        Self {
            options: HtmlRenderOptions::new(),
        }
    }

    /// Create a serializer with custom options
    pub fn with_options(options: HtmlRenderOptions) -> Self {
        Self { options }
    }

    /// Render a JSON document
    pub fn render(&self, document: &Value) -> String {
        convert_document_to_html_string(document, &self.options)
    }

    /// Render a decoded document
    pub fn render_document(&self, document: &Document) -> String {
        convert_nodes_to_html_string(document, &self.options)
    }

    /// Parse JSON text and render it
    pub fn render_json(&self, json: &str) -> Result<String> {
        Ok(Document::from_json_str(json)?
            .map(|document| self.render_document(&document))
            .unwrap_or_default())
    }

    /// Override the renderer for a container `type`
    pub fn add_node_renderer(&mut self, kind: &str, renderer: NodeRenderer<Html>) -> &mut Self {
        self.options.add_node(kind, renderer);
        self
    }

    /// Override the renderer for a mark
    pub fn add_mark_renderer(&mut self, mark: Mark, renderer: MarkRenderer<Html>) -> &mut Self {
        self.options.add_mark(mark, renderer);
        self
    }

    /// Select how multiple marks on one text combine
    pub fn set_mark_mode(&mut self, mode: MarkMode) -> &mut Self {
        self.options.mark_mode = mode;
        self
    }

    /// Get the current options
    pub fn options(&self) -> &HtmlRenderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut HtmlRenderOptions {
        &mut self.options
    }
}
