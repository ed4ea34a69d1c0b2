//! The HTML string target.

use rich_text_core::{MarkRenderers, NodeRenderers, Target};

use crate::rules;
use crate::utilities::escape_html;

/// Markup output: every node renders to an HTML fragment string
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Target for Html {
    type Output = String;

    fn empty() -> String {
        String::new()
    }

    fn text(text: &str) -> String {
        escape_html(text).into_owned()
    }

    fn sequence(outputs: Vec<String>) -> String {
        outputs.concat()
    }

    fn default_node_renderers() -> NodeRenderers<Self> {
        rules::default_node_renderers()
    }

    fn default_mark_renderers() -> MarkRenderers<Self> {
        rules::default_mark_renderers()
    }
}
