//! Recursive document serialization
//!
//! Walks the node tree depth-first. Text leaves go through the mark
//! renderers; containers are dispatched by `type` to a node renderer, which
//! gets a [`Nested`] handle to render its own children with the same
//! resolved renderer set.

use rich_text_types::{Document, Element, NodeElement, Text};
use serde_json::Value;
use tracing::{debug, trace};

use crate::options::{MarkMode, RenderOptions};
use crate::rules::Renderers;
use crate::target::Target;

/// Serialize a JSON document.
///
/// Returns `None` when `value` is not an array (no document). An empty array
/// is an empty document and yields `Some(T::sequence(vec![]))`.
pub fn serialize_value<T: Target>(value: &Value, options: &RenderOptions<T>) -> Option<T::Output> {
    let Some(document) = Document::from_value(value) else {
        trace!("input is not a node sequence, skipping traversal");
        return None;
    };
    Some(serialize_document(&document, options))
}

/// Serialize a decoded document
pub fn serialize_document<T: Target>(document: &Document, options: &RenderOptions<T>) -> T::Output {
    let default_node = T::default_node_renderers();
    let default_mark = T::default_mark_renderers();
    let renderers = Renderers::resolve(&default_node, &default_mark, options);

    Nested::new(&renderers).render(document.nodes())
}

/// Handle passed to node renderers for rendering child sequences.
///
/// Every call re-enters the same walk with the same resolved renderers, so a
/// renderer controls where its children land without knowing how they are
/// rendered.
pub struct Nested<'r, T: Target> {
    renderers: &'r Renderers<'r, T>,
}

impl<'r, T: Target> Nested<'r, T> {
    pub fn new(renderers: &'r Renderers<'r, T>) -> Self {
        Self { renderers }
    }

    /// Render a sequence of nodes, aggregating outputs in input order
    pub fn render(&self, nodes: &[NodeElement]) -> T::Output {
        T::sequence(nodes.iter().map(|node| self.render_node(node)).collect())
    }

    /// Render a single node
    pub fn render_node(&self, node: &NodeElement) -> T::Output {
        match node {
            NodeElement::Text(text) => self.render_text(text),
            NodeElement::Element(element) => self.render_element(element),
        }
    }

    fn render_element(&self, element: &Element) -> T::Output {
        let Some(kind) = element.kind() else {
            debug!("container without a type, skipping");
            return T::empty();
        };

        match self.renderers.node(kind) {
            Some(renderer) => {
                trace!(kind, children = element.children.len(), "rendering container");
                renderer.render(element, self)
            }
            None => {
                debug!(kind, "no renderer registered for container type, skipping");
                T::empty()
            }
        }
    }

    fn render_text(&self, text: &Text) -> T::Output {
        match self.renderers.mark_mode() {
            // Every mark starts again from the plain leaf, so only the last
            // set mark in priority order survives.
            MarkMode::Overwrite => {
                let mut value = T::text(&text.text);
                for mark in text.marks() {
                    if let Some(renderer) = self.renderers.mark(mark) {
                        value = renderer.render(T::text(&text.text));
                    }
                }
                value
            }
            MarkMode::Compose => text.marks().fold(T::text(&text.text), |value, mark| {
                match self.renderers.mark(mark) {
                    Some(renderer) => renderer.render(value),
                    None => value,
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Tags;
    use pretty_assertions::assert_eq;
    use rich_text_types::Mark;
    use serde_json::json;

    fn render(value: Value) -> Option<String> {
        serialize_value(&value, &RenderOptions::<Tags>::new())
    }

    #[test]
    fn test_non_sequence_input() {
        assert_eq!(render(json!(null)), None);
        assert_eq!(render(json!({})), None);
        assert_eq!(render(json!("paragraph")), None);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(render(json!([])), Some(String::new()));
    }

    #[test]
    fn test_nested_containers() {
        let output = render(json!([
            { "type": "quote", "children": [
                { "type": "paragraph", "children": [{ "text": "deep" }] },
            ]},
        ]));
        assert_eq!(
            output.as_deref(),
            Some("[quote][paragraph]deep[/paragraph][/quote]")
        );
    }

    #[test]
    fn test_unknown_container_is_silent() {
        assert_eq!(
            render(json!([{ "type": "table", "children": [{ "text": "x" }] }])).as_deref(),
            Some("")
        );
        assert_eq!(
            render(json!([{ "children": [{ "text": "x" }] }])).as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_unknown_container_keeps_siblings() {
        let output = render(json!([
            { "text": "a" },
            { "type": "table", "children": [{ "text": "hidden" }] },
            { "text": "b" },
            { "type": "paragraph", "children": [
                { "type": "unknown" },
                { "text": "c" },
            ]},
        ]));
        assert_eq!(output.as_deref(), Some("ab[paragraph]c[/paragraph]"));
    }

    #[test]
    fn test_sibling_order_preserved() {
        let output = render(json!([
            { "text": "1" },
            { "text": "2", "bold": true },
            { "text": "1" },
            { "text": "2", "bold": true },
        ]));
        assert_eq!(output.as_deref(), Some("1bold(2)1bold(2)"));
    }

    #[test]
    fn test_overwrite_last_mark_wins() {
        let output = render(json!([{ "text": "x", "bold": true, "code": true }]));
        assert_eq!(output.as_deref(), Some("code(x)"));

        let output = render(json!([{ "text": "x", "bold": true, "italic": true, "underline": true }]));
        assert_eq!(output.as_deref(), Some("underline(x)"));
    }

    #[test]
    fn test_compose_marks() {
        let options = RenderOptions::<Tags>::new().with_mark_mode(MarkMode::Compose);
        let value = json!([{ "text": "x", "bold": true, "italic": true, "code": true }]);
        assert_eq!(
            serialize_value(&value, &options).as_deref(),
            Some("code(italic(bold(x)))")
        );
    }

    #[test]
    fn test_nested_uses_overrides() {
        let options = RenderOptions::<Tags>::new()
            .with_node("paragraph", |node, nested| format!("<{}>", nested.render(&node.children)))
            .with_mark(Mark::Bold, |text| text.to_uppercase());
        let value = json!([
            { "type": "quote", "children": [
                { "type": "paragraph", "children": [{ "text": "loud", "bold": true }] },
            ]},
        ]);
        assert_eq!(
            serialize_value(&value, &options).as_deref(),
            Some("[quote]<LOUD>[/quote]")
        );
    }

    #[test]
    fn test_renderer_may_ignore_children() {
        let options = RenderOptions::<Tags>::new().with_node("paragraph", |node, _| {
            format!("{} children", node.children.len())
        });
        let value = json!([{ "type": "paragraph", "children": [{ "text": "a" }, { "text": "b" }] }]);
        assert_eq!(serialize_value(&value, &options).as_deref(), Some("2 children"));
    }

    #[test]
    fn test_options_are_send_and_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<RenderOptions<Tags>>();
    }
}
