//! Renderer registry.

mod rule;

pub use rule::{MarkRenderer, NodeRenderer};

use indexmap::IndexMap;
use rich_text_types::Mark;

use crate::options::{MarkMode, RenderOptions};
use crate::target::Target;

/// Node renderers keyed by container `type`
pub type NodeRenderers<T> = IndexMap<String, NodeRenderer<T>>;

/// Mark renderers keyed by mark flag
pub type MarkRenderers<T> = IndexMap<Mark, MarkRenderer<T>>;

/// The resolved renderer set for one serialization call.
///
/// Built from the target's defaults and the caller's overrides. An override
/// replaces the default for its key entirely; keys the caller does not mention
/// keep their default.
pub struct Renderers<'a, T: Target> {
    node: IndexMap<&'a str, &'a NodeRenderer<T>>,
    mark: IndexMap<Mark, &'a MarkRenderer<T>>,
    mark_mode: MarkMode,
}

impl<'a, T: Target> Renderers<'a, T> {
    /// Merge defaults with the caller's overrides
    pub fn resolve(
        default_node: &'a NodeRenderers<T>,
        default_mark: &'a MarkRenderers<T>,
        options: &'a RenderOptions<T>,
    ) -> Self {
        let node = default_node
            .iter()
            .chain(options.node.iter())
            .map(|(key, renderer)| (key.as_str(), renderer))
            .collect();

        let mark = default_mark
            .iter()
            .chain(options.mark.iter())
            .map(|(mark, renderer)| (*mark, renderer))
            .collect();

        Self {
            node,
            mark,
            mark_mode: options.mark_mode,
        }
    }

    /// Find the renderer for a container `type`
    pub fn node(&self, kind: &str) -> Option<&'a NodeRenderer<T>> {
        self.node.get(kind).copied()
    }

    /// Find the renderer for a mark
    pub fn mark(&self, mark: Mark) -> Option<&'a MarkRenderer<T>> {
        self.mark.get(&mark).copied()
    }

    pub fn mark_mode(&self) -> MarkMode {
        self.mark_mode
    }

    /// Container types that have a renderer, defaults first
    pub fn node_kinds(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.node.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Tags;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_override_replaces_default() {
        let defaults = Tags::default_node_renderers();
        let marks = Tags::default_mark_renderers();
        let options = RenderOptions::<Tags>::new()
            .with_node("paragraph", |_, _| "custom".to_string());
        let renderers = Renderers::resolve(&defaults, &marks, &options);

        let paragraph = renderers.node("paragraph").unwrap();
        let quote = renderers.node("quote").unwrap();
        let nested = crate::Nested::new(&renderers);
        let element = rich_text_types::Element::new("paragraph");

        assert_eq!(paragraph.render(&element, &nested), "custom");
        assert_eq!(quote.render(&element, &nested), "[quote][/quote]");
    }

    #[test]
    fn test_override_adds_custom_kind() {
        let defaults = Tags::default_node_renderers();
        let marks = Tags::default_mark_renderers();
        let options = RenderOptions::<Tags>::new().with_node("callout", |_, _| "!".to_string());
        let renderers = Renderers::resolve(&defaults, &marks, &options);

        assert!(renderers.node("callout").is_some());
        assert!(renderers.node("table").is_none());
        assert_eq!(
            renderers.node_kinds().collect::<Vec<_>>(),
            ["paragraph", "quote", "callout"]
        );
    }

    #[test]
    fn test_mark_override_is_per_key() {
        let defaults = Tags::default_node_renderers();
        let marks = Tags::default_mark_renderers();
        let options =
            RenderOptions::<Tags>::new().with_mark(Mark::Underline, |text| format!("U({text})"));
        let renderers = Renderers::resolve(&defaults, &marks, &options);

        assert_eq!(
            renderers.mark(Mark::Underline).unwrap().render("x".to_string()),
            "U(x)"
        );
        assert_eq!(
            renderers.mark(Mark::Bold).unwrap().render("x".to_string()),
            "bold(x)"
        );
    }
}
