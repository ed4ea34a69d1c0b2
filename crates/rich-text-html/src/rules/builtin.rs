//! Default node and mark renderers for HTML output.

use rich_text_core::{MarkRenderers, NodeRenderer, NodeRenderers};
use rich_text_types::{Block, Element, Inline, Mark};
use tracing::debug;

use super::{wrap_children, wrap_text};
use crate::target::Html;
use crate::utilities::escape_html;
use crate::HtmlNested;

/// Create all built-in node renderers
pub fn default_node_renderers() -> NodeRenderers<Html> {
    let mut renderers = NodeRenderers::new();

    for (block, tag) in [
        (Block::Paragraph, "p"),
        (Block::HeadingOne, "h1"),
        (Block::HeadingTwo, "h2"),
        (Block::HeadingThree, "h3"),
        (Block::HeadingFour, "h4"),
        (Block::HeadingFive, "h5"),
        (Block::HeadingSix, "h6"),
        (Block::BulletedList, "ul"),
        (Block::NumberedList, "ol"),
        (Block::ListItem, "li"),
        (Block::Quote, "blockquote"),
    ] {
        renderers.insert(block.to_string(), wrap_children(tag));
    }

    renderers.insert(Block::Image.to_string(), NodeRenderer::new(|node, _| image_block(node)));
    renderers.insert(Inline::Link.to_string(), NodeRenderer::new(inline_link));

    renderers
}

/// Create all built-in mark renderers
pub fn default_mark_renderers() -> MarkRenderers<Html> {
    [
        (Mark::Bold, "strong"),
        (Mark::Italic, "i"),
        (Mark::Underline, "u"),
        (Mark::Code, "code"),
    ]
    .into_iter()
    .map(|(mark, tag)| (mark, wrap_text(tag)))
    .collect()
}

/// Asset placeholder: `<span>image id: …</span>`
fn image_block(node: &Element) -> String {
    let Some(target) = node.target() else {
        debug!("image without an asset target, skipping");
        return String::new();
    };

    format!(
        "<span>{} id: {}</span>",
        escape_html(node.kind().unwrap_or_default()),
        escape_html(&target.id)
    )
}

fn inline_link(node: &Element, nested: &HtmlNested<'_>) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        escape_html(node.url().unwrap_or_default()),
        nested.render(&node.children)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_block_has_a_renderer() {
        let renderers = default_node_renderers();
        for block in Block::ALL {
            assert!(renderers.contains_key(block.as_str()), "missing {block}");
        }
        assert!(renderers.contains_key(Inline::Link.as_str()));
    }

    #[test]
    fn test_every_mark_has_a_renderer() {
        let renderers = default_mark_renderers();
        for mark in Mark::ALL {
            assert!(renderers.contains_key(&mark), "missing {mark}");
        }
    }

    #[test]
    fn test_mark_output() {
        let renderers = default_mark_renderers();
        assert_eq!(renderers[&Mark::Bold].render("x".to_string()), "<strong>x</strong>");
        assert_eq!(renderers[&Mark::Italic].render("x".to_string()), "<i>x</i>");
        assert_eq!(renderers[&Mark::Underline].render("x".to_string()), "<u>x</u>");
        assert_eq!(renderers[&Mark::Code].render("x".to_string()), "<code>x</code>");
    }

    #[test]
    fn test_image_without_target() {
        assert_eq!(image_block(&Element::block(Block::Image)), "");
    }
}
