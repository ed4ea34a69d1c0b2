//! Built-in tree renderers.

use rich_text_core::{MarkRenderer, MarkRenderers, NodeRenderer, NodeRenderers};
use rich_text_types::{Block, Element, Inline, Mark};
use tracing::debug;

use crate::node::RenderNode;
use crate::target::Tree;
use crate::TreeNested;

/// A node renderer that places the rendered children inside a `tag` element
pub fn wrap_children(tag: impl Into<String>) -> NodeRenderer<Tree> {
    let tag = tag.into();
    NodeRenderer::new(move |node, nested| {
        RenderNode::element(tag.as_str()).with_content(nested.render(&node.children))
    })
}

/// A mark renderer that places the text inside a `tag` element
pub fn wrap_text(tag: impl Into<String>) -> MarkRenderer<Tree> {
    let tag = tag.into();
    MarkRenderer::new(move |content| RenderNode::element(tag.as_str()).with_child(content))
}

/// Create all built-in node renderers
pub fn default_node_renderers() -> NodeRenderers<Tree> {
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
pub fn default_mark_renderers() -> MarkRenderers<Tree> {
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

fn image_block(node: &Element) -> RenderNode {
    let Some(target) = node.target() else {
        debug!("image without an asset target, skipping");
        return RenderNode::Null;
    };

    RenderNode::element("span")
        .with_child(RenderNode::text(node.kind().unwrap_or_default()))
        .with_child(RenderNode::text(" id: "))
        .with_child(RenderNode::text(target.id))
}

fn inline_link(node: &Element, nested: &TreeNested<'_>) -> RenderNode {
    RenderNode::element("a")
        .with_attribute("href", node.url().unwrap_or_default())
        .with_content(nested.render(&node.children))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_kind_has_a_renderer() {
        let renderers = default_node_renderers();
        for block in Block::ALL {
            assert!(renderers.contains_key(block.as_str()), "missing {block}");
        }
        assert!(renderers.contains_key(Inline::Link.as_str()));
        assert_eq!(default_mark_renderers().len(), Mark::ALL.len());
    }

    #[test]
    fn test_mark_wraps_content() {
        let renderers = default_mark_renderers();
        assert_eq!(
            renderers[&Mark::Code].render(RenderNode::text("x")),
            RenderNode::element("code").with_child(RenderNode::text("x"))
        );
    }

    #[test]
    fn test_image_block() {
        let image = Element::image("abc");
        assert_eq!(
            image_block(&image),
            RenderNode::element("span")
                .with_child(RenderNode::text("image"))
                .with_child(RenderNode::text(" id: "))
                .with_child(RenderNode::text("abc"))
        );
        assert!(image_block(&Element::block(Block::Image)).is_null());
    }
}
