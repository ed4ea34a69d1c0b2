//! Renderable element tree
//!
//! The output of the tree target: a small component-style tree that a UI
//! layer can walk, plus HTML rendering for inspection.

use indexmap::IndexMap;
use serde::Serialize;

/// A node of the rendered output tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderNode {
    /// Nothing; contributed by containers without a renderer
    Null,

    /// Raw (unescaped) text
    Text(String),

    /// An element with ordered attributes and children
    Element {
        tag: String,
        attributes: IndexMap<String, String>,
        children: Vec<RenderNode>,
    },

    /// An ordered list of siblings without a wrapper
    Fragment(Vec<RenderNode>),
}

impl RenderNode {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text(text.into())
    }

    /// Create an element with no attributes or children
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (elements only), builder style
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        if let RenderNode::Element { attributes, .. } = &mut self {
            attributes.insert(name.to_string(), value.into());
        }
        self
    }

    /// Append a child (elements only), builder style
    pub fn with_child(mut self, child: RenderNode) -> Self {
        if let RenderNode::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append rendered content, splicing a fragment's items in place
    pub fn with_content(self, content: RenderNode) -> Self {
        match content {
            RenderNode::Fragment(items) => items.into_iter().fold(self, RenderNode::with_child),
            other => self.with_child(other),
        }
    }

    /// Check if this is the null node
    pub fn is_null(&self) -> bool {
        matches!(self, RenderNode::Null)
    }

    /// Tag name of an element
    pub fn tag(&self) -> Option<&str> {
        match self {
            RenderNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Attribute value of an element
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            RenderNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    /// Direct children of an element or fragment
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. } | RenderNode::Fragment(children) => {
                children.as_slice()
            }
            RenderNode::Null | RenderNode::Text(_) => &[],
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            RenderNode::Text(text) => text.clone(),
            _ => self.children().iter().map(RenderNode::text_content).collect(),
        }
    }

    /// Render as an HTML fragment, escaping text and attribute values
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            RenderNode::Null => {}
            RenderNode::Text(text) => out.push_str(&html_escape::encode_quoted_attribute(text)),
            RenderNode::Element {
                tag,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            RenderNode::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_html() {
        let link = RenderNode::element("a")
            .with_attribute("href", "https://example.com")
            .with_child(RenderNode::text("Link"));
        assert_eq!(link.to_html(), r#"<a href="https://example.com">Link</a>"#);
    }

    #[test]
    fn test_escaping() {
        let node = RenderNode::element("a")
            .with_attribute("href", "/?q=\"x\"&y")
            .with_child(RenderNode::text("<b>"));
        assert_eq!(node.to_html(), r#"<a href="/?q=&quot;x&quot;&amp;y">&lt;b&gt;</a>"#);
    }

    #[test]
    fn test_null_and_fragment() {
        let fragment = RenderNode::Fragment(vec![
            RenderNode::text("a"),
            RenderNode::Null,
            RenderNode::Fragment(vec![RenderNode::text("b")]),
        ]);
        assert_eq!(fragment.to_html(), "ab");
        assert_eq!(fragment.text_content(), "ab");
    }

    #[test]
    fn test_with_content_splices_fragments() {
        let paragraph = RenderNode::element("p").with_content(RenderNode::Fragment(vec![
            RenderNode::text("a"),
            RenderNode::text("b"),
        ]));
        assert_eq!(paragraph.children(), &[RenderNode::text("a"), RenderNode::text("b")]);
    }

    #[test]
    fn test_builders_ignore_non_elements() {
        let text = RenderNode::text("x")
            .with_attribute("id", "1")
            .with_child(RenderNode::Null);
        assert_eq!(text, RenderNode::text("x"));
        assert_eq!(text.tag(), None);
        assert_eq!(text.attribute("id"), None);
    }

    #[test]
    fn test_serialize_json() {
        let node = RenderNode::element("p").with_child(RenderNode::text("hi"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "element": {
                    "tag": "p",
                    "attributes": {},
                    "children": [{ "text": "hi" }],
                }
            })
        );
        assert_eq!(serde_json::to_value(RenderNode::Null).unwrap(), serde_json::json!("null"));
    }
}
