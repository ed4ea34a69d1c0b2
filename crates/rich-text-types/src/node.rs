//! Decoded rich text nodes.
//!
//! A node is a text leaf iff its JSON object has a string `text` field.
//! Everything else is a container, even when it lacks a usable `type`.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::kinds::{Block, Inline, Mark};
use crate::Result;

/// A text leaf with its formatting flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub code: bool,
}

impl Text {
    /// Create an unformatted text leaf
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set a formatting flag
    pub fn with_mark(mut self, mark: Mark) -> Self {
        *self.flag_mut(mark) = true;
        self
    }

    /// Check whether a formatting flag is set
    pub fn has_mark(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Code => self.code,
        }
    }

    /// Set flags in priority order (bold, italic, underline, code)
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(|mark| self.has_mark(*mark))
    }

    fn flag_mut(&mut self, mark: Mark) -> &mut bool {
        match mark {
            Mark::Bold => &mut self.bold,
            Mark::Italic => &mut self.italic,
            Mark::Underline => &mut self.underline,
            Mark::Code => &mut self.code,
        }
    }

    fn from_object(text: &str, object: &Map<String, Value>) -> Self {
        let mut node = Self::new(text);
        for mark in Mark::ALL {
            *node.flag_mut(mark) = is_truthy(object.get(mark.as_str()));
        }
        node
    }
}

/// The `target` reference carried by image blocks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetTarget {
    pub id: String,
    #[serde(rename = "linkType", default)]
    pub link_type: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A container node (block or inline)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// The `type` field; `None` when absent, empty, or not a string
    pub kind: Option<String>,

    /// Child nodes in reading order
    pub children: Vec<NodeElement>,

    /// Kind-specific fields (`url`, `target`, ...) as they appeared in the input
    pub fields: Map<String, Value>,
}

impl Element {
    /// Create a container of the given type
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Create a block container
    pub fn block(block: Block) -> Self {
        Self::new(block.as_str())
    }

    /// Create an inline container
    pub fn inline(inline: Inline) -> Self {
        Self::new(inline.as_str())
    }

    /// Create a link with the given url
    pub fn link(url: &str) -> Self {
        Self::inline(Inline::Link).with_field("url", Value::String(url.to_string()))
    }

    /// Create an image block pointing at an asset
    pub fn image(asset_id: &str) -> Self {
        let mut target = Map::new();
        target.insert("id".to_string(), Value::String(asset_id.to_string()));
        target.insert("linkType".to_string(), Value::String("Asset".to_string()));
        target.insert("type".to_string(), Value::String("Link".to_string()));

        Self::block(Block::Image)
            .with_child(Text::new(""))
            .with_field("target", Value::Object(target))
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: impl Into<NodeElement>) -> Self {
        self.add_child(child);
        self
    }

    /// Set a kind-specific field, builder style
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    /// Append a child node
    pub fn add_child(&mut self, child: impl Into<NodeElement>) {
        self.children.push(child.into());
    }

    /// The `type` of this container
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// The block kind, if `type` names one
    pub fn block_kind(&self) -> Option<Block> {
        self.kind()?.parse().ok()
    }

    /// The inline kind, if `type` names one
    pub fn inline_kind(&self) -> Option<Inline> {
        self.kind()?.parse().ok()
    }

    /// Get a kind-specific field
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The `url` of a link
    pub fn url(&self) -> Option<&str> {
        self.field("url").and_then(Value::as_str)
    }

    /// The asset reference of an image
    pub fn target(&self) -> Option<AssetTarget> {
        AssetTarget::deserialize(self.field("target")?).ok()
    }

    /// Concatenated text of all descendant leaves
    pub fn text_content(&self) -> String {
        self.children.iter().map(NodeElement::text_content).collect()
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let kind = object
            .get("type")
            .and_then(Value::as_str)
            .filter(|kind| !kind.is_empty())
            .map(str::to_string);

        let children = match object.get("children") {
            Some(Value::Array(items)) => items.iter().map(NodeElement::from_value).collect(),
            _ => Vec::new(),
        };

        let fields = object
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "type" | "children"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            kind,
            children,
            fields,
        }
    }
}

/// A node of a rich text document
#[derive(Debug, Clone, PartialEq)]
pub enum NodeElement {
    Text(Text),
    Element(Element),
}

impl NodeElement {
    /// Decode a node from its JSON value.
    ///
    /// Never fails: values that are neither a text leaf nor an object decode
    /// as an untyped container, which no renderer matches.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(object) = value else {
            return NodeElement::Element(Element::default());
        };

        match object.get("text") {
            Some(Value::String(text)) => NodeElement::Text(Text::from_object(text, object)),
            _ => NodeElement::Element(Element::from_object(object)),
        }
    }

    /// Check if this is a text leaf
    pub fn is_text(&self) -> bool {
        matches!(self, NodeElement::Text(_))
    }

    /// Get the container, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            NodeElement::Element(element) => Some(element),
            NodeElement::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            NodeElement::Text(text) => text.text.clone(),
            NodeElement::Element(element) => element.text_content(),
        }
    }
}

impl From<Text> for NodeElement {
    fn from(text: Text) -> Self {
        NodeElement::Text(text)
    }
}

impl From<Element> for NodeElement {
    fn from(element: Element) -> Self {
        NodeElement::Element(element)
    }
}

impl<'de> Deserialize<'de> for NodeElement {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(NodeElement::from_value(&value))
    }
}

/// A rich text document: the root node sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: Vec<NodeElement>,
}

impl Document {
    pub fn new(nodes: Vec<NodeElement>) -> Self {
        Self { nodes }
    }

    /// Decode a document from JSON.
    ///
    /// Returns `None` when the value is not an array, i.e. there is no
    /// document at all. An empty array is an empty document.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Array(items) = value else {
            return None;
        };
        Some(Self::new(items.iter().map(NodeElement::from_value).collect()))
    }

    /// Parse JSON text and decode it as a document
    pub fn from_json_str(json: &str) -> Result<Option<Self>> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Root nodes in reading order
    pub fn nodes(&self) -> &[NodeElement] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeElement> {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, node: impl Into<NodeElement>) {
        self.nodes.push(node.into());
    }
}

impl From<Vec<NodeElement>> for Document {
    fn from(nodes: Vec<NodeElement>) -> Self {
        Self::new(nodes)
    }
}

/// Truthiness of an optional JSON flag, the way the editor writes them
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}
