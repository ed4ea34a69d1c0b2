//! Node and mark vocabulary.
//!
//! The string forms are the wire contract of the editor's JSON output and
//! double as the lookup keys of the renderer registries.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Block-level container kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Paragraph,
    HeadingOne,
    HeadingTwo,
    HeadingThree,
    HeadingFour,
    HeadingFive,
    HeadingSix,
    BulletedList,
    NumberedList,
    ListItem,
    Quote,
    /// Asset reference; carries a `target` field
    Image,
}

impl Block {
    /// Every block kind, in declaration order
    pub const ALL: [Block; 12] = [
        Block::Paragraph,
        Block::HeadingOne,
        Block::HeadingTwo,
        Block::HeadingThree,
        Block::HeadingFour,
        Block::HeadingFive,
        Block::HeadingSix,
        Block::BulletedList,
        Block::NumberedList,
        Block::ListItem,
        Block::Quote,
        Block::Image,
    ];

    /// Wire name of this kind (`"heading-one"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Block::Paragraph => "paragraph",
            Block::HeadingOne => "heading-one",
            Block::HeadingTwo => "heading-two",
            Block::HeadingThree => "heading-three",
            Block::HeadingFour => "heading-four",
            Block::HeadingFive => "heading-five",
            Block::HeadingSix => "heading-six",
            Block::BulletedList => "bulleted-list",
            Block::NumberedList => "numbered-list",
            Block::ListItem => "list-item",
            Block::Quote => "quote",
            Block::Image => "image",
        }
    }

    /// Heading level (1-6) for heading kinds
    pub fn heading_level(self) -> Option<u8> {
        match self {
            Block::HeadingOne => Some(1),
            Block::HeadingTwo => Some(2),
            Block::HeadingThree => Some(3),
            Block::HeadingFour => Some(4),
            Block::HeadingFive => Some(5),
            Block::HeadingSix => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Block {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Block::ALL
            .into_iter()
            .find(|block| block.as_str() == s)
            .ok_or_else(|| Error::UnknownKind {
                kind: "block",
                name: s.to_string(),
            })
    }
}

/// Inline container kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inline {
    /// Hyperlink; carries a `url` field
    Link,
}

impl Inline {
    pub const ALL: [Inline; 1] = [Inline::Link];

    pub fn as_str(self) -> &'static str {
        match self {
            Inline::Link => "link",
        }
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Inline {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Inline::ALL
            .into_iter()
            .find(|inline| inline.as_str() == s)
            .ok_or_else(|| Error::UnknownKind {
                kind: "inline",
                name: s.to_string(),
            })
    }
}

/// Text formatting flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Mark {
    /// All marks in the order they are tested when rendering a text leaf.
    pub const ALL: [Mark; 4] = [Mark::Bold, Mark::Italic, Mark::Underline, Mark::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Code => "code",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mark::ALL
            .into_iter()
            .find(|mark| mark.as_str() == s)
            .ok_or_else(|| Error::UnknownKind {
                kind: "mark",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_names_round_trip() {
        for block in Block::ALL {
            assert_eq!(block.as_str().parse::<Block>().unwrap(), block);
        }
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(Block::HeadingOne.heading_level(), Some(1));
        assert_eq!(Block::HeadingSix.heading_level(), Some(6));
        assert_eq!(Block::Quote.heading_level(), None);
    }

    #[test]
    fn test_unknown_kind() {
        let err = "table".parse::<Block>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown block name: table");
        assert!("strike".parse::<Mark>().is_err());
    }

    #[test]
    fn test_mark_priority_order() {
        let names: Vec<&str> = Mark::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names, ["bold", "italic", "underline", "code"]);
    }

    #[test]
    fn test_link_display() {
        assert_eq!(Inline::Link.to_string(), "link");
    }
}
