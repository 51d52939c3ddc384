//! Structured output of the description parser.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Header,
    Paragraph,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Bullet,
    Number,
}

/// Header/paragraph blocks carry one string, list blocks an ordered item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    Text(String),
    Items(Vec<String>),
}

/// Optional flags recorded when a block came from explicit markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    /// Heading level (1-6) from an `h1`-`h6` tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// `true` when the header came from a bold-only paragraph.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_strong: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_style: Option<ListStyle>,
}

impl BlockMetadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && !self.is_strong && self.list_style.is_none()
    }
}

/// One classified segment of a parsed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub content: BlockContent,
    #[serde(default, skip_serializing_if = "BlockMetadata::is_empty")]
    pub metadata: BlockMetadata,
}

impl TextBlock {
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Header,
            content: BlockContent::Text(text.into()),
            metadata: BlockMetadata::default(),
        }
    }

    /// Header derived from an `h1`-`h6` tag.
    #[must_use]
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut block = Self::header(text);
        block.metadata.level = Some(level.clamp(1, 6));
        block
    }

    /// Header derived from a bold-only paragraph.
    #[must_use]
    pub fn strong_header(text: impl Into<String>) -> Self {
        let mut block = Self::header(text);
        block.metadata.is_strong = true;
        block
    }

    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            content: BlockContent::Text(text.into()),
            metadata: BlockMetadata::default(),
        }
    }

    #[must_use]
    pub fn list(items: Vec<String>, style: ListStyle) -> Self {
        Self {
            kind: BlockKind::List,
            content: BlockContent::Items(items),
            metadata: BlockMetadata {
                list_style: Some(style),
                ..BlockMetadata::default()
            },
        }
    }

    #[must_use]
    pub fn is_header(&self) -> bool {
        self.kind == BlockKind::Header
    }

    /// The single string of a header or paragraph block.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Text(text) => Some(text),
            BlockContent::Items(_) => None,
        }
    }

    /// The items of a list block; empty for other kinds.
    #[must_use]
    pub fn items(&self) -> &[String] {
        match &self.content {
            BlockContent::Items(items) => items,
            BlockContent::Text(_) => &[],
        }
    }

    /// Renders the block the way it appears in clean text: list items on
    /// their own `• ` lines, everything else verbatim.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.content {
            BlockContent::Text(text) => text.clone(),
            BlockContent::Items(items) => items
                .iter()
                .map(|item| format!("• {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Complete parser output for one description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContent {
    pub clean_text: String,
    pub blocks: Vec<TextBlock>,
    /// `true` iff at least one block is a header.
    pub has_structure: bool,
}

impl ParsedContent {
    #[must_use]
    pub fn header_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_header()).count()
    }
}

/// Blocks regrouped by inferred semantic role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSections {
    pub about: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    /// Residual text for blocks outside any recognized section.
    pub other: String,
}

impl JobSections {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.about.is_empty()
            && self.responsibilities.is_empty()
            && self.requirements.is_empty()
            && self.benefits.is_empty()
            && self.other.is_empty()
    }
}
