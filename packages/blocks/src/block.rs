use serde::{Deserialize, Serialize};

/// Default language for freshly created code blocks.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Image asset reference as delivered by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
}

impl ImageAsset {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// One inline span inside a rich `block` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

impl Span {
    /// Unmarked text span.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Span carrying a single mark.
    pub fn marked(text: impl Into<String>, mark: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: vec![mark.into()],
        }
    }
}

/// Style of a rich `block` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RichStyle {
    H1,
    H2,
    H3,
    Normal,
    Blockquote,
}

/// List membership tag on a rich `block` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemKind {
    Bullet,
    Number,
}

/// Callout severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Info,
    Warning,
    Error,
}

/// One entry in the flat, portable document representation.
///
/// The union is closed: every tag the system understands has a variant,
/// and anything else deserializes into [`Block::Unknown`] so persisted
/// legacy data never fails to load. Each variant's shape is fully
/// determined by its tag: converters must not leak fields across
/// variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "h1")]
    H1 {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "h2")]
    H2 {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "text")]
    Text {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "bulletList")]
    BulletList {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        items: Vec<String>,
    },

    #[serde(rename = "numberList")]
    NumberList {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        items: Vec<String>,
    },

    #[serde(rename = "code")]
    Code {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        code: String,
        #[serde(default = "default_language")]
        language: String,
    },

    #[serde(rename = "image")]
    Image {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        image: Option<ImageAsset>,
    },

    /// Rich-text entry produced by the tree converter.
    #[serde(rename = "block")]
    Rich {
        #[serde(rename = "_key", default)]
        key: String,
        style: RichStyle,
        #[serde(default)]
        children: Vec<Span>,
        #[serde(rename = "listItem", default, skip_serializing_if = "Option::is_none")]
        list_item: Option<ListItemKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },

    #[serde(rename = "calloutBlock")]
    Callout {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(rename = "type", default)]
        kind: CalloutKind,
        #[serde(default)]
        title: String,
        #[serde(default)]
        content: String,
    },

    #[serde(rename = "pullQuoteBlock")]
    PullQuote {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(default)]
        quote: String,
        #[serde(default)]
        author: String,
    },

    #[serde(rename = "featureImageBlock")]
    FeatureImage {
        #[serde(rename = "_key", default)]
        key: String,
        #[serde(rename = "imageUrl", default)]
        image_url: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        caption: String,
        #[serde(rename = "fullWidth", default = "default_true")]
        full_width: bool,
    },

    /// Quarantine for persisted data with an unrecognized `_type`.
    #[serde(other)]
    Unknown,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

/// Block kinds the flat editor can create directly (the slash palette).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    H1,
    H2,
    Paragraph,
    Text,
    BulletList,
    NumberList,
    Code,
    Image,
}

impl BlockKind {
    pub const ALL: [BlockKind; 8] = [
        BlockKind::H1,
        BlockKind::H2,
        BlockKind::Paragraph,
        BlockKind::Text,
        BlockKind::BulletList,
        BlockKind::NumberList,
        BlockKind::Code,
        BlockKind::Image,
    ];

    /// Human label shown in the slash-command menu.
    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::H1 => "Heading 1",
            BlockKind::H2 => "Heading 2",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::Text => "Text",
            BlockKind::BulletList => "Bullet list",
            BlockKind::NumberList => "Numbered list",
            BlockKind::Code => "Code",
            BlockKind::Image => "Image",
        }
    }
}

impl Block {
    /// Every `_type` tag the system declares. The renderer registry is
    /// validated against this list at startup.
    pub const DECLARED_TAGS: [&'static str; 12] = [
        "h1",
        "h2",
        "paragraph",
        "text",
        "bulletList",
        "numberList",
        "code",
        "image",
        "block",
        "calloutBlock",
        "pullQuoteBlock",
        "featureImageBlock",
    ];

    /// The `_type` discriminant of this block.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Block::H1 { .. } => "h1",
            Block::H2 { .. } => "h2",
            Block::Paragraph { .. } => "paragraph",
            Block::Text { .. } => "text",
            Block::BulletList { .. } => "bulletList",
            Block::NumberList { .. } => "numberList",
            Block::Code { .. } => "code",
            Block::Image { .. } => "image",
            Block::Rich { .. } => "block",
            Block::Callout { .. } => "calloutBlock",
            Block::PullQuote { .. } => "pullQuoteBlock",
            Block::FeatureImage { .. } => "featureImageBlock",
            Block::Unknown => "unknown",
        }
    }

    /// The reconciliation key, if this block carries one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Block::H1 { key, .. }
            | Block::H2 { key, .. }
            | Block::Paragraph { key, .. }
            | Block::Text { key, .. }
            | Block::BulletList { key, .. }
            | Block::NumberList { key, .. }
            | Block::Code { key, .. }
            | Block::Image { key, .. }
            | Block::Rich { key, .. }
            | Block::Callout { key, .. }
            | Block::PullQuote { key, .. }
            | Block::FeatureImage { key, .. } => Some(key),
            Block::Unknown => None,
        }
    }

    pub fn set_key(&mut self, new_key: impl Into<String>) {
        match self {
            Block::H1 { key, .. }
            | Block::H2 { key, .. }
            | Block::Paragraph { key, .. }
            | Block::Text { key, .. }
            | Block::BulletList { key, .. }
            | Block::NumberList { key, .. }
            | Block::Code { key, .. }
            | Block::Image { key, .. }
            | Block::Rich { key, .. }
            | Block::Callout { key, .. }
            | Block::PullQuote { key, .. }
            | Block::FeatureImage { key, .. } => *key = new_key.into(),
            Block::Unknown => {}
        }
    }
}
