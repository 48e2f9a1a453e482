use blockpress_blocks::CalloutKind;
use serde::{Deserialize, Serialize};

/// Placeholder text for synthesized composite slots.
///
/// A lone space, never the empty string: tree hosts reject empty text
/// nodes structurally.
pub const SLOT_PLACEHOLDER: &str = " ";

/// Inline formatting mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Strong,
    Em,
    Code,
    Strike,
    Underline,
}

impl Mark {
    /// Wire name used in flat span mark sets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::Strong => "strong",
            Mark::Em => "em",
            Mark::Code => "code",
            Mark::Strike => "strike",
            Mark::Underline => "underline",
        }
    }

    pub fn from_str_opt(name: &str) -> Option<Mark> {
        match name {
            "strong" => Some(Mark::Strong),
            "em" => Some(Mark::Em),
            "code" => Some(Mark::Code),
            "strike" => Some(Mark::Strike),
            "underline" => Some(Mark::Underline),
            _ => None,
        }
    }
}

/// Inline text run with a set of marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inline {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, mark: Mark) -> Self {
        Self {
            text: text.into(),
            marks: vec![mark],
        }
    }
}

/// One item of a bullet or ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default)]
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Inline::text(text)],
        }
    }
}

/// A composite node's fixed slot: one run of inline content.
///
/// Slots are struct fields on their owning node, not reorderable
/// children. The label slot always comes first, the body slot second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub content: Vec<Inline>,
}

impl Slot {
    /// Slot holding the given text, or an empty slot for empty input.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            Self { content: Vec::new() }
        } else {
            Self {
                content: vec![Inline::text(text)],
            }
        }
    }

    /// Synthesized slot used by structural repair.
    pub fn placeholder() -> Self {
        Self {
            content: vec![Inline::text(SLOT_PLACEHOLDER)],
        }
    }

    /// Text of the first inline run, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|inline| inline.text.as_str())
    }
}

/// One node of the tree document.
///
/// Closed union tagged by `type`; foreign node kinds hydrate into
/// [`Node::Unknown`] and are dropped on flatten rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(default)]
        content: Vec<Inline>,
    },

    #[serde(rename = "heading")]
    Heading {
        level: u8,
        #[serde(default)]
        content: Vec<Inline>,
    },

    #[serde(rename = "blockquote")]
    Blockquote {
        #[serde(default)]
        content: Vec<Node>,
    },

    #[serde(rename = "bulletList")]
    BulletList {
        #[serde(default)]
        items: Vec<ListItem>,
    },

    #[serde(rename = "orderedList")]
    OrderedList {
        #[serde(default)]
        items: Vec<ListItem>,
    },

    #[serde(rename = "codeBlock")]
    CodeBlock {
        #[serde(default = "default_code_language")]
        language: String,
        #[serde(default)]
        content: Vec<Inline>,
    },

    /// Callout with a fixed title-then-content slot pair.
    #[serde(rename = "calloutBlock")]
    Callout {
        #[serde(default)]
        kind: CalloutKind,
        #[serde(default)]
        title: Option<Slot>,
        #[serde(default)]
        content: Option<Slot>,
    },

    /// Pull quote with a fixed quote-then-author slot pair.
    #[serde(rename = "pullQuoteBlock")]
    PullQuote {
        #[serde(default)]
        quote: Option<Slot>,
        #[serde(default)]
        author: Option<Slot>,
    },

    /// Feature image with a fixed alt-then-caption slot pair.
    #[serde(rename = "featureImageBlock")]
    FeatureImage {
        #[serde(rename = "imageUrl", default)]
        image_url: String,
        #[serde(rename = "fullWidth", default = "default_true")]
        full_width: bool,
        #[serde(default)]
        alt: Option<Slot>,
        #[serde(default)]
        caption: Option<Slot>,
    },

    /// Quarantine for hydrated data with an unrecognized node kind.
    #[serde(other)]
    Unknown,
}

fn default_code_language() -> String {
    blockpress_blocks::DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

impl Node {
    /// The canonical empty node.
    pub fn empty_paragraph() -> Self {
        Node::Paragraph { content: Vec::new() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            level,
            content: vec![Inline::text(text)],
        }
    }

    /// A callout with both slots healed to placeholders.
    pub fn callout(kind: CalloutKind) -> Self {
        Node::Callout {
            kind,
            title: Some(Slot::placeholder()),
            content: Some(Slot::placeholder()),
        }
    }

    pub fn pull_quote() -> Self {
        Node::PullQuote {
            quote: Some(Slot::placeholder()),
            author: Some(Slot::placeholder()),
        }
    }

    pub fn feature_image(image_url: impl Into<String>) -> Self {
        Node::FeatureImage {
            image_url: image_url.into(),
            full_width: true,
            alt: Some(Slot::placeholder()),
            caption: Some(Slot::placeholder()),
        }
    }

    /// The node's direct inline content, for kinds that carry one run.
    pub fn inline_content(&self) -> Option<&[Inline]> {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::CodeBlock { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn inline_content_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::CodeBlock { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Concatenated text of the node, slots and items included.
    pub fn plain_text(&self) -> String {
        fn push_inlines(out: &mut String, inlines: &[Inline]) {
            for inline in inlines {
                out.push_str(&inline.text);
            }
        }

        let mut out = String::new();
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::CodeBlock { content, .. } => push_inlines(&mut out, content),
            Node::Blockquote { content } => {
                for child in content {
                    out.push_str(&child.plain_text());
                }
            }
            Node::BulletList { items } | Node::OrderedList { items } => {
                for item in items {
                    push_inlines(&mut out, &item.content);
                }
            }
            Node::Callout { title, content, .. } => {
                for slot in [title, content].into_iter().flatten() {
                    push_inlines(&mut out, &slot.content);
                }
            }
            Node::PullQuote { quote, author } => {
                for slot in [quote, author].into_iter().flatten() {
                    push_inlines(&mut out, &slot.content);
                }
            }
            Node::FeatureImage { alt, caption, .. } => {
                for slot in [alt, caption].into_iter().flatten() {
                    push_inlines(&mut out, &slot.content);
                }
            }
            Node::Unknown => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_tag_round_trip() {
        let node = Node::heading(2, "Our services");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "heading",
                "level": 2,
                "content": [{ "text": "Our services" }],
            })
        );

        let back: Node = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_unknown_node_kind_quarantines() {
        let value = json!({ "type": "videoEmbed", "src": "x" });
        let node: Node = serde_json::from_value(value).unwrap();
        assert_eq!(node, Node::Unknown);
    }

    #[test]
    fn test_callout_hydrates_without_slots() {
        let node: Node = serde_json::from_value(json!({ "type": "calloutBlock" })).unwrap();
        match node {
            Node::Callout { kind, title, content } => {
                assert_eq!(kind, CalloutKind::Info);
                assert!(title.is_none());
                assert!(content.is_none());
            }
            other => panic!("expected callout, got {other:?}"),
        }
    }

    #[test]
    fn test_slot_from_text_never_creates_empty_text_node() {
        let slot = Slot::from_text("");
        assert!(slot.content.is_empty());

        let slot = Slot::placeholder();
        assert_eq!(slot.first_text(), Some(SLOT_PLACEHOLDER));
    }
}
