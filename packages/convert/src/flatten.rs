use blockpress_blocks::{Block, KeyGenerator, ListItemKind, RichStyle, Span};
use blockpress_document::{Inline, Node, Slot, TreeDocument};
use tracing::warn;

/// Flattens a tree document into the portable block array.
///
/// The flattener re-seeds its key generator on every call, so flattening
/// the same tree twice produces identical arrays, which is what lets
/// [`crate::DocumentSync`] compare projections bit-for-bit.
#[derive(Debug, Clone)]
pub struct Flattener {
    seed: String,
}

impl Flattener {
    pub fn new(ident: &str) -> Self {
        Self {
            seed: blockpress_blocks::document_seed(ident),
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed }
    }

    /// Flatten top-level nodes in order, splicing multi-block expansions
    /// inline.
    pub fn flatten(&self, doc: &TreeDocument) -> Vec<Block> {
        let mut keys = KeyGenerator::from_seed(self.seed.clone());
        doc.nodes()
            .iter()
            .flat_map(|node| flatten_node(node, &mut keys))
            .collect()
    }
}

/// Spans for a run of inline content. Marks are intentionally dropped:
/// the persisted projection has never carried heading/paragraph marks,
/// and the renderer relies on that.
fn spans(content: &[Inline]) -> Vec<Span> {
    content.iter().map(|inline| Span::text(&inline.text)).collect()
}

/// Text of a composite slot: the first inline run, empty when absent.
fn slot_text(slot: &Option<Slot>) -> String {
    slot.as_ref()
        .and_then(|slot| slot.first_text())
        .unwrap_or_default()
        .to_string()
}

fn flatten_node(node: &Node, keys: &mut KeyGenerator) -> Vec<Block> {
    match node {
        Node::Heading { level, content } => {
            let style = match level {
                1 => RichStyle::H1,
                2 => RichStyle::H2,
                _ => RichStyle::H3,
            };
            vec![Block::Rich {
                key: keys.next_key(),
                style,
                children: spans(content),
                list_item: None,
                level: None,
            }]
        }

        Node::Paragraph { content } => vec![Block::Rich {
            key: keys.next_key(),
            style: RichStyle::Normal,
            children: spans(content),
            list_item: None,
            level: None,
        }],

        // One level of nesting is flattened: each child's own inline
        // children become spans.
        Node::Blockquote { content } => {
            let children = content
                .iter()
                .filter_map(|child| child.inline_content())
                .flat_map(spans)
                .collect();
            vec![Block::Rich {
                key: keys.next_key(),
                style: RichStyle::Blockquote,
                children,
                list_item: None,
                level: None,
            }]
        }

        // A single span marked `code`, text from the first child only.
        Node::CodeBlock { content, .. } => {
            let text = content
                .first()
                .map(|inline| inline.text.clone())
                .unwrap_or_default();
            vec![Block::Rich {
                key: keys.next_key(),
                style: RichStyle::Normal,
                children: vec![Span::marked(text, "code")],
                list_item: None,
                level: None,
            }]
        }

        // The one kind that expands to a variable number of entries:
        // one block per list item.
        Node::BulletList { items } => expand_list(items, ListItemKind::Bullet, keys),
        Node::OrderedList { items } => expand_list(items, ListItemKind::Number, keys),

        Node::Callout { kind, title, content } => vec![Block::Callout {
            key: keys.next_key(),
            kind: *kind,
            title: slot_text(title),
            content: slot_text(content),
        }],

        Node::PullQuote { quote, author } => vec![Block::PullQuote {
            key: keys.next_key(),
            quote: slot_text(quote),
            author: slot_text(author),
        }],

        Node::FeatureImage { image_url, full_width, alt, caption } => {
            vec![Block::FeatureImage {
                key: keys.next_key(),
                image_url: image_url.clone(),
                alt: slot_text(alt),
                caption: slot_text(caption),
                full_width: *full_width,
            }]
        }

        Node::Unknown => {
            warn!("dropping unrecognized node kind during flatten");
            Vec::new()
        }
    }
}

fn expand_list(
    items: &[blockpress_document::ListItem],
    kind: ListItemKind,
    keys: &mut KeyGenerator,
) -> Vec<Block> {
    items
        .iter()
        .map(|item| Block::Rich {
            key: keys.next_key(),
            style: RichStyle::Normal,
            children: spans(&item.content),
            list_item: Some(kind),
            level: Some(1),
        })
        .collect()
}
