use blockpress_blocks::{Block, ListItemKind, RichStyle, Span};
use blockpress_document::{Inline, ListItem, Mark, Node, Slot, TreeDocument};
use tracing::warn;

/// Reconstruct a tree document from a persisted flat block array.
///
/// Total: any unrecognized block becomes an empty paragraph that keeps
/// its slot in reading order, and an empty array yields the canonical
/// single-empty-paragraph document. Consecutive list-item entries of the
/// same kind regroup into one list node, inverting the flatten-side
/// expansion.
pub fn unflatten(blocks: &[Block]) -> TreeDocument {
    if blocks.is_empty() {
        return TreeDocument::new();
    }

    let mut nodes = Vec::new();
    let mut index = 0;

    while index < blocks.len() {
        if let Some((kind, run)) = list_run(&blocks[index..]) {
            nodes.push(regroup_list(kind, &blocks[index..index + run]));
            index += run;
            continue;
        }

        nodes.push(unflatten_block(&blocks[index]));
        index += 1;
    }

    TreeDocument::from_nodes(nodes)
}

/// Length of the run of same-kind list items at the head of `rest`.
fn list_run(rest: &[Block]) -> Option<(ListItemKind, usize)> {
    let kind = match rest.first() {
        Some(Block::Rich { list_item: Some(kind), .. }) => *kind,
        _ => return None,
    };

    let run = rest
        .iter()
        .take_while(|block| matches!(block, Block::Rich { list_item: Some(k), .. } if *k == kind))
        .count();
    Some((kind, run))
}

fn regroup_list(kind: ListItemKind, run: &[Block]) -> Node {
    let items = run
        .iter()
        .map(|block| match block {
            Block::Rich { children, .. } => ListItem {
                content: inlines(children),
            },
            _ => ListItem { content: Vec::new() },
        })
        .collect();

    match kind {
        ListItemKind::Bullet => Node::BulletList { items },
        ListItemKind::Number => Node::OrderedList { items },
    }
}

/// Inline runs for flat spans, keeping the marks the tree understands.
fn inlines(children: &[Span]) -> Vec<Inline> {
    children
        .iter()
        .map(|span| Inline {
            text: span.text.clone(),
            marks: span.marks.iter().filter_map(|m| Mark::from_str_opt(m)).collect(),
        })
        .collect()
}

fn unflatten_block(block: &Block) -> Node {
    match block {
        Block::Rich { style, children, .. } => unflatten_rich(*style, children),

        Block::H1 { content, .. } => Node::heading(1, content.clone()),
        Block::H2 { content, .. } => Node::heading(2, content.clone()),
        Block::Paragraph { content, .. } | Block::Text { content, .. } => {
            if content.is_empty() {
                Node::empty_paragraph()
            } else {
                Node::paragraph(content.clone())
            }
        }

        Block::BulletList { items, .. } => Node::BulletList {
            items: items.iter().map(|item| ListItem::text(item.clone())).collect(),
        },
        Block::NumberList { items, .. } => Node::OrderedList {
            items: items.iter().map(|item| ListItem::text(item.clone())).collect(),
        },

        Block::Code { code, language, .. } => Node::CodeBlock {
            language: language.clone(),
            content: if code.is_empty() {
                Vec::new()
            } else {
                vec![Inline::text(code.clone())]
            },
        },

        // An editor image is not a full-bleed feature image; a missing
        // asset keeps its slot as an empty paragraph.
        Block::Image { image, .. } => match image {
            Some(asset) => Node::FeatureImage {
                image_url: asset.url.clone(),
                full_width: false,
                alt: Some(Slot::from_text("")),
                caption: Some(Slot::from_text("")),
            },
            None => Node::empty_paragraph(),
        },

        Block::Callout { kind, title, content, .. } => Node::Callout {
            kind: *kind,
            title: Some(Slot::from_text(title.clone())),
            content: Some(Slot::from_text(content.clone())),
        },

        Block::PullQuote { quote, author, .. } => Node::PullQuote {
            quote: Some(Slot::from_text(quote.clone())),
            author: Some(Slot::from_text(author.clone())),
        },

        Block::FeatureImage { image_url, alt, caption, full_width, .. } => Node::FeatureImage {
            image_url: image_url.clone(),
            full_width: *full_width,
            alt: Some(Slot::from_text(alt.clone())),
            caption: Some(Slot::from_text(caption.clone())),
        },

        Block::Unknown => {
            warn!("substituting empty paragraph for unrecognized block type");
            Node::empty_paragraph()
        }
    }
}

fn unflatten_rich(style: RichStyle, children: &[Span]) -> Node {
    // A lone code-marked span is a flattened code block; rebuild it so
    // the mark survives the next flatten.
    if style == RichStyle::Normal && children.len() == 1 {
        let span = &children[0];
        if span.marks.iter().any(|m| m == "code") {
            return Node::CodeBlock {
                language: blockpress_blocks::DEFAULT_LANGUAGE.to_string(),
                content: if span.text.is_empty() {
                    Vec::new()
                } else {
                    vec![Inline::text(span.text.clone())]
                },
            };
        }
    }

    match style {
        RichStyle::H1 => Node::Heading { level: 1, content: inlines(children) },
        RichStyle::H2 => Node::Heading { level: 2, content: inlines(children) },
        RichStyle::H3 => Node::Heading { level: 3, content: inlines(children) },
        RichStyle::Normal => Node::Paragraph { content: inlines(children) },
        RichStyle::Blockquote => Node::Blockquote {
            content: vec![Node::Paragraph { content: inlines(children) }],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_blocks::{CalloutKind, ImageAsset};

    #[test]
    fn test_empty_input_yields_canonical_empty_document() {
        assert_eq!(unflatten(&[]), TreeDocument::new());
    }

    #[test]
    fn test_unknown_type_becomes_paragraph_placeholder() {
        let doc = unflatten(&[Block::Unknown]);
        assert_eq!(doc.nodes(), &[Node::empty_paragraph()]);
    }

    #[test]
    fn test_unknown_preserves_position() {
        let blocks = vec![
            Block::H1 { key: "a".to_string(), content: "Title".to_string() },
            Block::Unknown,
            Block::PullQuote {
                key: "c".to_string(),
                quote: "Great".to_string(),
                author: "A client".to_string(),
            },
        ];

        let doc = unflatten(&blocks);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.nodes()[1], Node::empty_paragraph());
    }

    #[test]
    fn test_callout_reconstructs_two_slot_shape() {
        let blocks = vec![Block::Callout {
            key: "k".to_string(),
            kind: CalloutKind::Warning,
            title: "Heads up".to_string(),
            content: "Check this".to_string(),
        }];

        let doc = unflatten(&blocks);
        match &doc.nodes()[0] {
            Node::Callout { kind, title, content } => {
                assert_eq!(*kind, CalloutKind::Warning);
                assert_eq!(title.as_ref().unwrap().first_text(), Some("Heads up"));
                assert_eq!(content.as_ref().unwrap().first_text(), Some("Check this"));
            }
            other => panic!("expected callout, got {other:?}"),
        }
    }

    #[test]
    fn test_consecutive_list_items_regroup() {
        let item = |key: &str, text: &str, kind: ListItemKind| Block::Rich {
            key: key.to_string(),
            style: RichStyle::Normal,
            children: vec![Span::text(text)],
            list_item: Some(kind),
            level: Some(1),
        };

        let blocks = vec![
            item("a", "one", ListItemKind::Bullet),
            item("b", "two", ListItemKind::Bullet),
            item("c", "first", ListItemKind::Number),
        ];

        let doc = unflatten(&blocks);
        assert_eq!(doc.len(), 2);

        match &doc.nodes()[0] {
            Node::BulletList { items } => assert_eq!(items.len(), 2),
            other => panic!("expected bullet list, got {other:?}"),
        }
        match &doc.nodes()[1] {
            Node::OrderedList { items } => assert_eq!(items.len(), 1),
            other => panic!("expected ordered list, got {other:?}"),
        }
    }

    #[test]
    fn test_code_marked_span_rebuilds_code_block() {
        let blocks = vec![Block::Rich {
            key: "k".to_string(),
            style: RichStyle::Normal,
            children: vec![Span::marked("let x = 1;", "code")],
            list_item: None,
            level: None,
        }];

        let doc = unflatten(&blocks);
        match &doc.nodes()[0] {
            Node::CodeBlock { content, .. } => assert_eq!(content[0].text, "let x = 1;"),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_editor_blocks_map_to_natural_nodes() {
        let blocks = vec![
            Block::H2 { key: "a".to_string(), content: "Team".to_string() },
            Block::BulletList {
                key: "b".to_string(),
                items: vec!["Ana".to_string(), "Ben".to_string()],
            },
            Block::Image {
                key: "c".to_string(),
                image: Some(ImageAsset::new("https://cdn/team.png")),
            },
            Block::Image { key: "d".to_string(), image: None },
        ];

        let doc = unflatten(&blocks);
        assert_eq!(doc.nodes()[0], Node::heading(2, "Team"));
        match &doc.nodes()[1] {
            Node::BulletList { items } => assert_eq!(items.len(), 2),
            other => panic!("expected bullet list, got {other:?}"),
        }
        match &doc.nodes()[2] {
            Node::FeatureImage { image_url, full_width, .. } => {
                assert_eq!(image_url, "https://cdn/team.png");
                assert!(!full_width);
            }
            other => panic!("expected feature image, got {other:?}"),
        }
        assert_eq!(doc.nodes()[3], Node::empty_paragraph());
    }
}
