//! Cross-conversion properties: one full cycle stabilizes the projection.

use blockpress_blocks::{Block, CalloutKind, ListItemKind};
use blockpress_convert::{unflatten, Flattener};
use blockpress_document::{Inline, ListItem, Mark, Node, Slot, TreeDocument};

fn sample_tree() -> TreeDocument {
    TreeDocument::from_nodes(vec![
        Node::heading(1, "Why choose us"),
        Node::Paragraph {
            content: vec![
                Inline::text("We build "),
                Inline::marked("fast", Mark::Strong),
                Inline::text(" sites."),
            ],
        },
        Node::Blockquote {
            content: vec![Node::paragraph("Best agency we worked with.")],
        },
        Node::BulletList {
            items: vec![
                ListItem::text("Design"),
                ListItem::text("Build"),
                ListItem::text("Launch"),
            ],
        },
        Node::CodeBlock {
            language: "javascript".to_string(),
            content: vec![Inline::text("console.log('hi')")],
        },
        Node::Callout {
            kind: CalloutKind::Warning,
            title: Some(Slot::from_text("Limited offer")),
            content: Some(Slot::from_text("Ends Friday")),
        },
        Node::PullQuote {
            quote: Some(Slot::from_text("It just works")),
            author: Some(Slot::from_text("A happy client")),
        },
        Node::FeatureImage {
            image_url: "https://cdn/hero.png".to_string(),
            full_width: true,
            alt: Some(Slot::from_text("hero shot")),
            caption: Some(Slot::from_text("Our office")),
        },
        Node::OrderedList {
            items: vec![ListItem::text("Sign up"), ListItem::text("Ship")],
        },
    ])
}

#[test]
fn flatten_stabilizes_after_one_cycle() {
    let flattener = Flattener::new("round-trip");
    let tree = sample_tree();

    let once = flattener.flatten(&tree);
    let again = flattener.flatten(&unflatten(&once));

    assert_eq!(once, again);
}

#[test]
fn list_expansion_counts_and_order() {
    let flattener = Flattener::new("lists");
    let tree = TreeDocument::from_nodes(vec![Node::BulletList {
        items: (1..=5).map(|n| ListItem::text(format!("item {n}"))).collect(),
    }]);

    let blocks = flattener.flatten(&tree);
    assert_eq!(blocks.len(), 5);

    for (n, block) in (1..=5).zip(&blocks) {
        match block {
            Block::Rich { children, list_item, level, .. } => {
                assert_eq!(children[0].text, format!("item {n}"));
                assert_eq!(*list_item, Some(ListItemKind::Bullet));
                assert_eq!(*level, Some(1));
            }
            other => panic!("expected rich block, got {other:?}"),
        }
    }
}

#[test]
fn flat_keys_are_unique_and_deterministic() {
    let flattener = Flattener::new("keys");
    let tree = sample_tree();

    let blocks = flattener.flatten(&tree);
    let keys: Vec<String> = blocks.iter().filter_map(Block::key).map(str::to_string).collect();

    let mut deduped = keys.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), keys.len(), "keys must be pairwise distinct");

    // Same seed, same tree, same keys.
    let second: Vec<String> = flattener
        .flatten(&tree)
        .iter()
        .filter_map(Block::key)
        .map(str::to_string)
        .collect();
    assert_eq!(keys, second);
}

#[test]
fn hydrating_persisted_json_survives_unknown_types() {
    let raw = serde_json::json!([
        { "_type": "h1", "_key": "a", "content": "Title" },
        { "_type": "legacyWidget", "config": { "x": 1 } },
        { "_type": "bulletList", "_key": "b", "items": ["one", "two"] },
    ]);

    let blocks: Vec<Block> = serde_json::from_value(raw).expect("lenient hydration");
    let doc = unflatten(&blocks);

    assert_eq!(doc.len(), 3);
    assert_eq!(doc.nodes()[0], Node::heading(1, "Title"));
    assert_eq!(doc.nodes()[1], Node::empty_paragraph());
}
