use crate::block::{Block, BlockKind, DEFAULT_LANGUAGE};
use crate::keys::KeyGenerator;

/// Creates blocks with fresh keys and per-variant defaults.
///
/// The factory owns the document's [`KeyGenerator`], so every block it
/// hands out carries a key unique within the document. A new block is
/// never missing a required field: lists start with one empty item,
/// code blocks start with the default language.
#[derive(Debug, Clone)]
pub struct BlockFactory {
    keys: KeyGenerator,
}

impl BlockFactory {
    pub fn new(ident: &str) -> Self {
        Self {
            keys: KeyGenerator::new(ident),
        }
    }

    pub fn with_generator(keys: KeyGenerator) -> Self {
        Self { keys }
    }

    /// Create an empty block of the requested kind.
    pub fn create_empty(&mut self, kind: BlockKind) -> Block {
        let key = self.keys.next_key();
        match kind {
            BlockKind::H1 => Block::H1 { key, content: String::new() },
            BlockKind::H2 => Block::H2 { key, content: String::new() },
            BlockKind::Paragraph => Block::Paragraph { key, content: String::new() },
            BlockKind::Text => Block::Text { key, content: String::new() },
            BlockKind::BulletList => Block::BulletList { key, items: vec![String::new()] },
            BlockKind::NumberList => Block::NumberList { key, items: vec![String::new()] },
            BlockKind::Code => Block::Code {
                key,
                code: String::new(),
                language: DEFAULT_LANGUAGE.to_string(),
            },
            BlockKind::Image => Block::Image { key, image: None },
        }
    }

    /// Assign keys to persisted blocks that arrived without one.
    ///
    /// Hydration is lenient about missing `_key` fields; the editor
    /// re-keys those blocks before handing them to a view.
    pub fn adopt(&mut self, blocks: &mut [Block]) {
        for block in blocks.iter_mut() {
            if block.key().is_some_and(str::is_empty) {
                block.set_key(self.keys.next_key());
            }
        }
    }
}
