use crate::flatten::Flattener;
use crate::unflatten::unflatten;
use blockpress_blocks::Block;
use blockpress_document::TreeDocument;
use tracing::debug;

/// Blur-time gate between the editing tree and the content store.
///
/// Flattening runs on blur, not per keystroke, and reapplying a
/// projection identical to the last-applied one would reset cursor
/// positions downstream, so `flush` compares before it reports.
///
/// The cache holds the canonical projection (this flattener's own keys),
/// so comparisons are bit-exact regardless of what keys the persisted
/// input carried.
#[derive(Debug, Clone)]
pub struct DocumentSync {
    flattener: Flattener,
    last_applied: Option<Vec<Block>>,
}

impl DocumentSync {
    pub fn new(ident: &str) -> Self {
        Self {
            flattener: Flattener::new(ident),
            last_applied: None,
        }
    }

    /// Rebuild the editing tree from a persisted array, priming the
    /// cache with its canonical projection.
    pub fn hydrate(&mut self, blocks: &[Block]) -> TreeDocument {
        let tree = unflatten(blocks);
        self.last_applied = Some(self.flattener.flatten(&tree));
        tree
    }

    /// Flatten the current tree; `None` when the projection is identical
    /// to the last applied one.
    pub fn flush(&mut self, doc: &TreeDocument) -> Option<Vec<Block>> {
        let blocks = self.flattener.flatten(doc);

        if self.last_applied.as_ref() == Some(&blocks) {
            debug!("skipping flush of identical projection");
            return None;
        }

        self.last_applied = Some(blocks.clone());
        Some(blocks)
    }

    pub fn last_applied(&self) -> Option<&[Block]> {
        self.last_applied.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_document::{Mutation, Node};

    #[test]
    fn test_flush_skips_identical_projection() {
        let mut sync = DocumentSync::new("landing");
        let doc = TreeDocument::from_nodes(vec![Node::paragraph("hello")]);

        assert!(sync.flush(&doc).is_some());
        assert!(sync.flush(&doc).is_none());
    }

    #[test]
    fn test_flush_reports_after_mutation() {
        let mut sync = DocumentSync::new("landing");
        let mut doc = TreeDocument::from_nodes(vec![Node::paragraph("hello")]);

        assert!(sync.flush(&doc).is_some());

        doc.apply(Mutation::UpdateText { index: 0, text: "hello world".to_string() })
            .unwrap();
        let blocks = sync.flush(&doc).expect("changed content flushes");
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_hydrate_primes_the_cache() {
        let mut sync = DocumentSync::new("landing");

        let persisted = vec![Block::H1 {
            key: "foreign-key-1".to_string(),
            content: "Welcome".to_string(),
        }];
        let doc = sync.hydrate(&persisted);

        // Unchanged content does not re-flush, even though the persisted
        // keys differ from the canonical ones.
        assert!(sync.flush(&doc).is_none());
    }
}
