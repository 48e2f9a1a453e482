//! # Tree Document Handle
//!
//! A TreeDocument is the in-memory editing representation: an ordered
//! list of top-level nodes plus a version counter.
//!
//! ## Lifecycle
//!
//! ```text
//! New → (hydrate) → Mutate* → Flatten on blur
//!  ↓                  ↓            ↓
//! empty ¶        version++    Block array
//! ```
//!
//! The tree itself is never persisted; only the flattened projection
//! handed to the owning field's update callback is.

use crate::mutation::{Mutation, MutationError};
use crate::node::Node;
use crate::repair::{Repair, RepairEngine};
use serde::{Deserialize, Serialize};

/// Editable tree document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeDocument {
    nodes: Vec<Node>,

    /// Increments on each applied mutation. Not part of the wire shape.
    #[serde(skip)]
    version: u64,
}

/// Result of applying a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    /// New version number.
    pub version: u64,

    /// Structural repairs the post-mutation pass had to make.
    pub repairs: Vec<Repair>,
}

impl TreeDocument {
    /// The canonical empty document: a single empty paragraph.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::empty_paragraph()],
            version: 0,
        }
    }

    /// Build from hydrated nodes, repairing structure up front.
    pub fn from_nodes(mut nodes: Vec<Node>) -> Self {
        RepairEngine::new().run(&mut nodes);
        Self { nodes, version: 0 }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false after construction; repair keeps one node minimum.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation, then run the structural-repair pass.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, MutationError> {
        mutation.apply(&mut self.nodes)?;
        self.version += 1;

        let repairs = RepairEngine::new().run(&mut self.nodes);

        Ok(MutationOutcome {
            version: self.version,
            repairs,
        })
    }
}

impl Default for TreeDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::{CompositeKind, TextKind};
    use crate::node::SLOT_PLACEHOLDER;
    use blockpress_blocks::CalloutKind;

    #[test]
    fn test_new_document_is_single_empty_paragraph() {
        let doc = TreeDocument::new();
        assert_eq!(doc.nodes(), &[Node::empty_paragraph()]);
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn test_version_increments_per_mutation() {
        let mut doc = TreeDocument::new();

        doc.apply(Mutation::UpdateText { index: 0, text: "hi".to_string() })
            .unwrap();
        assert_eq!(doc.version(), 1);

        doc.apply(Mutation::InsertNode { index: 1, node: Node::paragraph("more") })
            .unwrap();
        assert_eq!(doc.version(), 2);
    }

    #[test]
    fn test_failed_mutation_leaves_document_untouched() {
        let mut doc = TreeDocument::new();
        let before = doc.clone();

        let result = doc.apply(Mutation::UpdateText { index: 9, text: "x".to_string() });
        assert!(result.is_err());
        assert_eq!(doc, before);
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn test_delete_everything_restores_empty_paragraph() {
        let mut doc = TreeDocument::from_nodes(vec![
            Node::paragraph("a"),
            Node::paragraph("b"),
        ]);

        let outcome = doc.apply(Mutation::DeleteRange { from: 0, to: 2 }).unwrap();
        assert_eq!(doc.nodes(), &[Node::empty_paragraph()]);
        assert_eq!(outcome.repairs.len(), 1);
    }

    #[test]
    fn test_insert_composite_arrives_healed() {
        let mut doc = TreeDocument::new();

        let outcome = doc
            .apply(Mutation::InsertComposite {
                index: 1,
                composite: CompositeKind::Callout { callout: CalloutKind::Error },
            })
            .unwrap();

        // Healed at construction, nothing left for the repair pass.
        assert!(outcome.repairs.is_empty());
        match &doc.nodes()[1] {
            Node::Callout { kind, title, content } => {
                assert_eq!(*kind, CalloutKind::Error);
                assert_eq!(title.as_ref().unwrap().first_text(), Some(SLOT_PLACEHOLDER));
                assert_eq!(content.as_ref().unwrap().first_text(), Some(SLOT_PLACEHOLDER));
            }
            other => panic!("expected callout, got {other:?}"),
        }
    }

    #[test]
    fn test_from_nodes_repairs_hydrated_malformations() {
        let doc = TreeDocument::from_nodes(vec![Node::PullQuote { quote: None, author: None }]);

        match &doc.nodes()[0] {
            Node::PullQuote { quote, author } => {
                assert!(quote.is_some());
                assert!(author.is_some());
            }
            other => panic!("expected pull quote, got {other:?}"),
        }
    }

    #[test]
    fn test_set_node_kind_round_trip() {
        let mut doc = TreeDocument::from_nodes(vec![Node::paragraph("Talk to us")]);

        doc.apply(Mutation::SetNodeKind { index: 0, target: TextKind::Heading { level: 1 } })
            .unwrap();
        assert_eq!(doc.nodes()[0], Node::heading(1, "Talk to us"));

        doc.apply(Mutation::SetNodeKind { index: 0, target: TextKind::Paragraph })
            .unwrap();
        assert_eq!(doc.nodes()[0], Node::paragraph("Talk to us"));
    }
}
