//! # Tree Mutations
//!
//! High-level semantic operations on the tree document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one editing gesture
//! 2. **Validated**: structural constraints are checked before anything
//!    is touched
//! 3. **Minimal**: no generic "replace subtree" escape hatch
//!
//! ## Mutation Semantics
//!
//! ### DeleteRange
//! - Removes the half-open node range `from..to`
//! - Deleting every node leaves the canonical single empty paragraph
//!   (the repair pass restores it)
//!
//! ### SetNodeKind
//! - Converts between the scalar text kinds (paragraph, heading,
//!   blockquote), carrying the inline content across
//! - Composite nodes cannot be retyped; delete and re-insert instead

use crate::node::{Inline, Mark, Node, Slot};
use blockpress_blocks::CalloutKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target kind for [`Mutation::SetNodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TextKind {
    Paragraph,
    Heading { level: u8 },
    Blockquote,
}

/// Composite node kind for [`Mutation::InsertComposite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CompositeKind {
    Callout { callout: CalloutKind },
    PullQuote,
    FeatureImage,
}

/// Semantic mutations on a tree document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Insert a node at `index`. Out-of-range indices are errors, not
    /// clamped; the caller addresses a real position.
    InsertNode { index: usize, node: Node },

    /// Delete the half-open node range `from..to`.
    DeleteRange { from: usize, to: usize },

    /// Replace the inline text of the node at `index` with a single
    /// unmarked run.
    UpdateText { index: usize, text: String },

    /// Toggle a mark across every inline run of the node at `index`:
    /// if every run carries it, remove it everywhere; otherwise add it
    /// everywhere.
    ToggleMark { index: usize, mark: Mark },

    /// Convert the node at `index` to another scalar text kind.
    SetNodeKind { index: usize, target: TextKind },

    /// Insert a composite node at `index` with healed default slots.
    InsertComposite { index: usize, composite: CompositeKind },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("node index {index} out of range (document has {len} nodes)")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid range {from}..{to} (document has {len} nodes)")]
    InvalidRange { from: usize, to: usize, len: usize },

    #[error("node at {index} is a {found} node, expected {expected}")]
    KindMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("heading level {0} is out of range (1..=3)")]
    BadHeadingLevel(u8),
}

fn kind_name(node: &Node) -> &'static str {
    match node {
        Node::Paragraph { .. } => "paragraph",
        Node::Heading { .. } => "heading",
        Node::Blockquote { .. } => "blockquote",
        Node::BulletList { .. } => "bulletList",
        Node::OrderedList { .. } => "orderedList",
        Node::CodeBlock { .. } => "codeBlock",
        Node::Callout { .. } => "calloutBlock",
        Node::PullQuote { .. } => "pullQuoteBlock",
        Node::FeatureImage { .. } => "featureImageBlock",
        Node::Unknown => "unknown",
    }
}

impl Mutation {
    /// Apply the mutation to the node list, validating first.
    pub fn apply(&self, nodes: &mut Vec<Node>) -> Result<(), MutationError> {
        self.validate(nodes)?;

        match self {
            Mutation::InsertNode { index, node } => {
                nodes.insert(*index, node.clone());
            }

            Mutation::DeleteRange { from, to } => {
                nodes.drain(*from..*to);
            }

            Mutation::UpdateText { index, text } => {
                let content = nodes[*index]
                    .inline_content_mut()
                    .expect("validated as text-bearing");
                *content = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Inline::text(text.clone())]
                };
            }

            Mutation::ToggleMark { index, mark } => {
                let content = nodes[*index]
                    .inline_content_mut()
                    .expect("validated as text-bearing");
                let everywhere = content.iter().all(|run| run.marks.contains(mark));
                for run in content.iter_mut() {
                    if everywhere {
                        run.marks.retain(|m| m != mark);
                    } else if !run.marks.contains(mark) {
                        run.marks.push(*mark);
                    }
                }
            }

            Mutation::SetNodeKind { index, target } => {
                let node = &mut nodes[*index];
                let content = take_inline(node);
                *node = match target {
                    TextKind::Paragraph => Node::Paragraph { content },
                    TextKind::Heading { level } => Node::Heading {
                        level: *level,
                        content,
                    },
                    TextKind::Blockquote => Node::Blockquote {
                        content: vec![Node::Paragraph { content }],
                    },
                };
            }

            Mutation::InsertComposite { index, composite } => {
                let node = match composite {
                    CompositeKind::Callout { callout } => Node::callout(*callout),
                    CompositeKind::PullQuote => Node::pull_quote(),
                    CompositeKind::FeatureImage => Node::FeatureImage {
                        image_url: String::new(),
                        full_width: true,
                        alt: Some(Slot::placeholder()),
                        caption: Some(Slot::placeholder()),
                    },
                };
                nodes.insert(*index, node);
            }
        }

        Ok(())
    }

    /// Validate without applying.
    pub fn validate(&self, nodes: &[Node]) -> Result<(), MutationError> {
        let len = nodes.len();

        match self {
            Mutation::InsertNode { index, .. } | Mutation::InsertComposite { index, .. } => {
                if *index > len {
                    return Err(MutationError::OutOfRange { index: *index, len });
                }
                Ok(())
            }

            Mutation::DeleteRange { from, to } => {
                if from > to || *to > len {
                    return Err(MutationError::InvalidRange {
                        from: *from,
                        to: *to,
                        len,
                    });
                }
                Ok(())
            }

            Mutation::UpdateText { index, .. } | Mutation::ToggleMark { index, .. } => {
                let node = nodes
                    .get(*index)
                    .ok_or(MutationError::OutOfRange { index: *index, len })?;
                if node.inline_content().is_none() {
                    return Err(MutationError::KindMismatch {
                        index: *index,
                        expected: "a text-bearing node",
                        found: kind_name(node),
                    });
                }
                Ok(())
            }

            Mutation::SetNodeKind { index, target } => {
                if let TextKind::Heading { level } = target {
                    if !(1..=3).contains(level) {
                        return Err(MutationError::BadHeadingLevel(*level));
                    }
                }

                let node = nodes
                    .get(*index)
                    .ok_or(MutationError::OutOfRange { index: *index, len })?;
                match node {
                    Node::Paragraph { .. } | Node::Heading { .. } | Node::Blockquote { .. } => {
                        Ok(())
                    }
                    other => Err(MutationError::KindMismatch {
                        index: *index,
                        expected: "paragraph, heading or blockquote",
                        found: kind_name(other),
                    }),
                }
            }
        }
    }
}

/// Pull the inline content out of a scalar text node, merging one level
/// of blockquote nesting.
fn take_inline(node: &mut Node) -> Vec<Inline> {
    match node {
        Node::Paragraph { content } | Node::Heading { content, .. } => std::mem::take(content),
        Node::Blockquote { content } => {
            let mut merged = Vec::new();
            for child in content.iter_mut() {
                if let Some(inner) = child.inline_content_mut() {
                    merged.append(inner);
                }
            }
            merged
        }
        _ => Vec::new(),
    }
}
