//! # Structural Repair
//!
//! Composite nodes own a fixed slot shape; hydrated or half-built
//! documents may be missing pieces of it. Repair is a pure pass run
//! after every mutation and on hydration, never as a reaction to focus
//! or selection, so healing is deterministic and independent of UI order.
//!
//! Rules are:
//! - **Deterministic**: same input, same repairs
//! - **Idempotent**: a second run over repaired output reports nothing
//! - **Minimal**: only synthesize what is structurally required

use crate::node::{Node, Slot};
use tracing::debug;

/// One healing action taken by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    /// Rule that produced this repair.
    pub rule: &'static str,
    /// Index of the repaired node (top-level order).
    pub index: usize,
    /// What was synthesized or fixed.
    pub note: String,
}

/// A single structural-repair rule over the top-level node list.
pub trait RepairRule: std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Heal in place, reporting every action taken.
    fn repair(&self, nodes: &mut Vec<Node>) -> Vec<Repair>;
}

/// Synthesize missing composite slots with placeholder text.
#[derive(Debug)]
pub struct FillCompositeSlots;

impl FillCompositeSlots {
    fn fill(slot: &mut Option<Slot>, name: &'static str, index: usize, out: &mut Vec<Repair>) {
        if slot.is_none() {
            *slot = Some(Slot::placeholder());
            out.push(Repair {
                rule: "fill-composite-slots",
                index,
                note: format!("synthesized `{name}` slot"),
            });
        }
    }
}

impl RepairRule for FillCompositeSlots {
    fn name(&self) -> &'static str {
        "fill-composite-slots"
    }

    fn repair(&self, nodes: &mut Vec<Node>) -> Vec<Repair> {
        let mut repairs = Vec::new();

        for (index, node) in nodes.iter_mut().enumerate() {
            match node {
                Node::Callout { title, content, .. } => {
                    Self::fill(title, "title", index, &mut repairs);
                    Self::fill(content, "content", index, &mut repairs);
                }
                Node::PullQuote { quote, author } => {
                    Self::fill(quote, "quote", index, &mut repairs);
                    Self::fill(author, "author", index, &mut repairs);
                }
                Node::FeatureImage { alt, caption, .. } => {
                    Self::fill(alt, "alt", index, &mut repairs);
                    Self::fill(caption, "caption", index, &mut repairs);
                }
                _ => {}
            }
        }

        repairs
    }
}

/// An empty document becomes the canonical single empty paragraph.
#[derive(Debug)]
pub struct EnsureNonEmpty;

impl RepairRule for EnsureNonEmpty {
    fn name(&self) -> &'static str {
        "ensure-non-empty"
    }

    fn repair(&self, nodes: &mut Vec<Node>) -> Vec<Repair> {
        if nodes.is_empty() {
            nodes.push(Node::empty_paragraph());
            return vec![Repair {
                rule: "ensure-non-empty",
                index: 0,
                note: "inserted empty paragraph".to_string(),
            }];
        }
        Vec::new()
    }
}

/// Clamp hydrated heading levels into `1..=3`.
#[derive(Debug)]
pub struct ClampHeadingLevels;

impl RepairRule for ClampHeadingLevels {
    fn name(&self) -> &'static str {
        "clamp-heading-levels"
    }

    fn repair(&self, nodes: &mut Vec<Node>) -> Vec<Repair> {
        let mut repairs = Vec::new();

        for (index, node) in nodes.iter_mut().enumerate() {
            if let Node::Heading { level, .. } = node {
                let clamped = (*level).clamp(1, 3);
                if clamped != *level {
                    repairs.push(Repair {
                        rule: "clamp-heading-levels",
                        index,
                        note: format!("clamped level {level} to {clamped}"),
                    });
                    *level = clamped;
                }
            }
        }

        repairs
    }
}

/// Applies every registered repair rule in order.
#[derive(Debug)]
pub struct RepairEngine {
    rules: Vec<Box<dyn RepairRule>>,
}

impl RepairEngine {
    /// Engine with the default rule set.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(EnsureNonEmpty),
                Box::new(FillCompositeSlots),
                Box::new(ClampHeadingLevels),
            ],
        }
    }

    /// Run all rules, reporting every repair made.
    pub fn run(&self, nodes: &mut Vec<Node>) -> Vec<Repair> {
        let mut repairs = Vec::new();

        for rule in &self.rules {
            let mut made = rule.repair(nodes);
            if !made.is_empty() {
                debug!(rule = rule.name(), count = made.len(), "structural repair");
            }
            repairs.append(&mut made);
        }

        repairs
    }
}

impl Default for RepairEngine {
    fn default() -> Self {
        Self::new()
    }
}
