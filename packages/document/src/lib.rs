//! # Blockpress Document
//!
//! The structured tree representation used while editing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: Node tree + typed mutations       │
//! │  - Validate, then apply                     │
//! │  - Version increments per mutation          │
//! │  - Structural repair after every apply      │
//! └─────────────────────────────────────────────┘
//!                     ↓ flatten (blockpress-convert)
//! ┌─────────────────────────────────────────────┐
//! │ flat Block array → content store / renderer │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is never persisted**: only its flattened projection is.
//! 2. **Mutations are validated first**: a mutation that cannot apply
//!    cleanly is rejected before the tree is touched.
//! 3. **Repair is a pure pass, not a focus side effect**: after every
//!    mutation the repair engine heals composite nodes deterministically.

mod document;
mod mutation;
mod node;
mod repair;

pub use document::{MutationOutcome, TreeDocument};
pub use mutation::{CompositeKind, Mutation, MutationError, TextKind};
pub use node::{Inline, ListItem, Mark, Node, Slot, SLOT_PLACEHOLDER};
pub use repair::{Repair, RepairEngine, RepairRule};

// Shared vocabulary with the flat model.
pub use blockpress_blocks::CalloutKind;
