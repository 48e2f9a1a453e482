//! # Blockpress Blocks
//!
//! The flat, portable block model shared by the whole system.
//!
//! A document is an ordered array of tagged `Block` records. The array is
//! what gets persisted by the content store, what the flat block editor
//! edits directly, and what the renderer consumes:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ editor: edits Vec<Block> in place           │
//! └─────────────────────────────────────────────┘
//!                     ↓ onChange
//! ┌─────────────────────────────────────────────┐
//! │ content store (external): JSON Block array  │
//! └─────────────────────────────────────────────┘
//!                     ↓ fetch
//! ┌─────────────────────────────────────────────┐
//! │ render: Block array → display fragments     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Every block carries a `_key` that stays stable across edits so list
//! reconciliation can track identity. Keys come from [`KeyGenerator`],
//! never from ad-hoc random strings.

mod block;
mod factory;
mod keys;

pub use block::{
    Block, BlockKind, CalloutKind, ImageAsset, ListItemKind, RichStyle, Span, DEFAULT_LANGUAGE,
};
pub use factory::BlockFactory;
pub use keys::{document_seed, KeyGenerator};
