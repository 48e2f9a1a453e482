//! # Blockpress Editor
//!
//! The flat block editor: an ordered list of simple blocks edited
//! directly, with a slash-command palette for inserting new block types.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ view (external): inputs, textareas, popup   │
//! └─────────────────────────────────────────────┘
//!          ↓ keys / patches        ↑ focus, menu state
//! ┌─────────────────────────────────────────────┐
//! │ editor: BlockEditor                         │
//! │  - block list + change callback             │
//! │  - slash-command state machine              │
//! │  - focus-handle registry keyed by _key      │
//! │  - image upload tickets                     │
//! └─────────────────────────────────────────────┘
//!          ↓ onChange(Vec<Block>)
//! ┌─────────────────────────────────────────────┐
//! │ content store (external)                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Invalid actions are no-ops**: deleting the last block or
//!    patching the wrong variant is silently ignored, never an error.
//! 2. **Snapshots out, never aliases**: the change callback sees the
//!    full new array after each mutation.
//! 3. **Focus is explicit state**: handles live in a registry keyed by
//!    `_key`, registered on add and released on remove.

mod editor;
mod focus;
mod slash;
mod upload;

pub use editor::{BlockEditor, BlockPatch, ChangeCallback};
pub use focus::{FocusHandle, FocusRegistry};
pub use slash::{Caret, EditorKey, KeyContext, KeyOutcome, SlashMenu, SLASH_PALETTE};
pub use upload::{UploadError, UploadOutcome, UploadTicket};

// Re-export the model types views need.
pub use blockpress_blocks::{Block, BlockKind, ImageAsset};
