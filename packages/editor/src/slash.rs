//! # Slash-Command Menu
//!
//! Typing `/` in an empty field opens a palette of insertable block
//! types. The machine has two states:
//!
//! ```text
//! Idle ──'/' in empty field──▶ MenuOpen
//!   ▲                             │
//!   ├──── Escape (no insert) ─────┤
//!   └──── Enter (insert) ─────────┘
//! ```
//!
//! While open, ArrowDown/ArrowUp cycle the highlight with wrap-around.

use blockpress_blocks::BlockKind;

/// Insertion order shown in the palette.
pub const SLASH_PALETTE: [BlockKind; 8] = [
    BlockKind::H1,
    BlockKind::H2,
    BlockKind::Paragraph,
    BlockKind::Text,
    BlockKind::BulletList,
    BlockKind::NumberList,
    BlockKind::Code,
    BlockKind::Image,
];

/// Screen position of the caret when the menu opened, for popup
/// placement by the view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Caret {
    pub x: f32,
    pub y: f32,
}

/// Slash menu state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlashMenu {
    Idle,
    Open {
        /// Block whose field the `/` was typed into.
        block_index: usize,
        /// Caret position captured at open time.
        caret: Caret,
        /// Highlighted palette entry.
        highlighted: usize,
    },
}

impl SlashMenu {
    pub fn is_open(&self) -> bool {
        matches!(self, SlashMenu::Open { .. })
    }

    pub fn highlighted_kind(&self) -> Option<BlockKind> {
        match self {
            SlashMenu::Open { highlighted, .. } => Some(SLASH_PALETTE[*highlighted]),
            SlashMenu::Idle => None,
        }
    }
}

/// Key presses the editor interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Slash,
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Backspace,
}

/// Where and on what the key landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyContext {
    /// Index of the block whose field received the key.
    pub index: usize,
    /// Whether that field is currently empty.
    pub field_empty: bool,
    /// Caret screen position at the time of the key press.
    pub caret: Caret,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Nothing to do; the view handles the key as plain text input.
    Ignored,
    /// The palette opened at the captured caret.
    MenuOpened,
    /// The highlight moved to this palette index.
    Highlighted(usize),
    /// A block was inserted; focus is pending on its key.
    Inserted { key: String, kind: BlockKind },
    /// The palette closed without inserting.
    Dismissed,
    /// The block at the context index was removed.
    Removed,
}
