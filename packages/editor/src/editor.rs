use crate::focus::FocusRegistry;
use crate::slash::{EditorKey, KeyContext, KeyOutcome, SlashMenu, SLASH_PALETTE};
use crate::upload::{UploadError, UploadOutcome, UploadTicket, UploadTracker};
use blockpress_blocks::{Block, BlockFactory, BlockKind, ImageAsset};
use tracing::debug;

/// Observer invoked with the full new block array after every mutation.
pub type ChangeCallback = Box<dyn FnMut(&[Block]) + Send>;

/// Variant-shaped partial update for [`BlockEditor::change_block`].
///
/// A patch only applies to the variant it is shaped for; `_type` and
/// `_key` are always preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockPatch {
    /// New text for `h1` / `h2` / `paragraph` / `text`.
    Content(String),
    /// New items for `bulletList` / `numberList`.
    Items(Vec<String>),
    /// New source for `code`.
    Code(String),
    /// New language for `code`.
    Language(String),
    /// New (or cleared) asset for `image`.
    Image(Option<ImageAsset>),
}

/// Stateful editor over the flat block list.
pub struct BlockEditor {
    blocks: Vec<Block>,
    factory: BlockFactory,
    menu: SlashMenu,
    focus: FocusRegistry,
    uploads: UploadTracker,
    on_change: Option<ChangeCallback>,
}

impl BlockEditor {
    /// Fresh editor holding the minimum document: one empty paragraph.
    pub fn new(ident: &str) -> Self {
        let mut factory = BlockFactory::new(ident);
        let first = factory.create_empty(BlockKind::Paragraph);

        let mut focus = FocusRegistry::new();
        if let Some(key) = first.key() {
            focus.register(key);
        }

        Self {
            blocks: vec![first],
            factory,
            menu: SlashMenu::Idle,
            focus,
            uploads: UploadTracker::new(),
            on_change: None,
        }
    }

    /// Editor over persisted blocks. Blocks without keys are re-keyed;
    /// an empty array is replaced by the minimum document.
    pub fn with_blocks(ident: &str, mut blocks: Vec<Block>) -> Self {
        let mut factory = BlockFactory::new(ident);

        if blocks.is_empty() {
            blocks.push(factory.create_empty(BlockKind::Paragraph));
        }
        factory.adopt(&mut blocks);

        let mut focus = FocusRegistry::new();
        for block in &blocks {
            if let Some(key) = block.key() {
                focus.register(key);
            }
        }

        Self {
            blocks,
            factory,
            menu: SlashMenu::Idle,
            focus,
            uploads: UploadTracker::new(),
            on_change: None,
        }
    }

    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Never true: the document floor is one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn menu(&self) -> &SlashMenu {
        &self.menu
    }

    /// Focus request for the view's next tick, if one is pending.
    pub fn take_pending_focus(&mut self) -> Option<String> {
        self.focus.take_pending()
    }

    pub fn focus_registry(&self) -> &FocusRegistry {
        &self.focus
    }

    /// Shallow-merge a patch into the block at `index`.
    ///
    /// Out-of-range indices and variant mismatches are no-ops.
    pub fn change_block(&mut self, index: usize, patch: BlockPatch) {
        let Some(block) = self.blocks.get_mut(index) else {
            debug!(index, "ignoring patch for out-of-range block");
            return;
        };

        let applied = match (&patch, block) {
            (
                BlockPatch::Content(text),
                Block::H1 { content, .. }
                | Block::H2 { content, .. }
                | Block::Paragraph { content, .. }
                | Block::Text { content, .. },
            ) => {
                *content = text.clone();
                true
            }
            (
                BlockPatch::Items(new_items),
                Block::BulletList { items, .. } | Block::NumberList { items, .. },
            ) => {
                *items = new_items.clone();
                true
            }
            (BlockPatch::Code(source), Block::Code { code, .. }) => {
                *code = source.clone();
                true
            }
            (BlockPatch::Language(lang), Block::Code { language, .. }) => {
                *language = lang.clone();
                true
            }
            (BlockPatch::Image(asset), Block::Image { image, .. }) => {
                *image = asset.clone();
                true
            }
            _ => false,
        };

        if applied {
            self.emit();
        } else {
            debug!(index, ?patch, "ignoring patch shaped for another variant");
        }
    }

    /// Insert a fresh block of `kind` immediately after `after_index`
    /// (clamped), scheduling focus onto it. Returns the new block's key.
    pub fn add_block(&mut self, kind: BlockKind, after_index: usize) -> String {
        let block = self.factory.create_empty(kind);
        let key = block.key().unwrap_or_default().to_string();

        let at = after_index.saturating_add(1).min(self.blocks.len());
        self.blocks.insert(at, block);

        self.focus.register(&key);
        self.focus.request(&key);
        self.emit();
        key
    }

    /// Remove the block at `index` unless it is the last one left.
    /// Returns whether anything was removed.
    pub fn remove_block(&mut self, index: usize) -> bool {
        if self.blocks.len() <= 1 || index >= self.blocks.len() {
            debug!(index, "ignoring remove");
            return false;
        }

        let removed = self.blocks.remove(index);
        if let Some(key) = removed.key() {
            self.focus.release(key);
            self.uploads.forget(key);
        }

        self.emit();
        true
    }

    /// Drive the slash-command state machine (and the backspace-remove
    /// shortcut) from a key press.
    pub fn handle_key(&mut self, key: EditorKey, ctx: KeyContext) -> KeyOutcome {
        match (key, self.menu) {
            (EditorKey::Slash, SlashMenu::Idle) if ctx.field_empty => {
                self.menu = SlashMenu::Open {
                    block_index: ctx.index,
                    caret: ctx.caret,
                    highlighted: 0,
                };
                KeyOutcome::MenuOpened
            }

            (EditorKey::ArrowDown, SlashMenu::Open { block_index, caret, highlighted }) => {
                let next = (highlighted + 1) % SLASH_PALETTE.len();
                self.menu = SlashMenu::Open { block_index, caret, highlighted: next };
                KeyOutcome::Highlighted(next)
            }

            (EditorKey::ArrowUp, SlashMenu::Open { block_index, caret, highlighted }) => {
                let next = (highlighted + SLASH_PALETTE.len() - 1) % SLASH_PALETTE.len();
                self.menu = SlashMenu::Open { block_index, caret, highlighted: next };
                KeyOutcome::Highlighted(next)
            }

            (EditorKey::Enter, SlashMenu::Open { block_index, highlighted, .. }) => {
                let kind = SLASH_PALETTE[highlighted];
                self.menu = SlashMenu::Idle;
                let key = self.add_block(kind, block_index);
                KeyOutcome::Inserted { key, kind }
            }

            (EditorKey::Escape, SlashMenu::Open { .. }) => {
                self.menu = SlashMenu::Idle;
                KeyOutcome::Dismissed
            }

            (EditorKey::Backspace, SlashMenu::Idle)
                if ctx.field_empty && self.blocks.len() > 1 =>
            {
                if self.remove_block(ctx.index) {
                    KeyOutcome::Removed
                } else {
                    KeyOutcome::Ignored
                }
            }

            _ => KeyOutcome::Ignored,
        }
    }

    /// Start an image read for the block at `index`. Returns a ticket
    /// only for live image blocks.
    pub fn begin_upload(&mut self, index: usize) -> Option<UploadTicket> {
        let key = match self.blocks.get(index) {
            Some(Block::Image { key, .. }) => key.clone(),
            _ => {
                debug!(index, "ignoring upload for non-image block");
                return None;
            }
        };
        Some(self.uploads.begin(&key))
    }

    /// Apply an upload completion. By now the user may have removed or
    /// replaced the target block, so the ticket is validated against
    /// current state and dropped when stale.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<ImageAsset, UploadError>,
    ) -> UploadOutcome {
        let Some(block_key) = self.uploads.redeem(&ticket) else {
            debug!("dropping stale upload completion");
            return UploadOutcome::Stale;
        };

        let target = self.blocks.iter_mut().find_map(|block| match block {
            Block::Image { key, image } if *key == block_key => Some(image),
            _ => None,
        });

        let Some(image) = target else {
            debug!(%block_key, "upload target no longer an image block");
            return UploadOutcome::Stale;
        };

        match result {
            Ok(asset) => {
                *image = Some(asset);
                self.uploads.clear_failed(&block_key);
                self.emit();
                UploadOutcome::Applied
            }
            Err(error) => {
                self.uploads.mark_failed(&block_key);
                UploadOutcome::Failed(error)
            }
        }
    }

    /// Whether the block's last image read failed (retry affordance).
    pub fn upload_failed(&self, key: &str) -> bool {
        self.uploads.has_failed(key)
    }

    fn emit(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.blocks);
        }
    }
}
