use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Why an image read failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("failed to read image data: {0}")]
    Read(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// Claim on an in-flight image read, bound to the target block's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    pub(crate) id: u64,
    pub(crate) block_key: String,
}

impl UploadTicket {
    pub fn block_key(&self) -> &str {
        &self.block_key
    }
}

/// What happened when an upload completion arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The asset was written into the target block.
    Applied,
    /// The read failed; the block is unchanged and flagged for retry.
    Failed(UploadError),
    /// The ticket no longer matches a live image block; dropped.
    Stale,
}

/// Tracks in-flight reads and per-block failures.
///
/// Completions are fire-and-forget from the host's side: by the time one
/// arrives the user may have removed or retyped the block, so every
/// completion is validated against current editor state before anything
/// is written.
#[derive(Debug, Default)]
pub struct UploadTracker {
    next_id: u64,
    pending: HashMap<u64, String>,
    failed: HashSet<String>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, block_key: &str) -> UploadTicket {
        self.next_id += 1;
        self.pending.insert(self.next_id, block_key.to_string());
        self.failed.remove(block_key);
        UploadTicket {
            id: self.next_id,
            block_key: block_key.to_string(),
        }
    }

    /// Redeem the ticket. Returns the target block key if it was still
    /// outstanding.
    pub fn redeem(&mut self, ticket: &UploadTicket) -> Option<String> {
        self.pending.remove(&ticket.id)
    }

    pub fn mark_failed(&mut self, block_key: &str) {
        self.failed.insert(block_key.to_string());
    }

    pub fn clear_failed(&mut self, block_key: &str) {
        self.failed.remove(block_key);
    }

    /// Whether the block's last read failed (drives a retry affordance).
    pub fn has_failed(&self, block_key: &str) -> bool {
        self.failed.contains(block_key)
    }

    /// Forget everything about a removed block.
    pub fn forget(&mut self, block_key: &str) {
        self.pending.retain(|_, key| key != block_key);
        self.failed.remove(block_key);
    }
}
