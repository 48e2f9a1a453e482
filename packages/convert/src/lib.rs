//! # Blockpress Convert
//!
//! Bidirectional mapping between the tree document and the flat block
//! array.
//!
//! ```text
//! TreeDocument ──flatten──▶ Vec<Block> ──▶ content store
//!      ▲                                       │
//!      └───────────unflatten◀──────────────────┘
//! ```
//!
//! The two directions are best-effort inverses, not a bit-exact round
//! trip: flattening drops inline marks on headings and paragraphs and
//! collapses code blocks to a single marked span. What IS guaranteed is
//! stability after one full cycle:
//!
//! ```text
//! flatten(unflatten(flatten(t))) == flatten(t)
//! ```
//!
//! Conversion is total. Unknown tree kinds flatten to nothing; unknown
//! block types unflatten to an empty paragraph holding their slot.

mod flatten;
mod sync;
mod unflatten;

pub use flatten::Flattener;
pub use sync::DocumentSync;
pub use unflatten::unflatten;
