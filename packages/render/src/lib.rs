//! # Blockpress Render
//!
//! Projects the flat block array to display fragments.
//!
//! Dispatch is a registry keyed by `_type` tag and validated at startup:
//! a declared tag without a renderer is a developer error surfaced
//! immediately, while an unknown tag at render time produces a visible
//! "block type not found" fragment instead of crashing, so persisted
//! legacy data keeps rendering.

mod fragment;
mod registry;
mod renderers;

pub use fragment::Fragment;
pub use registry::{BlockRenderer, RegistryError, RendererRegistry};
