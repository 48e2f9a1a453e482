use crate::fragment::Fragment;
use crate::renderers;
use blockpress_blocks::Block;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Renders one block type to a display fragment.
pub trait BlockRenderer: std::fmt::Debug {
    fn render(&self, block: &Block) -> Fragment;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no renderer registered for block type `{0}`")]
    MissingRenderer(String),
}

/// Dispatch table from `_type` tag to renderer.
///
/// Coverage of the declared tags is checked once at startup via
/// [`RendererRegistry::validate`]; after that, rendering is total: a
/// tag that still has no renderer (unknown or legacy) falls back to a
/// visible [`Fragment::Missing`].
#[derive(Debug)]
pub struct RendererRegistry {
    renderers: HashMap<&'static str, Box<dyn BlockRenderer>>,
}

impl RendererRegistry {
    /// Registry with no renderers; callers register their own set.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Registry covering every declared block type with the built-in
    /// renderers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        renderers::register_defaults(&mut registry);
        registry
    }

    /// Built-in registry, validated. The startup entry point.
    pub fn validated() -> Result<Self, RegistryError> {
        let registry = Self::with_defaults();
        registry.validate()?;
        Ok(registry)
    }

    pub fn register(&mut self, tag: &'static str, renderer: Box<dyn BlockRenderer>) {
        self.renderers.insert(tag, renderer);
    }

    pub fn unregister(&mut self, tag: &str) -> Option<Box<dyn BlockRenderer>> {
        self.renderers.remove(tag)
    }

    /// Every declared tag must have a renderer.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for tag in Block::DECLARED_TAGS {
            if !self.renderers.contains_key(tag) {
                return Err(RegistryError::MissingRenderer(tag.to_string()));
            }
        }
        Ok(())
    }

    /// Render one block; unknown tags fall back to a visible marker.
    pub fn render(&self, block: &Block) -> Fragment {
        let tag = block.type_tag();
        match self.renderers.get(tag) {
            Some(renderer) => renderer.render(block),
            None => {
                warn!(tag, "no renderer for block type");
                Fragment::missing(tag)
            }
        }
    }

    /// Render a whole document in order.
    pub fn render_all(&self, blocks: &[Block]) -> Vec<Fragment> {
        blocks.iter().map(|block| self.render(block)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_declared_tags() {
        assert!(RendererRegistry::validated().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_tag() {
        let mut registry = RendererRegistry::with_defaults();
        registry.unregister("calloutBlock");

        assert_eq!(
            registry.validate(),
            Err(RegistryError::MissingRenderer("calloutBlock".to_string()))
        );
    }

    #[test]
    fn test_unknown_block_renders_visible_fallback() {
        let registry = RendererRegistry::with_defaults();
        let fragment = registry.render(&Block::Unknown);

        assert_eq!(fragment, Fragment::missing("unknown"));
    }

    #[test]
    fn test_unregistered_tag_falls_back_instead_of_crashing() {
        let registry = RendererRegistry::empty();
        let block = Block::H1 {
            key: "k".to_string(),
            content: "Title".to_string(),
        };

        assert_eq!(registry.render(&block), Fragment::missing("h1"));
    }
}
