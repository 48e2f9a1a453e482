use std::collections::HashMap;

/// Focus target owned by the editor, one per live block.
///
/// The view resolves a handle to its concrete input element; the editor
/// only tracks identity and lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusHandle {
    key: String,
}

impl FocusHandle {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Map from block `_key` to focus handle, plus the at-most-one pending
/// focus request the view consumes on its next tick.
#[derive(Debug, Default)]
pub struct FocusRegistry {
    handles: HashMap<String, FocusHandle>,
    pending: Option<String>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.handles.insert(key.clone(), FocusHandle { key });
    }

    /// Drop the handle; a pending request for it is cancelled too.
    pub fn release(&mut self, key: &str) {
        self.handles.remove(key);
        if self.pending.as_deref() == Some(key) {
            self.pending = None;
        }
    }

    /// Ask the view to focus this block on its next tick. Unregistered
    /// keys are ignored.
    pub fn request(&mut self, key: &str) {
        if self.handles.contains_key(key) {
            self.pending = Some(key.to_string());
        }
    }

    /// Consume the pending focus request.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }

    pub fn handle(&self, key: &str) -> Option<&FocusHandle> {
        self.handles.get(key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_registration() {
        let mut registry = FocusRegistry::new();
        registry.request("ghost");
        assert_eq!(registry.take_pending(), None);

        registry.register("a-1");
        registry.request("a-1");
        assert_eq!(registry.take_pending(), Some("a-1".to_string()));
        assert_eq!(registry.take_pending(), None);
    }

    #[test]
    fn test_release_cancels_pending() {
        let mut registry = FocusRegistry::new();
        registry.register("a-1");
        registry.request("a-1");
        registry.release("a-1");

        assert_eq!(registry.take_pending(), None);
        assert!(registry.handle("a-1").is_none());
    }
}
