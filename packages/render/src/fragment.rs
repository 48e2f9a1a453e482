use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display fragment produced for one block (or part of one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Fragment {
    /// Host element (div, h1, figure, ...).
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        attributes: HashMap<String, String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Fragment>,
    },

    /// Text node.
    Text { content: String },

    /// Visible fallback for a block type with no renderer.
    Missing { type_tag: String },
}

impl Fragment {
    pub fn element(tag: impl Into<String>) -> Self {
        Fragment::Element {
            tag: tag.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Fragment::Text {
            content: content.into(),
        }
    }

    pub fn missing(type_tag: impl Into<String>) -> Self {
        Fragment::Missing {
            type_tag: type_tag.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Fragment::Element { ref mut attributes, .. } = self {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: Fragment) -> Self {
        if let Fragment::Element { ref mut children, .. } = self {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Fragment>) -> Self {
        if let Fragment::Element { ref mut children, .. } = self {
            children.extend(new_children);
        }
        self
    }

    /// Attribute value, for elements.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Fragment::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    /// Concatenated text content of the subtree.
    pub fn plain_text(&self) -> String {
        match self {
            Fragment::Text { content } => content.clone(),
            Fragment::Element { children, .. } => {
                children.iter().map(Fragment::plain_text).collect()
            }
            Fragment::Missing { .. } => String::new(),
        }
    }
}
