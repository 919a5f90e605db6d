//! Core data types for the rulebook.
//!
//! A [`Node`] is a single rule document in the tree. Relationships between
//! nodes are stored as [`NodeRef`] values: a copy of the related node's
//! name, index and URL taken when the link is made. A node never owns its
//! parent or children.

use serde::{Deserialize, Serialize};

use crate::config::rule_url;

/// Lightweight reference to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    /// Display name of the referenced node.
    pub name: String,

    /// Index of the referenced node.
    pub index: String,

    /// URL of the referenced node.
    pub url: String,
}

impl NodeRef {
    /// Create a reference with the rule URL derived from the index.
    #[must_use]
    pub fn new(name: impl Into<String>, index: impl Into<String>) -> Self {
        let index = index.into();
        Self {
            name: name.into(),
            url: rule_url(&index),
            index,
        }
    }
}

/// A rule document in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Display title.
    pub name: String,

    /// Unique index (slug).
    pub index: String,

    /// Rule URL.
    pub url: String,

    /// Text body, absent when empty.
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Back-reference to the parent. Only the root has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeRef>,

    /// Children in source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeRef>>,
}

impl Node {
    /// Create a node with the rule URL derived from the index.
    #[must_use]
    pub fn new(name: impl Into<String>, index: impl Into<String>) -> Self {
        let NodeRef { name, index, url } = NodeRef::new(name, index);
        Self {
            name,
            index,
            url,
            description: None,
            parent: None,
            children: None,
        }
    }

    /// Override the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the description, trimmed. Empty text leaves it absent.
    #[must_use]
    pub fn with_description(mut self, text: &str) -> Self {
        self.set_description(text);
        self
    }

    /// Set the parent reference.
    #[must_use]
    pub fn with_parent(mut self, parent: NodeRef) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Replace the description with trimmed text, or clear it when empty.
    pub fn set_description(&mut self, text: &str) {
        let trimmed = text.trim();
        self.description = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// Append a child reference, creating the list if needed.
    pub fn push_child(&mut self, child: NodeRef) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Children as a slice (empty when there are none).
    #[must_use]
    pub fn child_refs(&self) -> &[NodeRef] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Reference to this node.
    #[must_use]
    pub fn to_ref(&self) -> NodeRef {
        NodeRef {
            name: self.name.clone(),
            index: self.index.clone(),
            url: self.url.clone(),
        }
    }
}

/// Subsection stub declared by a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionStub {
    /// Display name of the section.
    pub name: String,

    /// Index of the section.
    pub index: String,
}

/// Category record from the categories input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Display name.
    pub name: String,

    /// Index.
    pub index: String,

    /// URL; the rule URL is derived from the index when empty.
    #[serde(default)]
    pub url: String,

    /// Raw description, usually starting with a heading that repeats the name.
    #[serde(default)]
    pub desc: String,

    /// Sections belonging to this category.
    #[serde(default)]
    pub subsections: Vec<SubsectionStub>,
}

/// Section record from the sections input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Display name.
    pub name: String,

    /// Index; must be declared as a subsection by some category.
    pub index: String,

    /// Raw description.
    #[serde(default)]
    pub desc: String,
}
