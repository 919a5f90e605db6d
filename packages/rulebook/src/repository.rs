//! Flat store of all nodes, keyed by index.

use std::collections::HashMap;

use crate::error::{Result, RulebookError};
use crate::types::Node;

/// The single store of every node in the tree.
///
/// Nodes are kept in insertion order so output is deterministic; the
/// index map gives O(1) lookup by index.
#[derive(Debug, Default)]
pub struct NodeRepository {
    nodes: Vec<Node>,
    positions: HashMap<String, usize>,
}

impl NodeRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node.
    ///
    /// # Errors
    ///
    /// Returns [`RulebookError::DuplicateIndex`] if a node with the same
    /// index is already stored.
    pub fn insert(&mut self, node: Node) -> Result<()> {
        if self.positions.contains_key(&node.index) {
            return Err(RulebookError::DuplicateIndex {
                name: node.name,
                index: node.index,
            });
        }

        self.positions.insert(node.index.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Get a node by index.
    ///
    /// # Errors
    ///
    /// Returns [`RulebookError::UnknownIndex`] if no such node is stored.
    pub fn get(&self, index: &str) -> Result<&Node> {
        self.positions
            .get(index)
            .map(|&pos| &self.nodes[pos])
            .ok_or_else(|| RulebookError::UnknownIndex(index.to_string()))
    }

    /// Get a node by index for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`RulebookError::UnknownIndex`] if no such node is stored.
    pub fn get_mut(&mut self, index: &str) -> Result<&mut Node> {
        match self.positions.get(index) {
            Some(&pos) => Ok(&mut self.nodes[pos]),
            None => Err(RulebookError::UnknownIndex(index.to_string())),
        }
    }

    /// Check whether an index is taken.
    #[must_use]
    pub fn contains(&self, index: &str) -> bool {
        self.positions.contains_key(index)
    }

    /// All nodes in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the repository, returning its nodes in insertion order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Number of stored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
