//! Structural checks on a finished tree.

use crate::error::{Result, RulebookError};
use crate::repository::NodeRepository;
use crate::splitting::has_heading;
use crate::types::Node;

/// Verify that a repository holds a well-formed, fully split tree.
///
/// Checks that:
/// - exactly one node, the first one, has no parent;
/// - every parent reference names a stored node;
/// - following parents from any node reaches the root;
/// - no description still contains a heading.
///
/// Child references that name a missing node, or a node owned by another
/// parent, are logged as warnings.
///
/// # Errors
///
/// Returns [`RulebookError::TreeViolation`] for the first broken check.
pub fn verify_tree(repo: &NodeRepository) -> Result<()> {
    let Some(root) = repo.all().first() else {
        return Ok(());
    };

    for node in repo.all() {
        check_parent(repo, node, root)?;
        check_children(repo, node);
        check_reaches_root(repo, node, root)?;

        if node.description.as_deref().is_some_and(has_heading) {
            return Err(violation(node, "description still contains a heading"));
        }
    }

    tracing::debug!(nodes = repo.len(), "Verified tree");
    Ok(())
}

fn check_parent(repo: &NodeRepository, node: &Node, root: &Node) -> Result<()> {
    match &node.parent {
        None if node.index != root.index => Err(violation(node, "non-root node has no parent")),
        Some(_) if node.index == root.index => Err(violation(node, "root node has a parent")),
        Some(parent) if !repo.contains(&parent.index) => Err(violation(
            node,
            &format!("parent \"{}\" does not exist", parent.index),
        )),
        _ => Ok(()),
    }
}

fn check_children(repo: &NodeRepository, node: &Node) {
    for child_ref in node.child_refs() {
        // Categories may declare subsections that have no section record
        let Ok(child) = repo.get(&child_ref.index) else {
            tracing::warn!(
                index = %node.index,
                child = %child_ref.index,
                "Child reference has no matching node"
            );
            continue;
        };
        // A subsection declared twice, or a stub later claimed by a heading,
        // belongs to the last node that took it
        let parent = child.parent.as_ref().map(|p| p.index.as_str());
        if parent != Some(node.index.as_str()) {
            tracing::warn!(
                index = %node.index,
                child = %child_ref.index,
                parent = parent.unwrap_or_default(),
                "Child reference points at a node with a different parent"
            );
        }
    }
}

fn check_reaches_root(repo: &NodeRepository, node: &Node, root: &Node) -> Result<()> {
    let mut current = node;
    for _ in 0..repo.len() {
        if current.index == root.index {
            return Ok(());
        }
        let Some(parent) = &current.parent else {
            break;
        };
        current = repo.get(&parent.index)?;
    }

    if current.index == root.index {
        Ok(())
    } else {
        Err(violation(node, "parent chain does not reach the root"))
    }
}

fn violation(node: &Node, reason: &str) -> RulebookError {
    RulebookError::TreeViolation {
        index: node.index.clone(),
        reason: reason.to_string(),
    }
}
