//! Split engine that turns headings inside descriptions into child nodes.

use std::collections::HashSet;

use super::heading::{has_heading, split_body};
use super::types::{HeadingSection, SplitReport};
use crate::error::{Result, RulebookError};
use crate::repository::NodeRepository;
use crate::slug::slugify;
use crate::types::{Node, NodeRef};

/// Engine for splitting node descriptions on headings.
///
/// Runs in passes over the whole repository until no description
/// contains a heading. Each pass takes a snapshot of the nodes that need
/// splitting and splits all of them before scanning again, so children
/// created in a pass are only looked at in the next one.
pub struct SplitEngine<'a> {
    repo: &'a mut NodeRepository,
}

impl<'a> SplitEngine<'a> {
    /// Create a new split engine over a repository.
    #[must_use]
    pub fn new(repo: &'a mut NodeRepository) -> Self {
        Self { repo }
    }

    /// Split until no description contains a heading.
    ///
    /// Every pass removes at least the shallowest headings of each
    /// candidate, so the number of passes is bounded by the number of
    /// headings in the input.
    ///
    /// # Errors
    ///
    /// Fails on the first heading whose title slugifies to an empty or
    /// already taken index.
    pub fn run(mut self) -> Result<SplitReport> {
        let mut report = SplitReport::default();

        loop {
            let candidates = self.candidates();
            if candidates.is_empty() {
                break;
            }

            let mut created = 0;
            for index in &candidates {
                created += self.split_node(index)?;
            }

            report.record_pass(candidates.len(), created);
            tracing::info!(
                pass = report.passes,
                split = candidates.len(),
                created,
                "Completed split pass"
            );
        }

        Ok(report)
    }

    /// Indices of nodes whose description contains a heading.
    fn candidates(&self) -> Vec<String> {
        self.repo
            .all()
            .iter()
            .filter(|node| node.description.as_deref().is_some_and(has_heading))
            .map(|node| node.index.clone())
            .collect()
    }

    /// Split one node at its shallowest headings.
    ///
    /// All new children are validated before the repository is touched.
    /// Returns the number of children created.
    fn split_node(&mut self, index: &str) -> Result<usize> {
        let node = self.repo.get(index)?;
        let Some(description) = node.description.clone() else {
            return Ok(0);
        };
        let Some(body) = split_body(&description) else {
            return Ok(0);
        };
        let parent = node.to_ref();

        let children = self.plan_children(&body.sections, &parent)?;

        tracing::debug!(
            index = %index,
            depth = body.depth,
            children = children.len(),
            "Splitting node on headings"
        );

        let node = self.repo.get_mut(index)?;
        node.set_description(body.head);
        for child in &children {
            node.push_child(child.to_ref());
        }

        let created = children.len();
        for child in children {
            self.repo.insert(child)?;
        }
        Ok(created)
    }

    /// Build the child nodes for each heading section.
    fn plan_children(
        &self,
        sections: &[HeadingSection<'_>],
        parent: &NodeRef,
    ) -> Result<Vec<Node>> {
        let mut taken = HashSet::new();

        sections
            .iter()
            .map(|section| {
                let index = slugify(section.title);
                if index.is_empty() {
                    return Err(RulebookError::DegenerateSlug {
                        name: section.title.to_string(),
                    });
                }
                if self.repo.contains(&index) || !taken.insert(index.clone()) {
                    return Err(RulebookError::DuplicateIndex {
                        name: section.title.to_string(),
                        index,
                    });
                }

                Ok(Node::new(section.title, index)
                    .with_description(section.body)
                    .with_parent(parent.clone()))
            })
            .collect()
    }
}

/// Split every description in the repository on headings.
///
/// # Errors
///
/// See [`SplitEngine::run`].
pub fn split_headings(repo: &mut NodeRepository) -> Result<SplitReport> {
    SplitEngine::new(repo).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo_with(description: &str) -> NodeRepository {
        let mut repo = NodeRepository::new();
        repo.insert(Node::new("Combat", "combat").with_description(description))
            .unwrap();
        repo
    }

    fn child_indices(repo: &NodeRepository, index: &str) -> Vec<String> {
        repo.get(index)
            .unwrap()
            .child_refs()
            .iter()
            .map(|c| c.index.clone())
            .collect()
    }

    #[test]
    fn test_split_single_level() {
        let mut repo = repo_with("Intro text.\n## Actions\nAction text.");
        let report = split_headings(&mut repo).unwrap();

        let combat = repo.get("combat").unwrap();
        assert_eq!(combat.description.as_deref(), Some("Intro text."));
        assert_eq!(child_indices(&repo, "combat"), vec!["actions"]);

        let actions = repo.get("actions").unwrap();
        assert_eq!(actions.description.as_deref(), Some("Action text."));
        assert_eq!(actions.url, "/api/rules/actions");
        assert_eq!(actions.parent, Some(combat.to_ref()));

        assert_eq!(
            report,
            SplitReport {
                passes: 1,
                nodes_split: 1,
                nodes_created: 1,
            }
        );
    }

    #[test]
    fn test_split_nested_levels_over_passes() {
        let mut repo = repo_with(
            "Intro.\n## Actions\nA.\n### Dash\nD.\n### Dodge\nO.\n## Movement\nM.",
        );
        let report = split_headings(&mut repo).unwrap();

        assert_eq!(child_indices(&repo, "combat"), vec!["actions", "movement"]);
        assert_eq!(child_indices(&repo, "actions"), vec!["dash", "dodge"]);
        assert_eq!(repo.get("actions").unwrap().description.as_deref(), Some("A."));
        assert_eq!(
            repo.get("dodge").unwrap().parent.as_ref().unwrap().index,
            "actions"
        );
        assert_eq!(report.passes, 2);
        assert_eq!(report.nodes_created, 4);
    }

    #[test]
    fn test_split_heading_only_child_has_no_description() {
        let mut repo = repo_with("Intro.\n## Empty\n## Full\nText.");
        split_headings(&mut repo).unwrap();

        assert!(repo.get("empty").unwrap().description.is_none());
        assert_eq!(repo.get("full").unwrap().description.as_deref(), Some("Text."));
    }

    #[test]
    fn test_split_empty_head_clears_description() {
        let mut repo = repo_with("Intro.\n# One\n1.\n# Two\n2.");
        split_headings(&mut repo).unwrap();

        assert_eq!(repo.get("combat").unwrap().description.as_deref(), Some("Intro."));

        let mut repo = NodeRepository::new();
        let mut node = Node::new("Combat", "combat");
        node.description = Some("\n# One\n1.".to_string());
        repo.insert(node).unwrap();
        split_headings(&mut repo).unwrap();
        assert!(repo.get("combat").unwrap().description.is_none());
    }

    #[test]
    fn test_split_out_of_order_depths() {
        let mut repo = repo_with("Intro.\n### Early\nE.\n## Late\nL.");
        let report = split_headings(&mut repo).unwrap();

        // Shallowest depth goes first; the earlier, deeper heading follows a pass later
        assert_eq!(child_indices(&repo, "combat"), vec!["late", "early"]);
        assert_eq!(repo.get("combat").unwrap().description.as_deref(), Some("Intro."));
        assert_eq!(report.passes, 2);
    }

    #[test]
    fn test_split_duplicate_with_existing_node() {
        let mut repo = repo_with("Intro.\n## Combat\nAgain.");
        let err = split_headings(&mut repo).unwrap_err();

        assert!(matches!(
            err,
            RulebookError::DuplicateIndex { ref name, ref index }
                if name == "Combat" && index == "combat"
        ));
    }

    #[test]
    fn test_split_duplicate_between_siblings() {
        let mut repo = repo_with("Intro.\n## Attack\nA.\n## Attack!\nB.");
        let err = split_headings(&mut repo).unwrap_err();

        assert!(matches!(
            err,
            RulebookError::DuplicateIndex { ref index, .. } if index == "attack"
        ));
        // Nothing was committed for the failed node
        assert_eq!(repo.len(), 1);
        assert!(repo.get("combat").unwrap().children.is_none());
    }

    #[test]
    fn test_split_degenerate_title() {
        let mut repo = repo_with("Intro.\n## ***\nText.");
        let err = split_headings(&mut repo).unwrap_err();

        assert!(matches!(
            err,
            RulebookError::DegenerateSlug { ref name } if name == "***"
        ));
    }

    #[test]
    fn test_split_without_headings_is_noop() {
        let mut repo = repo_with("Plain text.\n#### Not a heading");
        let report = split_headings(&mut repo).unwrap();

        assert_eq!(report, SplitReport::default());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_split_appends_to_existing_children() {
        let mut repo = NodeRepository::new();
        let mut combat = Node::new("Combat", "combat").with_description("Intro.\n## Actions\nA.");
        combat.push_child(NodeRef::new("Movement", "movement"));
        repo.insert(combat).unwrap();

        split_headings(&mut repo).unwrap();
        assert_eq!(child_indices(&repo, "combat"), vec!["movement", "actions"]);
    }
}
