//! Main builder service that ties all components together.

use std::path::Path;

use crate::error::Result;
use crate::importer::HierarchyImporter;
use crate::repository::NodeRepository;
use crate::source::{load_categories, load_sections};
use crate::splitting::{split_headings, SplitReport};
use crate::types::{CategoryRecord, SectionRecord};
use crate::verify::verify_tree;

/// A finished tree and how it was produced.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Every node, root first.
    pub repository: NodeRepository,

    /// Counts from the heading splitter.
    pub report: SplitReport,
}

/// Build the rule tree from category and section records.
///
/// Imports the root, categories and sections, splits every description
/// on its headings and verifies the result.
///
/// # Errors
/// Fails on the first duplicate index, orphan section, degenerate heading
/// title or broken tree invariant.
pub fn build_tree(
    categories: &[CategoryRecord],
    sections: &[SectionRecord],
) -> Result<BuildOutcome> {
    let mut repository = NodeRepository::new();

    let mut importer = HierarchyImporter::new(&mut repository)?;
    importer.import_categories(categories)?;
    importer.import_sections(sections)?;

    let report = split_headings(&mut repository)?;
    verify_tree(&repository)?;

    tracing::info!(
        nodes = repository.len(),
        passes = report.passes,
        created = report.nodes_created,
        "Built rule tree"
    );

    Ok(BuildOutcome { repository, report })
}

/// Load both input files and build the rule tree.
///
/// # Arguments
/// * `categories_path` - JSON array of category records
/// * `sections_path` - JSON array of section records
///
/// # Errors
/// See [`build_tree`]; also fails if either file cannot be read or parsed.
pub fn build_from_files(categories_path: &Path, sections_path: &Path) -> Result<BuildOutcome> {
    let categories = load_categories(categories_path)?;
    let sections = load_sections(sections_path)?;
    build_tree(&categories, &sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulebookError;
    use crate::types::SubsectionStub;

    #[test]
    fn test_build_tree_combat_scenario() {
        let categories = vec![CategoryRecord {
            name: "Combat".to_string(),
            index: "combat".to_string(),
            url: "/api/rules/combat".to_string(),
            desc: "# Combat\nIntro text.\n## Actions\nAction text.".to_string(),
            subsections: Vec::new(),
        }];

        let outcome = build_tree(&categories, &[]).unwrap();
        let repo = &outcome.repository;

        let indices: Vec<_> = repo.all().iter().map(|n| n.index.as_str()).collect();
        assert_eq!(indices, vec!["srd", "combat", "actions"]);

        let combat = repo.get("combat").unwrap();
        assert_eq!(combat.description.as_deref(), Some("Intro text."));
        assert_eq!(combat.child_refs().len(), 1);
        assert_eq!(combat.child_refs()[0].index, "actions");

        let actions = repo.get("actions").unwrap();
        assert_eq!(actions.description.as_deref(), Some("Action text."));
        assert_eq!(actions.parent.as_ref().unwrap().index, "combat");
    }

    #[test]
    fn test_build_tree_orphan_section() {
        let categories = vec![CategoryRecord {
            name: "Combat".to_string(),
            index: "combat".to_string(),
            url: String::new(),
            desc: String::new(),
            subsections: vec![SubsectionStub {
                name: "Actions".to_string(),
                index: "actions".to_string(),
            }],
        }];
        let sections = vec![SectionRecord {
            name: "Stray".to_string(),
            index: "stray".to_string(),
            desc: String::new(),
        }];

        let err = build_tree(&categories, &sections).unwrap_err();
        assert!(matches!(err, RulebookError::OrphanSection { .. }));
    }
}
