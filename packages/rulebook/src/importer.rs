//! Hierarchy importer: builds the initial root → category → section tree.

use std::collections::HashMap;

use crate::config::{HEADING_MARKER, ROOT_INDEX, ROOT_NAME, ROOT_URL};
use crate::error::{Result, RulebookError};
use crate::repository::NodeRepository;
use crate::types::{CategoryRecord, Node, NodeRef, SectionRecord};

/// Drop a leading heading line, which repeats the record's name.
///
/// # Examples
/// ```
/// use rulebook::importer::strip_title_heading;
///
/// assert_eq!(strip_title_heading("# Combat\nIntro text."), "Intro text.");
/// assert_eq!(strip_title_heading("Plain text."), "Plain text.");
/// ```
#[must_use]
pub fn strip_title_heading(desc: &str) -> &str {
    if desc.starts_with(HEADING_MARKER) {
        desc.split_once('\n').map_or("", |(_, rest)| rest).trim()
    } else {
        desc.trim()
    }
}

/// Imports category and section records into a repository.
///
/// Categories must be imported before sections: each category records
/// which section indices it declares, and sections look their parent up
/// there.
pub struct HierarchyImporter<'a> {
    repo: &'a mut NodeRepository,
    root: NodeRef,
    section_parents: HashMap<String, NodeRef>,
}

impl<'a> HierarchyImporter<'a> {
    /// Create an importer and register the root node.
    ///
    /// # Errors
    ///
    /// Returns [`RulebookError::DuplicateIndex`] if the root index is already taken.
    pub fn new(repo: &'a mut NodeRepository) -> Result<Self> {
        let root = Node::new(ROOT_NAME, ROOT_INDEX).with_url(ROOT_URL);
        let root_ref = root.to_ref();
        repo.insert(root)?;

        Ok(Self {
            repo,
            root: root_ref,
            section_parents: HashMap::new(),
        })
    }

    /// Import category records as children of the root.
    ///
    /// # Errors
    ///
    /// Fails on an empty or duplicate index.
    pub fn import_categories(&mut self, categories: &[CategoryRecord]) -> Result<()> {
        for record in categories {
            self.import_category(record)?;
        }

        tracing::info!(count = categories.len(), "Imported categories");
        Ok(())
    }

    fn import_category(&mut self, record: &CategoryRecord) -> Result<()> {
        require_index(&record.name, &record.index)?;

        let mut node = Node::new(&record.name, &record.index)
            .with_description(strip_title_heading(&record.desc))
            .with_parent(self.root.clone());
        if !record.url.is_empty() {
            node = node.with_url(&record.url);
        }

        let node_ref = node.to_ref();
        for subsection in &record.subsections {
            node.push_child(NodeRef::new(&subsection.name, &subsection.index));
            self.section_parents
                .insert(subsection.index.clone(), node_ref.clone());
        }

        tracing::debug!(
            index = %record.index,
            subsections = record.subsections.len(),
            "Importing category"
        );
        self.repo.insert(node)?;
        self.repo.get_mut(&self.root.index)?.push_child(node_ref);
        Ok(())
    }

    /// Import section records under the categories that declare them.
    ///
    /// # Errors
    ///
    /// Fails on an empty or duplicate index, or on a section no category
    /// declares ([`RulebookError::OrphanSection`]).
    pub fn import_sections(&mut self, sections: &[SectionRecord]) -> Result<()> {
        for record in sections {
            self.import_section(record)?;
        }

        tracing::info!(count = sections.len(), "Imported sections");
        Ok(())
    }

    fn import_section(&mut self, record: &SectionRecord) -> Result<()> {
        require_index(&record.name, &record.index)?;

        let Some(parent) = self.section_parents.get(&record.index) else {
            return Err(RulebookError::OrphanSection {
                name: record.name.clone(),
                index: record.index.clone(),
            });
        };

        let node = Node::new(&record.name, &record.index)
            .with_description(strip_title_heading(&record.desc))
            .with_parent(parent.clone());

        tracing::debug!(index = %record.index, parent = %parent.index, "Importing section");
        self.repo.insert(node)
    }
}

fn require_index(name: &str, index: &str) -> Result<()> {
    if index.is_empty() {
        return Err(RulebookError::MissingIndex {
            name: name.to_string(),
        });
    }
    Ok(())
}
