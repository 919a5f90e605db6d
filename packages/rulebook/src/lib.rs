//! Rulebook - Restructure SRD rule documents into a hierarchical tree.
//!
//! Rule documents arrive as two flat collections: categories, which
//! declare their sections, and the sections themselves. Their free-text
//! descriptions embed markdown-style headings. This crate turns them into
//! a single tree of nodes, each addressable by a unique index, by
//! splitting every heading out into a child node.
//!
//! # Example
//!
//! ```
//! use rulebook::{build_tree, CategoryRecord};
//!
//! let categories = vec![CategoryRecord {
//!     name: "Combat".to_string(),
//!     index: "combat".to_string(),
//!     url: "/api/rules/combat".to_string(),
//!     desc: "# Combat\nIntro text.\n## Actions\nAction text.".to_string(),
//!     subsections: Vec::new(),
//! }];
//!
//! let outcome = build_tree(&categories, &[]).unwrap();
//! let actions = outcome.repository.get("actions").unwrap();
//! assert_eq!(actions.description.as_deref(), Some("Action text."));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants
//! - [`types`]: Nodes, node references and input records
//! - [`error`]: Error types and Result alias
//! - [`slug`]: Index generation from display names
//! - [`repository`]: Flat node store keyed by index
//! - [`importer`]: Initial root → category → section tree
//! - [`splitting`]: Heading splitter
//! - [`verify`]: Structural checks on the finished tree
//! - [`source`]: JSON input loading
//! - [`output`]: JSON output generation
//! - [`builder`]: Main builder service
//! - [`cli`]: Command-line interface

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod importer;
pub mod output;
pub mod repository;
pub mod slug;
pub mod source;
pub mod splitting;
pub mod types;
pub mod verify;

// Re-export main functions
pub use builder::{build_from_files, build_tree, BuildOutcome};

// Re-export commonly used items
pub use error::{Result, RulebookError};
pub use repository::NodeRepository;
pub use slug::slugify;
pub use types::{CategoryRecord, Node, NodeRef, SectionRecord, SubsectionStub};
