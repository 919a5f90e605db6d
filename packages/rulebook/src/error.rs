//! Error types for the rulebook.
//!
//! Every variant is fatal: the build aborts on the first one and produces
//! no output. They all point at an authoring defect in the source data
//! (or an unreadable input file), never at something to work around.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the rulebook library.
#[derive(Debug, Error)]
pub enum RulebookError {
    /// Two distinct nodes resolve to the same index.
    #[error("Duplicate index \"{index}\" for \"{name}\"")]
    DuplicateIndex { name: String, index: String },

    /// A section whose index no category declares as a subsection.
    #[error("Orphan section \"{name}\" ({index}): no category declares it as a subsection")]
    OrphanSection { name: String, index: String },

    /// A heading title that slugifies to an empty string.
    #[error("Heading \"{name}\" produces an empty index")]
    DegenerateSlug { name: String },

    /// Lookup of an index that is not in the repository.
    #[error("Unknown index \"{0}\"")]
    UnknownIndex(String),

    /// Input record without an index.
    #[error("Record \"{name}\" has no index")]
    MissingIndex { name: String },

    /// A finished tree that breaks one of its structural invariants.
    #[error("Tree invariant violated at \"{index}\": {reason}")]
    TreeViolation { index: String, reason: String },

    /// Failed to read an input file.
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<RulebookError>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RulebookError {
    /// Attach the path of the file being read.
    #[must_use]
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        Self::Load {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for rulebook operations.
pub type Result<T> = std::result::Result<T, RulebookError>;
