//! Configuration constants for the rulebook.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix of every rule URL.
pub const RULES_URL_PREFIX: &str = "/api/rules/";

/// Display name of the root node.
pub const ROOT_NAME: &str = "System Reference Document 5.1";

/// Index of the root node.
pub const ROOT_INDEX: &str = "srd";

/// Well-known URL of the root node.
pub const ROOT_URL: &str = "/api/rules/srd";

/// Character that introduces a heading line.
pub const HEADING_MARKER: char = '#';

/// Deepest heading level that is split into child nodes.
///
/// Lines with more marker characters are plain text.
pub const MAX_HEADING_DEPTH: usize = 3;

/// Default path of the categories input file.
pub const DEFAULT_CATEGORIES_PATH: &str = "src/5e-SRD-Rules.json";

/// Default path of the sections input file.
pub const DEFAULT_SECTIONS_PATH: &str = "src/5e-SRD-Rule-Sections.json";

/// Heading marker: a line break followed by 1 to [`MAX_HEADING_DEPTH`] markers and a space.
///
/// The marker run is captured as group 1; its length is the heading depth.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub static HEADING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\n(#{{1,{MAX_HEADING_DEPTH}}}) ")).expect("valid regex")
});

/// Build the rule URL for an index.
///
/// # Examples
/// ```
/// use rulebook::config::rule_url;
///
/// assert_eq!(rule_url("combat"), "/api/rules/combat");
/// ```
#[must_use]
pub fn rule_url(index: &str) -> String {
    format!("{RULES_URL_PREFIX}{index}")
}
