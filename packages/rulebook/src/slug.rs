//! Index generation from display names.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for slug generation - matches everything but ASCII letters, digits, spaces and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_IGNORED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 -]").expect("valid regex"));

/// Generate an index from a display name.
///
/// Drops every character that is not an ASCII letter, digit, space or
/// dash, turns each space into a dash and lowercases the rest. The result
/// is empty for names without any kept character; callers must reject it.
///
/// # Examples
/// ```
/// use rulebook::slug::slugify;
///
/// assert_eq!(slugify("Actions in Combat"), "actions-in-combat");
/// assert_eq!(slugify("Saving Throws (Optional)"), "saving-throws-optional");
/// assert_eq!(slugify("???"), "");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    SLUG_IGNORED
        .replace_all(name, "")
        .replace(' ', "-")
        .to_ascii_lowercase()
}
