//! Heading marker detection and body splitting.
//!
//! These functions only look at text; they know nothing about nodes or
//! the repository.

use crate::config::{HEADING_MARKER, HEADING_PATTERN};

use super::types::{HeadingSection, SplitBody};

/// Check whether text contains a heading marker.
#[must_use]
pub fn has_heading(text: &str) -> bool {
    HEADING_PATTERN.is_match(text)
}

/// Shallowest heading depth used anywhere in the text.
///
/// Position does not matter: a body that opens with `###` headings and
/// later uses `##` has a minimum depth of 2.
#[must_use]
pub fn min_heading_depth(text: &str) -> Option<usize> {
    HEADING_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|markers| markers.len())
        .min()
}

/// Split text at every heading of exactly `depth`.
///
/// Deeper headings stay inside the section they appear in. The text
/// before the first heading becomes the head. Titles and bodies are
/// trimmed; a heading without a following line has an empty body.
#[must_use]
pub fn split_at_depth(text: &str, depth: usize) -> SplitBody<'_> {
    let delimiter = format!("\n{} ", HEADING_MARKER.to_string().repeat(depth));
    let mut parts = text.split(delimiter.as_str());

    let head = parts.next().unwrap_or_default().trim();
    let sections = parts
        .map(|part| {
            let (title, body) = part.split_once('\n').unwrap_or((part, ""));
            HeadingSection {
                title: title.trim(),
                body: body.trim(),
            }
        })
        .collect();

    SplitBody {
        depth,
        head,
        sections,
    }
}

/// Split text at its shallowest headings, or `None` if it has none.
#[must_use]
pub fn split_body(text: &str) -> Option<SplitBody<'_>> {
    min_heading_depth(text).map(|depth| split_at_depth(text, depth))
}
