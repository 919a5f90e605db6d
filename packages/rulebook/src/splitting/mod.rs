//! Heading splitting system for rule descriptions.
//!
//! A description may embed markdown-style headings (`#`, `##`, `###` at
//! the start of a line). Splitting turns each heading of the shallowest
//! depth into a child node, repeating until no description contains a
//! heading.

mod engine;
mod heading;
mod types;

pub use engine::{split_headings, SplitEngine};
pub use heading::{has_heading, min_heading_depth, split_at_depth, split_body};
pub use types::{HeadingSection, SplitBody, SplitReport};
