//! Types for the heading splitting system.

/// A heading and the text up to the next heading of the same depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingSection<'a> {
    /// Heading text without markers.
    pub title: &'a str,

    /// Text after the heading line. May contain deeper headings.
    pub body: &'a str,
}

/// A description split at its shallowest headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBody<'a> {
    /// Heading depth the text was split at.
    pub depth: usize,

    /// Text before the first heading.
    pub head: &'a str,

    /// One entry per heading, in source order.
    pub sections: Vec<HeadingSection<'a>>,
}

/// Summary of a splitting run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Passes that split at least one node.
    pub passes: usize,

    /// Nodes whose description was split.
    pub nodes_split: usize,

    /// Nodes created from headings.
    pub nodes_created: usize,
}

impl SplitReport {
    /// Fold the counts of one pass into the report.
    pub fn record_pass(&mut self, nodes_split: usize, nodes_created: usize) {
        self.passes += 1;
        self.nodes_split += nodes_split;
        self.nodes_created += nodes_created;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_report_record_pass() {
        let mut report = SplitReport::default();
        report.record_pass(2, 5);
        report.record_pass(1, 1);

        assert_eq!(
            report,
            SplitReport {
                passes: 2,
                nodes_split: 3,
                nodes_created: 6,
            }
        );
    }
}
