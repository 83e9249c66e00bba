//! Splits one generated document into its named sections.
//!
//! This is a line-oriented pattern match, not a markdown parser. A section
//! starts at any line beginning with `## ` and runs to the next such line.
//! The heading text decides where the body goes:
//!
//! | heading contains           | field           |
//! |----------------------------|-----------------|
//! | `Blog Draft`               | `blog_draft`    |
//! | `LinkedIn Post`            | `linkedin_post` |
//! | `Footnotes` or `Sources`   | `footnotes`     |
//!
//! Matching is case-sensitive and the first row that matches wins. Text
//! before the first heading and sections with other headings are dropped.
//! If a heading appears twice, the later section wins.

use crate::models::output::ParsedOutput;

/// Level-2 heading marker, matched at the start of a line.
pub const HEADING_MARKER: &str = "## ";

pub const BLOG_DRAFT: &str = "Blog Draft";
pub const LINKEDIN_POST: &str = "LinkedIn Post";
pub const FOOTNOTES: &str = "Footnotes";
pub const SOURCES: &str = "Sources";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    BlogDraft,
    LinkedInPost,
    Footnotes,
}

impl Section {
    fn for_heading(heading: &str) -> Option<Self> {
        if heading.contains(BLOG_DRAFT) {
            Some(Section::BlogDraft)
        } else if heading.contains(LINKEDIN_POST) {
            Some(Section::LinkedInPost)
        } else if heading.contains(FOOTNOTES) || heading.contains(SOURCES) {
            Some(Section::Footnotes)
        } else {
            None
        }
    }
}

/// Parse a generated document. Never fails; unrecognized input yields an
/// all-empty [`ParsedOutput`].
pub fn parse_output(raw: &str) -> ParsedOutput {
    let mut parsed = ParsedOutput::default();

    for segment in split_segments(raw) {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some(heading_line) = trimmed.strip_prefix(HEADING_MARKER) else {
            // Preamble before the first heading.
            continue;
        };

        let (heading, body) = match heading_line.split_once('\n') {
            Some((heading, body)) => (heading, body),
            None => (heading_line, ""),
        };

        let Some(section) = Section::for_heading(heading) else {
            continue;
        };
        let body = body.trim().to_string();
        match section {
            Section::BlogDraft => parsed.blog_draft = body,
            Section::LinkedInPost => parsed.linkedin_post = body,
            Section::Footnotes => parsed.footnotes = body,
        }
    }

    parsed
}

/// Cut `raw` before every line that starts with the heading marker. The
/// pieces are contiguous and concatenate back to `raw`.
fn split_segments(raw: &str) -> Vec<&str> {
    let mut starts = vec![0];
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if offset > 0 && line.starts_with(HEADING_MARKER) {
            starts.push(offset);
        }
        offset += line.len();
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw.len());
            &raw[start..end]
        })
        .collect()
}
