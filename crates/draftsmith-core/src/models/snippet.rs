use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::brief::Brief;

/// Title used for a snippet set whose extraction produced no pull quotes.
pub const UNTITLED: &str = "Untitled";

/// Reusable assets pulled out of a blog draft by the extractor.
///
/// The extractor is asked for a fixed shape (see [`ExtractedSnippets::shape_violations`])
/// but nothing enforces it on the wire, so callers check before saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSnippets {
    #[serde(alias = "pullQuotes")]
    pub pull_quotes: Vec<String>,
    #[serde(alias = "anonymizedExamples")]
    pub anonymized_examples: Vec<String>,
    #[serde(alias = "socialHooks")]
    pub social_hooks: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

const PULL_QUOTES: RangeInclusive<usize> = 3..=3;
const ANONYMIZED_EXAMPLES: RangeInclusive<usize> = 2..=3;
const SOCIAL_HOOKS: RangeInclusive<usize> = 5..=5;
const TAGS: RangeInclusive<usize> = 3..=6;

impl ExtractedSnippets {
    /// Every count rule the candidate breaks. Empty means the shape is good.
    pub fn shape_violations(&self) -> Vec<ShapeViolation> {
        [
            ("pull_quotes", self.pull_quotes.len(), PULL_QUOTES),
            (
                "anonymized_examples",
                self.anonymized_examples.len(),
                ANONYMIZED_EXAMPLES,
            ),
            ("social_hooks", self.social_hooks.len(), SOCIAL_HOOKS),
            ("tags", self.tags.len(), TAGS),
        ]
        .into_iter()
        .filter(|(_, actual, expected)| !expected.contains(actual))
        .map(|(field, actual, expected)| ShapeViolation {
            field,
            min: *expected.start(),
            max: *expected.end(),
            actual,
        })
        .collect()
    }

    pub fn source_title(&self) -> String {
        self.pull_quotes
            .first()
            .cloned()
            .unwrap_or_else(|| UNTITLED.to_string())
    }
}

/// A list field whose length falls outside the extraction contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeViolation {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
    pub actual: usize,
}

impl fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(
                f,
                "{} must have exactly {} items, got {}",
                self.field, self.min, self.actual
            )
        } else {
            write!(
                f,
                "{} must have {}-{} items, got {}",
                self.field, self.min, self.max, self.actual
            )
        }
    }
}

/// A saved bundle of extracted assets tied to one source document.
///
/// Immutable once stored. `(draft_hash, pull_quotes)` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetSet {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    pub brief: Brief,
    pub draft_hash: String,
    pub pull_quotes: Vec<String>,
    pub anonymized_examples: Vec<String>,
    pub social_hooks: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source_title: String,
}

impl SnippetSet {
    pub fn new(
        id: Uuid,
        created_at: jiff::Timestamp,
        brief: Brief,
        draft_hash: String,
        candidate: ExtractedSnippets,
    ) -> Self {
        let source_title = candidate.source_title();
        Self {
            id,
            created_at,
            brief,
            draft_hash,
            pull_quotes: candidate.pull_quotes,
            anonymized_examples: candidate.anonymized_examples,
            social_hooks: candidate.social_hooks,
            tags: candidate.tags,
            notes: candidate.notes,
            source_title,
        }
    }

    pub fn has_dedup_key(&self, draft_hash: &str, pull_quotes: &[String]) -> bool {
        self.draft_hash == draft_hash && self.pull_quotes == pull_quotes
    }
}
