//! The snippet library.
//!
//! The whole collection is one JSON array stored under a single key. Every
//! mutation loads the array, changes it, and writes it back as one unit.
//!
//! Storage failures never reach the caller as errors. Reads that fail
//! degrade to an empty library; writes that fail are logged and the
//! operation does nothing. Callers that need to know whether a write landed
//! look at the return value.

use std::collections::BTreeSet;

use draftsmith_core::hash::fingerprint;
use draftsmith_core::models::brief::Brief;
use draftsmith_core::models::snippet::{ExtractedSnippets, SnippetSet};
use draftsmith_core::storage_keys;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::medium::StorageMedium;
use crate::state;

/// Result of [`SnippetLibrary::save_unique`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(SnippetSet),
    /// A set with the same draft hash and pull quotes is already stored.
    /// Nothing was written.
    Duplicate,
    /// The medium refused the write. Nothing was stored; retrying is safe.
    NotPersisted,
}

pub struct SnippetLibrary<M> {
    medium: M,
    key: String,
}

impl<M: StorageMedium> SnippetLibrary<M> {
    pub fn new(medium: M) -> Self {
        Self::with_key(medium, storage_keys::SNIPPET_LIBRARY)
    }

    pub fn with_key(medium: M, key: impl Into<String>) -> Self {
        Self {
            medium,
            key: key.into(),
        }
    }

    /// Every stored set, oldest first.
    pub fn list(&self) -> Vec<SnippetSet> {
        match self.load() {
            Ok(sets) => sets,
            Err(e) => {
                warn!(key = %self.key, error = %e, "snippet library unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<SnippetSet> {
        self.list().into_iter().find(|set| set.id == id)
    }

    /// True if a stored set has this draft hash and exactly these pull
    /// quotes, in this order.
    pub fn is_duplicate(&self, draft_hash: &str, pull_quotes: &[String]) -> bool {
        self.list()
            .iter()
            .any(|set| set.has_dedup_key(draft_hash, pull_quotes))
    }

    /// Append a new set built from `candidate`.
    ///
    /// Does not check for duplicates; call [`Self::is_duplicate`] first or
    /// use [`Self::save_unique`]. Returns the stored set, or `None` if the
    /// medium could not be written.
    pub fn save(
        &self,
        candidate: ExtractedSnippets,
        source_text: &str,
        brief: &Brief,
    ) -> Option<SnippetSet> {
        let mut sets = self.load_for_write()?;
        let set = new_set(candidate, source_text, brief);
        sets.push(set.clone());
        self.persist(&sets).then_some(set)
    }

    /// Duplicate check and insert against one loaded copy of the library.
    pub fn save_unique(
        &self,
        candidate: ExtractedSnippets,
        source_text: &str,
        brief: &Brief,
    ) -> SaveOutcome {
        let Some(mut sets) = self.load_for_write() else {
            return SaveOutcome::NotPersisted;
        };

        let draft_hash = fingerprint(source_text);
        if sets
            .iter()
            .any(|set| set.has_dedup_key(&draft_hash, &candidate.pull_quotes))
        {
            info!(draft_hash = %draft_hash, "snippet set already in library");
            return SaveOutcome::Duplicate;
        }

        let set = new_set(candidate, source_text, brief);
        sets.push(set.clone());
        if self.persist(&sets) {
            SaveOutcome::Saved(set)
        } else {
            SaveOutcome::NotPersisted
        }
    }

    /// Remove the set with `id`. Returns true if a set was removed and the
    /// library rewritten; an unknown id is a no-op.
    pub fn delete(&self, id: Uuid) -> bool {
        let Some(mut sets) = self.load_for_write() else {
            return false;
        };
        let before = sets.len();
        sets.retain(|set| set.id != id);
        if sets.len() == before {
            debug!(%id, "delete of unknown snippet set ignored");
            return false;
        }
        self.persist(&sets)
    }

    /// Sets matching both the search term and the tag filter.
    pub fn search(&self, term: &str, tags: &[String]) -> Vec<SnippetSet> {
        self.list()
            .into_iter()
            .filter(|set| matches_filter(set, term, tags))
            .collect()
    }

    /// Every distinct tag in the library, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        self.list()
            .into_iter()
            .flat_map(|set| set.tags)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn load(&self) -> Result<Vec<SnippetSet>, StorageError> {
        let sets = state::load_state::<Vec<SnippetSet>>(&self.medium, &self.key)?;
        let sets = sets.unwrap_or_default();
        debug!(key = %self.key, count = sets.len(), "snippet library loaded");
        Ok(sets)
    }

    /// Like [`Self::load`], but refuses to hand back an empty library when
    /// the medium itself failed, so a write cannot clobber records we could
    /// not read. A corrupt record is replaced.
    fn load_for_write(&self) -> Option<Vec<SnippetSet>> {
        match self.load() {
            Ok(sets) => Some(sets),
            Err(StorageError::Serialization(e)) => {
                warn!(key = %self.key, error = %e, "snippet library corrupt, it will be replaced");
                Some(Vec::new())
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "snippet library unavailable, write skipped");
                None
            }
        }
    }

    fn persist(&self, sets: &[SnippetSet]) -> bool {
        match state::save_state(&self.medium, &self.key, &sets) {
            Ok(()) => {
                info!(key = %self.key, count = sets.len(), "snippet library saved");
                true
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to save snippet library");
                false
            }
        }
    }
}

fn new_set(candidate: ExtractedSnippets, source_text: &str, brief: &Brief) -> SnippetSet {
    SnippetSet::new(
        Uuid::new_v4(),
        jiff::Timestamp::now(),
        brief.clone(),
        fingerprint(source_text),
        candidate,
    )
}

/// Library filter: `term` matches the title or any tag (case-insensitive
/// substring), and the set carries at least one of `tags`. Empty criteria
/// match everything.
pub fn matches_filter(set: &SnippetSet, term: &str, tags: &[String]) -> bool {
    let needle = term.to_lowercase();
    let matches_term = needle.is_empty()
        || set.source_title.to_lowercase().contains(&needle)
        || set
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle));

    let matches_tags = tags.is_empty() || tags.iter().any(|tag| set.tags.contains(tag));

    matches_term && matches_tags
}
