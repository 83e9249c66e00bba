use std::path::PathBuf;

use draftsmith_storage::brief_draft::BriefDraftStore;
use draftsmith_storage::library::SnippetLibrary;
use draftsmith_storage::medium::FileMedium;

use crate::config::DraftsmithConfig;

/// Stores opened against the configured data directory.
pub struct AppState {
    pub library: SnippetLibrary<FileMedium>,
    pub briefs: BriefDraftStore<FileMedium>,
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn open(config: &DraftsmithConfig) -> Self {
        let medium = FileMedium::new(&config.data_dir);
        tracing::debug!(data_dir = %config.data_dir.display(), "opening stores");
        Self {
            library: SnippetLibrary::new(medium.clone()),
            briefs: BriefDraftStore::new(medium),
            export_dir: config.export_dir(),
        }
    }
}
