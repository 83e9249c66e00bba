use draftsmith_core::models::brief::Brief;
use draftsmith_core::storage_keys;
use tracing::{error, info, warn};

use crate::medium::StorageMedium;
use crate::state;

/// The brief currently being written, kept between sessions.
///
/// Same failure rules as the snippet library: nothing here returns an
/// error, failures are logged.
pub struct BriefDraftStore<M> {
    medium: M,
}

impl<M: StorageMedium> BriefDraftStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Returns true if the brief was written.
    pub fn save(&self, brief: &Brief) -> bool {
        match state::save_state(&self.medium, storage_keys::BRIEF_DRAFT, brief) {
            Ok(()) => {
                info!("brief draft saved");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to save brief draft");
                false
            }
        }
    }

    pub fn load(&self) -> Option<Brief> {
        match state::load_state::<Brief>(&self.medium, storage_keys::BRIEF_DRAFT) {
            Ok(brief) => brief,
            Err(e) => {
                warn!(error = %e, "failed to load brief draft");
                None
            }
        }
    }

    pub fn clear(&self) -> bool {
        match self.medium.remove(storage_keys::BRIEF_DRAFT) {
            Ok(()) => {
                info!("brief draft cleared");
                true
            }
            Err(e) => {
                error!(error = %e, "failed to clear brief draft");
                false
            }
        }
    }
}
