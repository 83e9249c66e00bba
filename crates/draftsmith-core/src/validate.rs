//! Brief completeness checks.
//!
//! Validation failures are data, not errors: the brief form shows one flag
//! per field and only enables generation once `is_valid` is set.

use serde::{Deserialize, Serialize};

use crate::models::brief::Brief;

/// Minimum number of non-blank point-of-view bullets a brief needs.
pub const MIN_POV_BULLETS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefValidation {
    pub problem: bool,
    pub audience: bool,
    pub pov_bullets: bool,
    pub cta: bool,
    pub tone: bool,
    pub is_valid: bool,
}

impl BriefValidation {
    /// Names of the fields that failed, in form order.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("problem", self.problem),
            ("audience", self.audience),
            ("pov_bullets", self.pov_bullets),
            ("cta", self.cta),
            ("tone", self.tone),
        ]
        .into_iter()
        .filter_map(|(name, ok)| (!ok).then_some(name))
        .collect()
    }
}

pub fn validate_brief(brief: &Brief) -> BriefValidation {
    let problem = has_text(&brief.problem);
    let audience = has_text(&brief.audience);
    let cta = has_text(&brief.cta);
    let pov_bullets =
        brief.pov_bullets.iter().filter(|b| has_text(b)).count() >= MIN_POV_BULLETS;
    // Closed enum with a default, so there is nothing to reject.
    let tone = true;

    BriefValidation {
        problem,
        audience,
        pov_bullets,
        cta,
        tone,
        is_valid: problem && audience && pov_bullets && cta && tone,
    }
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}
