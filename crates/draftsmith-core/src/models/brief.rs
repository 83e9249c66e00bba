use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured input describing the content to generate.
///
/// Every field may be missing on input: a brief is stored and validated while
/// it is still being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub audience: String,
    /// Supporting points, kept in the order they were entered.
    #[serde(default, alias = "povBullets")]
    pub pov_bullets: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub tone: Tone,
}

impl Brief {
    /// Copy of the brief with blank bullets and blank evidence lines removed.
    ///
    /// The brief form keeps empty rows around while the user is typing; this
    /// is the shape handed downstream once the brief is complete.
    pub fn normalized(&self) -> Brief {
        Brief {
            pov_bullets: non_blank(&self.pov_bullets),
            evidence: non_blank(&self.evidence),
            ..self.clone()
        }
    }
}

fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    #[serde(alias = "Professional")]
    Professional,
    #[serde(alias = "Conversational")]
    Conversational,
    #[serde(alias = "Thought Leadership")]
    ThoughtLeadership,
    #[serde(alias = "Playful")]
    Playful,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Conversational,
        Tone::ThoughtLeadership,
        Tone::Playful,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Conversational => "Conversational",
            Tone::ThoughtLeadership => "Thought Leadership",
            Tone::Playful => "Playful",
        }
    }

    /// One-line guidance shown next to the tone picker.
    pub fn description(self) -> &'static str {
        match self {
            Tone::Professional => "Polished, formal but approachable",
            Tone::Conversational => "Clear, human, lightly informal",
            Tone::ThoughtLeadership => "Authoritative, visionary, provocative",
            Tone::Playful => "Light-hearted, witty, still insightful",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
