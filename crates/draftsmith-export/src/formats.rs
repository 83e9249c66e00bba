use std::fmt;
use std::str::FromStr;

use draftsmith_core::models::snippet::SnippetSet;
use draftsmith_core::storage_keys;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Social hooks, one per line, as a single-column CSV.
    Hooks,
    /// The whole snippet set as pretty JSON.
    Snippets,
    /// Pull quotes separated by blank lines.
    Quotes,
}

impl ExportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportKind::Hooks => "hooks",
            ExportKind::Snippets => "snippets",
            ExportKind::Quotes => "quotes",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hooks" => Ok(ExportKind::Hooks),
            "snippets" => Ok(ExportKind::Snippets),
            "quotes" => Ok(ExportKind::Quotes),
            other => Err(ExportError::UnknownKind(other.to_string())),
        }
    }
}

/// A file ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Render `set` as `kind`. The filename depends only on the set id and the
/// kind.
pub fn export(set: &SnippetSet, kind: ExportKind) -> Result<ExportFile, ExportError> {
    let (filename, bytes) = match kind {
        ExportKind::Hooks => (
            storage_keys::hooks_export(set.id),
            hooks_csv(&set.social_hooks).into_bytes(),
        ),
        ExportKind::Snippets => (
            storage_keys::snippets_export(set.id),
            serde_json::to_vec_pretty(set)?,
        ),
        ExportKind::Quotes => (
            storage_keys::quotes_export(set.id),
            quotes_text(&set.pull_quotes).into_bytes(),
        ),
    };

    debug!(id = %set.id, %kind, bytes = bytes.len(), "snippet set exported");
    Ok(ExportFile { filename, bytes })
}

/// One hook per row. Cells that would break the row are quoted, with inner
/// quotes doubled.
pub fn hooks_csv(hooks: &[String]) -> String {
    hooks
        .iter()
        .map(|hook| csv_cell(hook))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn quotes_text(quotes: &[String]) -> String {
    quotes.join("\n\n")
}

fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
