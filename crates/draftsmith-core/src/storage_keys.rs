//! Storage key and download filename conventions.
//!
//! Pure string functions. These define where the library lives inside a
//! storage medium and what exported files are called.

use uuid::Uuid;

/// The whole snippet library, serialized as one JSON array.
pub const SNIPPET_LIBRARY: &str = "snippets.json";

/// The in-progress brief.
pub const BRIEF_DRAFT: &str = "brief.json";

pub fn hooks_export(id: Uuid) -> String {
    format!("hooks-{id}.csv")
}

pub fn snippets_export(id: Uuid) -> String {
    format!("snippets-{id}.json")
}

pub fn quotes_export(id: Uuid) -> String {
    format!("quotes-{id}.txt")
}

/// `"LinkedIn Post"` becomes `"linkedin-post.md"`.
pub fn section_markdown(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{slug}.md")
}
