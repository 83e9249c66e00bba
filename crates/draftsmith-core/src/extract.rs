//! Parsing of the snippet extractor's response.
//!
//! The extractor is asked for strict JSON, but model output sometimes wraps
//! the object in prose or code fences. We take the outermost `{ ... }` span
//! and deserialize that.

use crate::error::CoreError;
use crate::models::snippet::ExtractedSnippets;

pub fn parse_extraction_response(content: &str) -> Result<ExtractedSnippets, CoreError> {
    let json = json_object_span(content).unwrap_or(content);
    serde_json::from_str(json).map_err(|e| CoreError::ExtractionParse(e.to_string()))
}

/// From the first `{` through the last `}`, if both exist in that order.
fn json_object_span(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (start < end).then(|| &content[start..=end])
}
