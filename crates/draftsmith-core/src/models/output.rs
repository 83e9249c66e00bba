use serde::{Deserialize, Serialize};

/// The three sections pulled out of one generated document.
///
/// Every field is empty when the document had no matching heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOutput {
    pub blog_draft: String,
    pub linkedin_post: String,
    pub footnotes: String,
}

impl ParsedOutput {
    pub fn is_empty(&self) -> bool {
        self.blog_draft.is_empty() && self.linkedin_post.is_empty() && self.footnotes.is_empty()
    }
}
