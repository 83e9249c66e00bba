use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("extraction response could not be parsed: {0}")]
    ExtractionParse(String),
}
