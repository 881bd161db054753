/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
