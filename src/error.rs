use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Expected color value to be in HTML format (like #ff0000) but found: {0}")]
    Invalid(String),

    #[error("Expected color value to be in HTML format (like #ff0000) but found nothing")]
    Missing,
}
