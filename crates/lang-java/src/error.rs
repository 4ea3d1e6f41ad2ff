use modfind_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    /// The symbol model could not answer a question about a declaring type.
    #[error("Metadata lookup failed: {0}")]
    Metadata(#[from] ApiError),
    #[error("Malformed method signature: {0}")]
    MalformedSignature(String),
}

pub type Result<T> = std::result::Result<T, PatternError>;
