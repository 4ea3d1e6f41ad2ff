#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown type: {0}")]
    UnknownType(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
