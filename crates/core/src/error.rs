use modfind_java::PatternError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModfindError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read credential at {}: {source}", path.display())]
    Credential {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Search service returned HTTP {0}")]
    Status(u16),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ureq::Error> for ModfindError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => ModfindError::Status(code),
            other => ModfindError::Transport(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModfindError>;
