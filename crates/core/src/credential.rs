use crate::error::{ModfindError, Result};
use std::fmt;
use std::path::Path;

/// Bearer token for the search service, read from a file this crate never writes.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            token: token.as_ref().trim().to_string(),
        }
    }

    /// Only checks presence; a directory here passes and fails later in [`read`](Self::read).
    pub fn exists(path: &Path) -> bool {
        path.exists()
    }

    /// Read the whole file and trim surrounding whitespace.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ModfindError::Credential {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(String::from_utf8_lossy(&bytes)))
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .finish()
    }
}
