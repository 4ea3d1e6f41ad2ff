use crate::error::{ModfindError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.moderne.io/graphql";
pub const DEFAULT_RESULTS_URL: &str = "https://app.moderne.io/results/";
pub const DEFAULT_ONBOARDING_URL: &str = "https://app.moderne.io/welcome/plugins/IntelliJ";

pub const ENV_ENDPOINT: &str = "MODFIND_ENDPOINT";
pub const ENV_RESULTS_URL: &str = "MODFIND_RESULTS_URL";
pub const ENV_ONBOARDING_URL: &str = "MODFIND_ONBOARDING_URL";
pub const ENV_TOKEN_FILE: &str = "MODFIND_TOKEN_FILE";
pub const ENV_TIMEOUT_SECS: &str = "MODFIND_TIMEOUT_SECS";
pub const ENV_RUN_ID_EXTRACTION: &str = "MODFIND_RUN_ID_EXTRACTION";

/// How the run identifier is pulled out of the `runRecipe` response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunIdExtraction {
    /// First `(\w+)"}` match in the raw body.
    #[default]
    Pattern,
    /// `data.runRecipe.id` of the parsed JSON body.
    Schema,
}

impl std::str::FromStr for RunIdExtraction {
    type Err = ModfindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(RunIdExtraction::Pattern),
            "schema" => Ok(RunIdExtraction::Schema),
            other => Err(ModfindError::Config(format!(
                "unknown run id extraction '{}', expected 'pattern' or 'schema'",
                other
            ))),
        }
    }
}

/// Read-only settings shared by every search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Prefix the run identifier is appended to.
    pub results_url: String,
    pub onboarding_url: String,
    pub credential_path: PathBuf,
    /// `None` keeps the transport's own defaults.
    pub timeout_secs: Option<u64>,
    pub run_id_extraction: RunIdExtraction,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results_url: DEFAULT_RESULTS_URL.to_string(),
            onboarding_url: DEFAULT_ONBOARDING_URL.to_string(),
            credential_path: Self::default_credential_path(),
            timeout_secs: None,
            run_id_extraction: RunIdExtraction::default(),
        }
    }
}

impl SearchConfig {
    /// `~/.moderne/token.txt`, or a relative path when no home directory is known.
    pub fn default_credential_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".moderne")
            .join("token.txt")
    }

    /// Defaults, then the optional JSON file, then environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(url) = lookup(ENV_RESULTS_URL) {
            self.results_url = url;
        }
        if let Some(url) = lookup(ENV_ONBOARDING_URL) {
            self.onboarding_url = url;
        }
        if let Some(path) = lookup(ENV_TOKEN_FILE) {
            self.credential_path = PathBuf::from(path);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse().map_err(|_| {
                ModfindError::Config(format!("{} must be a number of seconds", ENV_TIMEOUT_SECS))
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Some(mode) = lookup(ENV_RUN_ID_EXTRACTION) {
            self.run_id_extraction = mode.parse()?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn results_url_for(&self, run_id: &str) -> String {
        format!("{}{}", self.results_url, run_id)
    }
}
