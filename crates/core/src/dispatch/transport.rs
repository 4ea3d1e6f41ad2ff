use crate::error::Result;
use std::time::Duration;
use tracing::debug;

/// One blocking JSON POST. Implementations must read the whole response body before returning.
pub trait Transport {
    /// Returns the response body of a 2xx reply; every other outcome is an error.
    fn post_json(&self, url: &str, authorization: &str, body: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &str, authorization: &str, body: &str) -> Result<String> {
        (**self).post_json(url, authorization, body)
    }
}

/// HTTPS transport backed by a `ureq` agent.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, authorization: &str, body: &str) -> Result<String> {
        debug!("POST {} ({} bytes)", url, body.len());
        // Non-2xx statuses surface as ureq::Error::StatusCode.
        let mut response = self
            .agent
            .post(url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", authorization)
            .send(body)?;
        let text = response.body_mut().read_to_string()?;
        debug!("Received {} ({} bytes)", response.status(), text.len());
        Ok(text)
    }
}
