pub mod request;
pub mod response;
pub mod transport;

pub use request::{GraphQlRequest, run_recipe_mutation};
pub use response::extract_run_id;
pub use transport::{HttpTransport, Transport};

use crate::config::SearchConfig;
use crate::credential::Credential;
use crate::error::Result;
use modfind_api::{RunId, SearchPattern};
use std::sync::Arc;
use tracing::{debug, info};

/// Sends one `runRecipe` mutation per pattern and reports the run it started.
pub struct SearchDispatcher<T> {
    config: Arc<SearchConfig>,
    transport: T,
}

impl<T: Transport> SearchDispatcher<T> {
    pub fn new(config: Arc<SearchConfig>, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The exact request body [`dispatch`](Self::dispatch) would send.
    pub fn request_body(&self, pattern: &SearchPattern) -> Result<String> {
        GraphQlRequest::for_pattern(pattern).to_body()
    }

    /// Blocks until the service answered. `Ok(None)` means the reply carried no run id.
    pub fn dispatch(&self, pattern: &SearchPattern, credential: &Credential) -> Result<Option<RunId>> {
        let body = self.request_body(pattern)?;
        info!("Searching for {} {}", pattern.kind(), pattern);

        let response = self.transport.post_json(
            &self.config.endpoint,
            &credential.authorization_header(),
            &body,
        )?;

        let run_id = extract_run_id(&response, self.config.run_id_extraction);
        match &run_id {
            Some(id) => info!("Search started as run {}", id),
            None => debug!("Response carried no run id: {}", response),
        }
        Ok(run_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModfindError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTransport {
        reply: Option<String>,
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl Transport for RecordingTransport {
        fn post_json(&self, url: &str, authorization: &str, body: &str) -> Result<String> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), authorization.to_string(), body.to_string()));
            self.reply.clone().ok_or(ModfindError::Status(502))
        }
    }

    fn type_pattern() -> SearchPattern {
        SearchPattern::Type {
            fully_qualified_type_name: "com.acme.Foo".into(),
        }
    }

    #[test]
    fn test_dispatch_sends_envelope_and_token() {
        let transport = RecordingTransport {
            reply: Some(r#"{"data":{"runRecipe":{"id":"abc123"}}}"#.into()),
            ..Default::default()
        };
        let dispatcher = SearchDispatcher::new(Arc::new(SearchConfig::default()), &transport);

        let run_id = dispatcher
            .dispatch(&type_pattern(), &Credential::new("tok\n"))
            .unwrap();
        assert_eq!(run_id, Some(RunId::new("abc123")));

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (url, auth, body) = &calls[0];
        assert_eq!(url, "https://api.moderne.io/graphql");
        assert_eq!(auth, "Bearer tok");
        assert_eq!(body, &dispatcher.request_body(&type_pattern()).unwrap());
    }

    #[test]
    fn test_transport_failure_is_fatal() {
        let transport = RecordingTransport::default();
        let dispatcher = SearchDispatcher::new(Arc::new(SearchConfig::default()), &transport);

        let result = dispatcher.dispatch(&type_pattern(), &Credential::new("tok"));
        assert!(matches!(result, Err(ModfindError::Status(502))));
        assert_eq!(transport.calls.borrow().len(), 1);
    }
}
