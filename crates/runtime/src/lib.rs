use modfind_core::{HttpTransport, ModerneSearch, SearchConfig};
use std::sync::Arc;

/// Bootstraps a search service talking HTTPS to the configured endpoint.
///
/// The transport honours the configured timeout; everything else is left at `ureq` defaults.
pub fn build_default_search(config: SearchConfig) -> ModerneSearch<HttpTransport> {
    tracing::debug!("Search endpoint: {}", config.endpoint);
    let transport = HttpTransport::new(config.timeout());
    ModerneSearch::new(Arc::new(config), transport)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(modfind_core::logging::init_logging(component, to_stderr))
}
