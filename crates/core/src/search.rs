use crate::config::SearchConfig;
use crate::credential::Credential;
use crate::dispatch::{SearchDispatcher, Transport};
use crate::error::Result;
use modfind_api::{CodeSymbol, RunId, SearchPattern, TypeScope};
use modfind_java::PatternBuilder;
use std::sync::Arc;
use tracing::{info, warn};

/// Opens URLs for the user. The search never inspects what happens afterwards.
pub trait BrowserLauncher {
    fn open(&self, url: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No credential on disk. Nothing was resolved or sent.
    Onboarding { url: String },
    /// The symbol's metadata could not be read. Nothing was sent.
    Aborted,
    /// The service answered without a run id.
    NoResult,
    Started { run_id: RunId, results_url: String },
}

impl SearchOutcome {
    /// Page to show the user, if any.
    pub fn browser_url(&self) -> Option<&str> {
        match self {
            SearchOutcome::Onboarding { url } => Some(url),
            SearchOutcome::Started { results_url, .. } => Some(results_url),
            SearchOutcome::Aborted | SearchOutcome::NoResult => None,
        }
    }
}

/// One "find usages" action: credential check, pattern, request, run id.
pub struct ModerneSearch<T> {
    dispatcher: SearchDispatcher<T>,
}

impl<T: Transport> ModerneSearch<T> {
    pub fn new(config: Arc<SearchConfig>, transport: T) -> Self {
        Self {
            dispatcher: SearchDispatcher::new(config, transport),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        self.dispatcher.config()
    }

    /// Whether the action should be offered for the current selection: a credential must be
    /// present and the selection must resolve to at least one type, method, or field.
    pub fn is_findable(&self, selection: &[CodeSymbol]) -> bool {
        Credential::exists(&self.config().credential_path) && !selection.is_empty()
    }

    pub fn try_pattern<S: TypeScope>(
        &self,
        symbol: &CodeSymbol,
        scope: S,
    ) -> Result<SearchPattern> {
        Ok(PatternBuilder::new(scope).build(symbol)?)
    }

    /// The pattern for `symbol`, or `None` when its metadata is unreadable.
    pub fn pattern<S: TypeScope>(&self, symbol: &CodeSymbol, scope: S) -> Option<SearchPattern> {
        match self.try_pattern(symbol, scope) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(
                    "Not searching for {} in {}: {}",
                    symbol.kind(),
                    symbol.owner_fqn(),
                    e
                );
                None
            }
        }
    }

    /// Build the request body without sending it.
    pub fn dry_run<S: TypeScope>(&self, symbol: &CodeSymbol, scope: S) -> Result<Option<String>> {
        self.pattern(symbol, scope)
            .map(|pattern| self.dispatcher.request_body(&pattern))
            .transpose()
    }

    pub fn run<S: TypeScope>(&self, symbol: &CodeSymbol, scope: S) -> Result<SearchOutcome> {
        let config = self.config();
        if !Credential::exists(&config.credential_path) {
            info!(
                "No credential at {}; directing to onboarding",
                config.credential_path.display()
            );
            return Ok(SearchOutcome::Onboarding {
                url: config.onboarding_url.clone(),
            });
        }

        let Some(pattern) = self.pattern(symbol, scope) else {
            return Ok(SearchOutcome::Aborted);
        };

        let credential = Credential::read(&config.credential_path)?;
        Ok(match self.dispatcher.dispatch(&pattern, &credential)? {
            Some(run_id) => SearchOutcome::Started {
                results_url: config.results_url_for(run_id.as_str()),
                run_id,
            },
            None => SearchOutcome::NoResult,
        })
    }

    /// [`run`](Self::run), then hand the resulting page (if any) to `browser`.
    pub fn run_and_open<S: TypeScope, B: BrowserLauncher + ?Sized>(
        &self,
        symbol: &CodeSymbol,
        scope: S,
        browser: &B,
    ) -> Result<SearchOutcome> {
        let outcome = self.run(symbol, scope)?;
        if let Some(url) = outcome.browser_url() {
            browser.open(url)?;
        }
        Ok(outcome)
    }
}
