pub mod config;
pub mod credential;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod search;

pub use config::{RunIdExtraction, SearchConfig};
pub use credential::Credential;
pub use dispatch::{HttpTransport, SearchDispatcher, Transport};
pub use error::{ModfindError, Result};
pub use search::{BrowserLauncher, ModerneSearch, SearchOutcome};
