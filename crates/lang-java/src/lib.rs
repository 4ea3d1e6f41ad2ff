pub mod descriptor;
pub mod error;
pub mod naming;
pub mod pattern;
pub mod resolver;
pub mod scope;

pub use error::{PatternError, Result};
pub use pattern::PatternBuilder;
pub use resolver::SignatureResolver;
pub use scope::ImportTable;
