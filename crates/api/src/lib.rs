pub mod error;
pub mod models;
pub mod scope;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use scope::{QualifiedName, TypeScope};
