pub mod pattern;
pub mod symbol;

pub use pattern::*;
pub use symbol::*;
