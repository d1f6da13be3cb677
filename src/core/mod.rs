//! Core data structures and the external-solver boundary

pub mod error;
pub mod traits;
pub mod types;

pub use self::error::{Result, SVMError};
pub use self::traits::*;
pub use self::types::*;
