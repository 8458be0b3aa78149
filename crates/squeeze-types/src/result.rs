//! Result type alias for squeeze operations

use crate::error::Error;

/// Result type used throughout the squeeze crates
pub type Result<T> = std::result::Result<T, Error>;
