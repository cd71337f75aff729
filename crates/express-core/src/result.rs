//! Result type aliases for Early Express.

use crate::ExpressError;

/// A specialized `Result` type for Early Express operations.
pub type ExpressResult<T> = Result<T, ExpressError>;
