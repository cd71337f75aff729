//! # Express Core
//!
//! Core error definitions and paging primitives shared by Early Express
//! services. The central piece is [`PageResultMapper`], which turns a fetched
//! [`PageResult`] into a serializable [`PageResponse`] with computed
//! [`PageInfo`].

pub mod error;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
