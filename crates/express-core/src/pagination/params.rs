//! Paging parameters as they arrive in a query string.

use super::{PageQuery, Sort};
use crate::{ExpressError, ExpressResult, ValidateExt};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hard upper bound for a requested page size, before configured clamping.
pub const SIZE_LIMIT: usize = 2000;

/// Raw `page`, `size` and `sort` parameters.
///
/// `sort` accepts repeated `property,direction` clauses, e.g.
/// `?sort=createdDate,desc&sort=name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    #[validate(range(min = 1, max = SIZE_LIMIT))]
    pub size: Option<usize>,
    #[serde(default)]
    pub sort: Vec<String>,
}

/// How [`PageParams`] are turned into a [`PageQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDefaults {
    /// Size used when the request names none.
    pub default_size: usize,
    /// Requested sizes above this are clamped down.
    pub max_size: usize,
    /// Whether the `page` parameter counts from 1.
    pub one_indexed: bool,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            default_size: PageQuery::DEFAULT_SIZE,
            max_size: 100,
            one_indexed: false,
        }
    }
}

impl PageParams {
    /// Validates the parameters and resolves them against `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::Validation`] for an out-of-range size and
    /// [`ExpressError::InvalidArgument`] for a malformed sort clause.
    pub fn into_query(self, defaults: &PageDefaults) -> ExpressResult<PageQuery> {
        self.validate_request()?;

        let page = match (self.page, defaults.one_indexed) {
            (Some(page), true) => page.saturating_sub(1),
            (Some(page), false) => page,
            (None, _) => 0,
        };
        let size = self
            .size
            .unwrap_or(defaults.default_size)
            .min(defaults.max_size.min(SIZE_LIMIT));
        let sort = Sort::parse(self.sort.iter().filter(|clause| !clause.trim().is_empty()))?;

        PageQuery::sorted(page, size, sort).map_err(|e| match e {
            ExpressError::InvalidArgument(message) => {
                ExpressError::invalid_argument(format!("unusable paging defaults: {message}"))
            }
            other => other,
        })
    }
}
