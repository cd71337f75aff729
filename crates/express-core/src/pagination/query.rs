//! The page/size/sort context of a paged query.

use super::{Direction, Sort};
use crate::{ExpressError, ExpressResult};

/// A request for one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    page: usize,
    size: usize,
    sort: Sort,
}

impl PageQuery {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;

    /// Creates an unsorted page query.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] when `size` is zero.
    pub fn new(page: usize, size: usize) -> ExpressResult<Self> {
        Self::sorted(page, size, Sort::unsorted())
    }

    /// Creates a page query with sort clauses.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] when `size` is zero.
    pub fn sorted(page: usize, size: usize, sort: Sort) -> ExpressResult<Self> {
        if size == 0 {
            return Err(ExpressError::invalid_argument("page size must be at least 1"));
        }
        Ok(Self { page, size, sort })
    }

    /// Creates a page query sorted by `properties` in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] when `size` is zero.
    pub fn sorted_by<I, S>(page: usize, size: usize, direction: Direction, properties: I) -> ExpressResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::sorted(page, size, Sort::by(direction, properties))
    }

    /// The first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
            sort: Sort::unsorted(),
        }
    }

    /// A single page covering `size` elements. `size` may be zero here.
    pub(crate) fn unpaged(size: usize) -> Self {
        Self {
            page: 0,
            size,
            sort: Sort::unsorted(),
        }
    }

    /// The zero-based page index.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The sort clauses.
    #[must_use]
    pub const fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }

    /// The query for the following page.
    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    /// The query for the preceding page, or the first page when already there.
    #[must_use]
    pub fn previous_or_first(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self.clone()
        }
    }

    /// Returns a copy with a different sort.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first()
    }
}
