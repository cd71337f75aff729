//! A fetched page of raw results.

use super::{PageInfo, PageQuery};
use crate::{ExpressError, ExpressResult};
use tracing::trace;

/// The items of one page together with the query that produced them and
/// the total number of elements across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    content: Vec<T>,
    query: PageQuery,
    total_elements: u64,
}

impl<T> PageResult<T> {
    /// Creates a page result.
    ///
    /// When the page is non-empty and reaches past `total_elements`, the total
    /// is corrected to `offset + content.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] when `content` holds more
    /// items than the query's page size.
    pub fn new(content: Vec<T>, query: PageQuery, total_elements: u64) -> ExpressResult<Self> {
        if content.len() > query.size() {
            return Err(ExpressError::invalid_argument(format!(
                "page content has {} elements but page size is {}",
                content.len(),
                query.size()
            )));
        }

        let offset = query.offset() as u64;
        let total_elements = if !content.is_empty() && offset.saturating_add(query.size() as u64) > total_elements {
            let corrected = offset.saturating_add(content.len() as u64);
            if corrected != total_elements {
                trace!(
                    page = query.page(),
                    size = query.size(),
                    reported = total_elements,
                    corrected,
                    "Correcting total elements from last page content"
                );
            }
            corrected
        } else {
            total_elements
        };

        Ok(Self {
            content,
            query,
            total_elements,
        })
    }

    /// A single page holding the entire result set.
    #[must_use]
    pub fn unpaged(content: Vec<T>) -> Self {
        let len = content.len();
        Self {
            content,
            query: PageQuery::unpaged(len),
            total_elements: len as u64,
        }
    }

    /// An empty page for `query` with no elements in total.
    #[must_use]
    pub fn empty(query: PageQuery) -> Self {
        Self {
            content: Vec::new(),
            query,
            total_elements: 0,
        }
    }

    /// The items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// The query that produced this page.
    #[must_use]
    pub const fn query(&self) -> &PageQuery {
        &self.query
    }

    /// The total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// The number of items on this page.
    #[must_use]
    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Computes the navigation metadata for this page.
    #[must_use]
    pub fn info(&self) -> PageInfo {
        PageInfo::new(&self.query, self.total_elements, self.content.len())
    }

    /// Maps the page content to a different type, keeping query and total.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            query: self.query,
            total_elements: self.total_elements,
        }
    }

    /// Maps the page content with a fallible function, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F: FnMut(T) -> Result<U, E>>(self, f: F) -> Result<PageResult<U>, E> {
        Ok(PageResult {
            content: self.content.into_iter().map(f).collect::<Result<Vec<U>, E>>()?,
            query: self.query,
            total_elements: self.total_elements,
        })
    }

    /// Splits the page into content, query and total.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageQuery, u64) {
        (self.content, self.query, self.total_elements)
    }
}

impl<T> IntoIterator for PageResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
