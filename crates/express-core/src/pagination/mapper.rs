//! Conversion of fetched pages into response envelopes.

use super::{PageResponse, PageResult};
use crate::{ExpressError, ExpressResult};

const PAGE_RESULT_REQUIRED: &str = "page result must not be null";
const MAPPER_REQUIRED: &str = "mapper function must not be null";

/// Builds [`PageResponse`] envelopes from [`PageResult`]s.
///
/// Absent arguments are reported as [`ExpressError::InvalidArgument`]. Page
/// info is always computed from the page as fetched, before any item mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageResultMapper;

impl PageResultMapper {
    /// Wraps a page result without transforming its items.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] when `page_result` is `None`.
    pub fn to_page_response<T>(page_result: Option<PageResult<T>>) -> ExpressResult<PageResponse<T>> {
        let page_result = page_result.ok_or_else(|| ExpressError::invalid_argument(PAGE_RESULT_REQUIRED))?;
        let info = page_result.info();
        let (content, _, _) = page_result.into_parts();
        Ok(PageResponse::of(content, info))
    }

    /// Wraps a page result, applying `mapper` to every item in order.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] when `page_result` or
    /// `mapper` is `None`. The page result is checked first.
    pub fn to_page_response_with<T, R, F>(
        page_result: Option<PageResult<T>>,
        mapper: Option<F>,
    ) -> ExpressResult<PageResponse<R>>
    where
        F: FnMut(T) -> R,
    {
        let (page_result, mapper) = Self::require(page_result, mapper)?;
        let info = page_result.info();
        let (content, _, _) = page_result.map(mapper).into_parts();
        Ok(PageResponse::of(content, info))
    }

    /// Wraps a page result, applying a fallible `mapper` to every item in order.
    ///
    /// The first mapper error is returned as-is and no response is built.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressError::InvalidArgument`] (converted into `E`) when
    /// `page_result` or `mapper` is `None`, or the mapper's own error.
    pub fn try_to_page_response_with<T, R, E, F>(
        page_result: Option<PageResult<T>>,
        mapper: Option<F>,
    ) -> Result<PageResponse<R>, E>
    where
        F: FnMut(T) -> Result<R, E>,
        E: From<ExpressError>,
    {
        let (page_result, mapper) = Self::require(page_result, mapper)?;
        let info = page_result.info();
        let (content, _, _) = page_result.try_map(mapper)?.into_parts();
        Ok(PageResponse::of(content, info))
    }

    fn require<T, F>(page_result: Option<PageResult<T>>, mapper: Option<F>) -> ExpressResult<(PageResult<T>, F)> {
        let page_result = page_result.ok_or_else(|| ExpressError::invalid_argument(PAGE_RESULT_REQUIRED))?;
        let mapper = mapper.ok_or_else(|| ExpressError::invalid_argument(MAPPER_REQUIRED))?;
        Ok((page_result, mapper))
    }
}

impl<T> From<PageResult<T>> for PageResponse<T> {
    fn from(page_result: PageResult<T>) -> Self {
        let info = page_result.info();
        let (content, _, _) = page_result.into_parts();
        Self::of(content, info)
    }
}
