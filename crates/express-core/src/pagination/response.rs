//! The page envelope handed to response serializers.

use super::PageInfo;
use crate::ExpressError;
use serde::{Deserialize, Serialize};

/// Page content paired with its navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    try_from = "RawPageResponse<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct PageResponse<T> {
    content: Vec<T>,
    page_info: PageInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageResponse<T> {
    content: Vec<T>,
    page_info: PageInfo,
}

impl<T> TryFrom<RawPageResponse<T>> for PageResponse<T> {
    type Error = ExpressError;

    fn try_from(raw: RawPageResponse<T>) -> Result<Self, Self::Error> {
        if raw.content.len() == raw.page_info.number_of_elements() {
            Ok(Self::of(raw.content, raw.page_info))
        } else {
            Err(ExpressError::invalid_argument(format!(
                "content holds {} items but pageInfo reports {}",
                raw.content.len(),
                raw.page_info.number_of_elements()
            )))
        }
    }
}

impl<T> PageResponse<T> {
    /// Pairs content with page info.
    #[must_use]
    pub(crate) fn of(content: Vec<T>, page_info: PageInfo) -> Self {
        Self { content, page_info }
    }

    /// The items on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// The navigation metadata.
    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Splits the response into content and page info.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, PageInfo) {
        (self.content, self.page_info)
    }
}
