//! Navigation metadata derived from a page of results.

use super::{Direction, PageQuery, SortOrder};
use crate::ExpressError;
use serde::{Deserialize, Serialize};

/// One sort clause as reported back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SortInfo {
    /// The sorted property.
    pub property: String,
    /// The sort direction.
    pub direction: Direction,
}

impl From<&SortOrder> for SortInfo {
    fn from(order: &SortOrder) -> Self {
        Self {
            property: order.property().to_string(),
            direction: order.direction(),
        }
    }
}

/// Information about a page of results.
///
/// A snapshot computed once from the query, the total element count and the
/// number of items actually on the page. It is only built from a
/// [`PageResult`](super::PageResult), and deserialized snapshots are checked
/// against the same arithmetic.
///
/// ```compile_fail
/// use express_core::{PageInfo, PageQuery};
///
/// let info = PageInfo::new(&PageQuery::new(0, 10).unwrap(), 0, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", try_from = "RawPageInfo")]
pub struct PageInfo {
    page: usize,
    size: usize,
    total_elements: u64,
    total_pages: u64,
    number_of_elements: usize,
    first: bool,
    last: bool,
    has_next: bool,
    has_previous: bool,
    empty: bool,
    sort: Vec<SortInfo>,
}

/// Wire form of [`PageInfo`] before its fields are cross-checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageInfo {
    page: usize,
    size: usize,
    total_elements: u64,
    total_pages: u64,
    number_of_elements: usize,
    first: bool,
    last: bool,
    has_next: bool,
    has_previous: bool,
    empty: bool,
    #[serde(default)]
    sort: Vec<SortInfo>,
}

impl TryFrom<RawPageInfo> for PageInfo {
    type Error = ExpressError;

    fn try_from(raw: RawPageInfo) -> Result<Self, Self::Error> {
        if raw.number_of_elements > raw.size {
            return Err(ExpressError::invalid_argument(format!(
                "numberOfElements ({}) exceeds page size ({})",
                raw.number_of_elements, raw.size
            )));
        }
        if raw.size == 0 && raw.total_elements > 0 {
            return Err(ExpressError::invalid_argument(
                "a zero page size cannot hold any elements",
            ));
        }
        if raw.number_of_elements as u64 > raw.total_elements {
            return Err(ExpressError::invalid_argument(format!(
                "numberOfElements ({}) exceeds totalElements ({})",
                raw.number_of_elements, raw.total_elements
            )));
        }

        let expected = Self::compute(
            raw.page,
            raw.size,
            raw.total_elements,
            raw.number_of_elements,
            raw.sort.clone(),
        );
        let received = Self {
            page: raw.page,
            size: raw.size,
            total_elements: raw.total_elements,
            total_pages: raw.total_pages,
            number_of_elements: raw.number_of_elements,
            first: raw.first,
            last: raw.last,
            has_next: raw.has_next,
            has_previous: raw.has_previous,
            empty: raw.empty,
            sort: raw.sort,
        };

        if received == expected {
            Ok(received)
        } else {
            Err(ExpressError::invalid_argument(format!(
                "inconsistent page info for page {} of size {} with {} total elements",
                expected.page, expected.size, expected.total_elements
            )))
        }
    }
}

impl PageInfo {
    /// Computes page info for `number_of_elements` items fetched by `query`.
    ///
    /// With no elements in total there is exactly one (empty) position: the
    /// page is both first and last whatever index was requested.
    #[must_use]
    pub(crate) fn new(query: &PageQuery, total_elements: u64, number_of_elements: usize) -> Self {
        Self::compute(
            query.page(),
            query.size(),
            total_elements,
            number_of_elements,
            query.sort().iter().map(SortInfo::from).collect(),
        )
    }

    fn compute(
        page: usize,
        size: usize,
        total_elements: u64,
        number_of_elements: usize,
        sort: Vec<SortInfo>,
    ) -> Self {
        let total_pages = if size > 0 {
            total_elements.div_ceil(size as u64)
        } else {
            0
        };
        let no_elements = total_elements == 0;
        let index = page as u64;

        Self {
            page,
            size,
            total_elements,
            total_pages,
            number_of_elements,
            first: no_elements || page == 0,
            last: total_pages == 0 || index >= total_pages - 1,
            has_next: total_pages > 0 && index < total_pages - 1,
            has_previous: !no_elements && page > 0,
            empty: number_of_elements == 0,
            sort,
        }
    }

    /// The current page number (0-indexed).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The number of items per page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The total number of items across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// The total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// The number of items on this page.
    #[must_use]
    pub const fn number_of_elements(&self) -> usize {
        self.number_of_elements
    }

    /// Whether this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.first
    }

    /// Whether this is the last page.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.last
    }

    /// Whether a following page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    /// Whether a preceding page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Whether this page holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// The sort clauses of the query, in query order.
    #[must_use]
    pub fn sort(&self) -> &[SortInfo] {
        &self.sort
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Sort;

    fn info(page: usize, size: usize, total: u64, len: usize) -> PageInfo {
        PageInfo::new(&PageQuery::new(page, size).unwrap(), total, len)
    }

    #[test]
    fn test_page_info_first_page() {
        let info = info(0, 10, 25, 10);
        assert!(info.is_first());
        assert!(!info.is_last());
        assert_eq!(info.total_pages(), 3);
        assert!(info.has_next());
        assert!(!info.has_previous());
    }

    #[test]
    fn test_page_info_last_page() {
        let info = info(2, 10, 22, 2);
        assert!(!info.is_first());
        assert!(info.is_last());
        assert!(!info.has_next());
        assert!(info.has_previous());
    }

    #[test]
    fn test_page_info_single_page() {
        let info = info(0, 10, 3, 3);
        assert!(info.is_first());
        assert!(info.is_last());
        assert!(!info.has_next());
        assert!(!info.has_previous());
    }

    #[test]
    fn test_page_info_total_pages_rounding() {
        assert_eq!(info(0, 5, 11, 5).total_pages(), 3); // ceil(11/5) = 3
        assert_eq!(info(0, 5, 10, 5).total_pages(), 2);
        assert_eq!(info(0, 1, 1, 1).total_pages(), 1);
    }

    #[test]
    fn test_page_info_no_elements() {
        let info = info(0, 10, 0, 0);
        assert_eq!(info.total_pages(), 0);
        assert!(info.is_empty());
        assert!(info.is_first());
        assert!(info.is_last());
        assert!(!info.has_next());
        assert!(!info.has_previous());
    }

    #[test]
    fn test_page_info_no_elements_ignores_page_index() {
        let info = info(4, 10, 0, 0);
        assert_eq!(info.page(), 4);
        assert!(info.is_first());
        assert!(info.is_last());
        assert!(!info.has_next());
        assert!(!info.has_previous());
    }

    #[test]
    fn test_page_info_beyond_last_page() {
        let info = info(7, 10, 23, 0);
        assert!(info.is_empty());
        assert!(!info.is_first());
        assert!(info.is_last());
        assert!(!info.has_next());
        assert!(info.has_previous());
    }

    #[test]
    fn test_page_info_zero_size() {
        let info = PageInfo::new(&PageQuery::unpaged(0), 0, 0);
        assert_eq!(info.total_pages(), 0);
        assert!(info.is_last());
    }

    #[test]
    fn test_page_info_sort_order() {
        let query = PageQuery::sorted(
            0,
            10,
            Sort::by(Direction::Desc, ["createdDate"]).and(Sort::by(Direction::Asc, ["name"])),
        )
        .unwrap();
        let info = PageInfo::new(&query, 2, 2);
        assert_eq!(
            info.sort(),
            &[
                SortInfo { property: "createdDate".to_string(), direction: Direction::Desc },
                SortInfo { property: "name".to_string(), direction: Direction::Asc },
            ]
        );
    }

    #[test]
    fn test_page_info_unsorted_is_empty_list() {
        let info = info(0, 10, 3, 3);
        assert!(info.sort().is_empty());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["sort"], serde_json::json!([]));
    }

    #[test]
    fn test_page_info_json_fields() {
        let json = serde_json::to_value(info(1, 5, 12, 5)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "page": 1,
                "size": 5,
                "totalElements": 12,
                "totalPages": 3,
                "numberOfElements": 5,
                "first": false,
                "last": false,
                "hasNext": true,
                "hasPrevious": true,
                "empty": false,
                "sort": []
            })
        );
    }

    #[test]
    fn test_page_info_deserializes_consistent_snapshot() {
        let query = PageQuery::sorted(1, 5, Sort::by(Direction::Desc, ["createdDate"])).unwrap();
        let original = PageInfo::new(&query, 12, 5);
        let json = serde_json::to_string(&original).unwrap();

        let decoded: PageInfo = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_page_info_rejects_pages_without_elements() {
        let mut json = serde_json::to_value(info(0, 10, 0, 0)).unwrap();
        json["totalPages"] = serde_json::json!(7);

        let err = serde_json::from_value::<PageInfo>(json).unwrap_err();
        assert!(err.to_string().contains("inconsistent page info"));
    }

    #[test]
    fn test_page_info_rejects_content_larger_than_size() {
        let mut json = serde_json::to_value(info(0, 10, 60, 10)).unwrap();
        json["numberOfElements"] = serde_json::json!(50);

        let err = serde_json::from_value::<PageInfo>(json).unwrap_err();
        assert!(err.to_string().contains("exceeds page size"));
    }

    #[test]
    fn test_page_info_rejects_flags_that_disagree() {
        let mut json = serde_json::to_value(info(2, 10, 22, 2)).unwrap();
        json["hasNext"] = serde_json::json!(true);
        assert!(serde_json::from_value::<PageInfo>(json).is_err());

        let mut json = serde_json::to_value(info(0, 10, 3, 3)).unwrap();
        json["empty"] = serde_json::json!(true);
        assert!(serde_json::from_value::<PageInfo>(json).is_err());
    }

    #[test]
    fn test_page_info_rejects_elements_with_zero_size() {
        let mut json = serde_json::to_value(PageInfo::new(&PageQuery::unpaged(0), 0, 0)).unwrap();
        json["totalElements"] = serde_json::json!(4);

        let err = serde_json::from_value::<PageInfo>(json).unwrap_err();
        assert!(err.to_string().contains("zero page size"));
    }
}
