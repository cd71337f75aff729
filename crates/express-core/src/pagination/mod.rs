//! Paging primitives: queries, fetched pages, page info and response envelopes.

mod info;
mod mapper;
mod page;
mod params;
mod query;
mod response;
mod sort;

pub use info::{PageInfo, SortInfo};
pub use mapper::PageResultMapper;
pub use page::PageResult;
pub use params::{PageDefaults, PageParams, SIZE_LIMIT};
pub use query::PageQuery;
pub use response::PageResponse;
pub use sort::{Direction, Sort, SortOrder};
