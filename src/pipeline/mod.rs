pub mod filter;
pub mod page;
pub mod sort;
pub mod view;

pub use filter::{filter, parse_price_bound, Amenity, FilterCriteria};
pub use page::{page_slice, total_pages, PageState, ITEMS_PER_PAGE};
pub use sort::{sort, SortOption};
pub use view::{Action, ViewMode, ViewState};
