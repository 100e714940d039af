use crate::models::Property;
use crate::pipeline::filter::{filter, parse_price_bound, Amenity, FilterCriteria};
use crate::pipeline::page::{page_slice, total_pages, PageState};
use crate::pipeline::sort::{sort, SortOption};

/// Card layout of the listings page, orthogonal to the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// A user interaction on the listings page
#[derive(Debug, Clone)]
pub enum Action {
    /// Raw text from the min-price input; parsed at this boundary
    SetMinPrice(String),
    /// Raw text from the max-price input; parsed at this boundary
    SetMaxPrice(String),
    ToggleAmenity(Amenity),
    SelectBhk(String),
    ClearBhk,
    SetSort(SortOption),
    NextPage,
    PreviousPage,
    JumpToPage(usize),
    SetViewMode(ViewMode),
}

/// The whole listings-page state as one immutable value.
///
/// [`ViewState::apply`] consumes the state and returns its successor, so
/// every interaction is a pure transition rather than an in-place mutation.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    properties: Vec<Property>,
    pub criteria: FilterCriteria,
    pub sort: SortOption,
    pub page: PageState,
    pub mode: ViewMode,
}

impl ViewState {
    /// Start a session over a freshly fetched collection
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Default::default()
        }
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetMinPrice(raw) => self.criteria.min_price = parse_price_bound(&raw),
            Action::SetMaxPrice(raw) => self.criteria.max_price = parse_price_bound(&raw),
            Action::ToggleAmenity(amenity) => {
                if !self.criteria.amenities.remove(&amenity) {
                    self.criteria.amenities.insert(amenity);
                }
            }
            Action::SelectBhk(label) => self.criteria.bhk = Some(label),
            Action::ClearBhk => self.criteria.bhk = None,
            Action::SetSort(option) => self.sort = option,
            Action::NextPage => self.page = self.page.next(self.filtered_count()),
            Action::PreviousPage => self.page = self.page.previous(),
            Action::JumpToPage(page) => self.page = self.page.jump_to(page, self.filtered_count()),
            Action::SetViewMode(mode) => self.mode = mode,
        }
        // A criteria or sort change can shrink the page range; clamping here
        // keeps the cursor from pointing past the last page.
        self.page = self.page.clamp(self.filtered_count());
        self
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Filtered and ordered sequence, before pagination
    pub fn ordered(&self) -> Vec<&Property> {
        let mut items = filter(&self.properties, &self.criteria);
        sort(&mut items, self.sort);
        items
    }

    /// Listings the current page shows
    pub fn visible(&self) -> Vec<&Property> {
        let ordered = self.ordered();
        page_slice(&ordered, self.page).to_vec()
    }

    pub fn filtered_count(&self) -> usize {
        self.properties
            .iter()
            .filter(|p| self.criteria.matches(p))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count())
    }
}
