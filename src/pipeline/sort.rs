use crate::models::Property;
use std::cmp::Reverse;

/// Ordering applied to the filtered listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Keep the collection's original relative order
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortOption {
    /// Parse the sort selector's value ("asc", "desc", "none")
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "none" => Some(SortOption::None),
            "asc" => Some(SortOption::PriceAscending),
            "desc" => Some(SortOption::PriceDescending),
            _ => None,
        }
    }
}

/// Order the filtered listings in place.
///
/// Both directions use a stable sort on the price key, so equal-price
/// listings retain their relative input order either way.
pub fn sort(items: &mut [&Property], option: SortOption) {
    match option {
        SortOption::None => {}
        SortOption::PriceAscending => items.sort_by_key(|p| p.price),
        SortOption::PriceDescending => items.sort_by_key(|p| Reverse(p.price)),
    }
}
