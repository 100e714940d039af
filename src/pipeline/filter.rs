use crate::models::Property;
use std::collections::BTreeSet;

/// Amenity a listing can be filtered on.
///
/// Each variant maps to exactly one boolean flag on [`Property`]; the mapping
/// is explicit so a new amenity cannot silently reuse another one's flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Amenity {
    Gym,
    Parking,
}

impl Amenity {
    /// Label shown in the filter panel
    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Gym => "Gym",
            Amenity::Parking => "Parking",
        }
    }

    /// Parse a filter-panel label back into an amenity
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Gym" => Some(Amenity::Gym),
            "Parking" => Some(Amenity::Parking),
            _ => None,
        }
    }

    fn is_present(&self, prop: &Property) -> bool {
        match self {
            Amenity::Gym => prop.gym,
            Amenity::Parking => prop.parking,
        }
    }
}

/// Conjunction of listing predicates; every field defaults to no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub amenities: BTreeSet<Amenity>,
    /// Exact bedroom label, e.g. "2 BHK"
    pub bhk: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, prop: &Property) -> bool {
        let meets_price = self.min_price.map_or(true, |min| prop.price >= min)
            && self.max_price.map_or(true, |max| prop.price <= max);

        // Every selected amenity must be present on the listing.
        let meets_amenities = self.amenities.iter().all(|a| a.is_present(prop));

        let meets_bhk = self
            .bhk
            .as_deref()
            .map_or(true, |label| prop.bhk_label() == label);

        meets_price && meets_amenities && meets_bhk
    }
}

/// Parse a free-text price bound entered in the filter panel.
///
/// Non-numeric or negative input yields no constraint. This replaces the
/// implicit behavior of comparing against NaN with a defined policy.
pub fn parse_price_bound(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|price| *price >= 0)
}

/// Keep the listings satisfying every criterion, in input order
pub fn filter<'a>(properties: &'a [Property], criteria: &FilterCriteria) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|prop| criteria.matches(prop))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(id: &str, price: i64, bhk: u32, gym: bool, parking: bool) -> Property {
        Property {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            address: String::new(),
            price,
            bhk,
            gym,
            parking,
            images: vec![],
        }
    }

    fn sample() -> Vec<Property> {
        vec![
            prop("a", 100, 1, true, false),
            prop("b", 200, 2, false, true),
            prop("c", 150, 2, true, true),
            prop("d", 150, 3, false, false),
        ]
    }

    #[test]
    fn no_constraints_is_identity() {
        let properties = sample();
        let kept = filter(&properties, &FilterCriteria::default());
        assert_eq!(kept.len(), properties.len());
        let ids: Vec<_> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn min_price_partitions_exactly() {
        let properties = sample();
        let criteria = FilterCriteria {
            min_price: Some(150),
            ..Default::default()
        };
        let kept = filter(&properties, &criteria);
        assert!(kept.iter().all(|p| p.price >= 150));
        let excluded: Vec<_> = properties.iter().filter(|p| !criteria.matches(p)).collect();
        assert!(excluded.iter().all(|p| p.price < 150));
        assert_eq!(kept.len() + excluded.len(), properties.len());
    }

    #[test]
    fn textual_min_bound_keeps_only_pricier_listing() {
        let properties = vec![prop("x", 100, 1, true, false), prop("y", 200, 2, false, true)];
        let criteria = FilterCriteria {
            min_price: parse_price_bound("150"),
            ..Default::default()
        };
        let kept = filter(&properties, &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].price, 200);
    }

    #[test]
    fn selected_amenities_are_anded() {
        let criteria = FilterCriteria {
            amenities: [Amenity::Gym, Amenity::Parking].into_iter().collect(),
            ..Default::default()
        };
        // gym present, parking missing: excluded
        assert!(!criteria.matches(&prop("a", 100, 1, true, false)));
        assert!(criteria.matches(&prop("c", 150, 2, true, true)));
    }

    #[test]
    fn bhk_label_must_match_exactly() {
        let criteria = FilterCriteria {
            bhk: Some("2 BHK".to_string()),
            ..Default::default()
        };
        assert!(criteria.matches(&prop("b", 200, 2, false, true)));
        assert!(!criteria.matches(&prop("d", 150, 3, false, false)));
    }

    #[test]
    fn price_bound_parsing_policy() {
        assert_eq!(parse_price_bound("150"), Some(150));
        assert_eq!(parse_price_bound("  9000 "), Some(9000));
        assert_eq!(parse_price_bound(""), None);
        assert_eq!(parse_price_bound("cheap"), None);
        assert_eq!(parse_price_bound("12k"), None);
        assert_eq!(parse_price_bound("-5"), None);
    }

    #[test]
    fn amenity_labels_round_trip() {
        assert_eq!(Amenity::from_label("Gym"), Some(Amenity::Gym));
        assert_eq!(Amenity::from_label("Parking"), Some(Amenity::Parking));
        assert_eq!(Amenity::from_label("Pool"), None);
        assert_eq!(Amenity::Gym.label(), "Gym");
    }
}
