//! Filter Criteria
//!
//! The ephemeral, view-local combination of search/category/price/sort
//! selections applied to the catalog.

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the server-defined order
    #[default]
    Default,
    /// Price, low to high
    PriceAsc,
    /// Price, high to low
    PriceDesc,
    /// Highest rated first; a missing rating counts as 0
    RatingDesc,
    /// Title, A to Z
    NameAsc,
}

impl SortKey {
    /// Parses the sort selector names exposed by the shell and the catalog
    /// sidebar. Returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "" | "default" => Some(SortKey::Default),
            "price-low" | "price-asc" => Some(SortKey::PriceAsc),
            "price-high" | "price-desc" => Some(SortKey::PriceDesc),
            "rating" => Some(SortKey::RatingDesc),
            "name" => Some(SortKey::NameAsc),
            _ => None,
        }
    }

    /// Human-readable label for the sidebar rendering.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::NameAsc => "Name: A to Z",
        }
    }
}

/// The current filter and sort selections for the catalog view.
///
/// All fields are optional; the default criteria pass every product through
/// unchanged in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Case-insensitive substring matched against title or description
    pub search: Option<String>,

    /// Exact category match, case-insensitive; `None` means all categories
    pub category: Option<String>,

    /// Keep products priced at or above this bound
    pub price_min: Option<f64>,

    /// Keep products priced at or below this bound
    pub price_max: Option<f64>,

    /// Sort applied last, over the filtered set
    pub sort: SortKey,
}

impl Criteria {
    /// Whether no filter or sort is active.
    pub fn is_default(&self) -> bool {
        *self == Criteria::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_selectors() {
        assert_eq!(SortKey::parse("default"), Some(SortKey::Default));
        assert_eq!(SortKey::parse(""), Some(SortKey::Default));
        assert_eq!(SortKey::parse("price-low"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::parse("price-high"), Some(SortKey::PriceDesc));
        assert_eq!(SortKey::parse("rating"), Some(SortKey::RatingDesc));
        assert_eq!(SortKey::parse("name"), Some(SortKey::NameAsc));
        assert_eq!(SortKey::parse("shoe-size"), None);
    }

    #[test]
    fn default_criteria_are_inactive() {
        assert!(Criteria::default().is_default());
        let active = Criteria {
            category: Some("electronics".into()),
            ..Criteria::default()
        };
        assert!(!active.is_default());
    }
}
