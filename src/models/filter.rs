use serde::{Deserialize, Serialize};

use super::property::{ListingKind, PropertySummary};

/// Listing grids show a fixed number of cards per page.
pub const PAGE_SIZE: i64 = 9;

/// Raw search-form input, exactly as it arrives in the query string.
/// Every field is optional and arrives as text; [`SearchParams::into_filter`]
/// is where values get validated.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    pub sale: Option<String>,
    pub location: Option<String>,
    pub keyword: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    pub page: Option<String>,
}

impl SearchParams {
    /// Lenient conversion into a typed filter. A field that fails to parse
    /// as a positive number is dropped rather than failing the whole
    /// request, matching how the search form has always behaved.
    pub fn into_filter(self) -> PropertyFilter {
        PropertyFilter {
            property_type: parse_positive::<i32>(self.property_type.as_deref()),
            listing_kind: nonempty(self.sale.as_deref()).and_then(ListingKind::parse),
            location: nonempty(self.location.as_deref()).map(str::to_owned),
            keyword: nonempty(self.keyword.as_deref()).map(str::to_owned),
            min_price: parse_price(self.min_price.as_deref()),
            max_price: parse_price(self.max_price.as_deref()),
            min_bedrooms: parse_positive::<i32>(self.bedrooms.as_deref()),
            page: parse_page(self.page.as_deref()),
        }
    }
}

/// Conjunctive search criteria for the property listing. Absent fields
/// impose no constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFilter {
    pub property_type: Option<i32>,
    pub listing_kind: Option<ListingKind>,
    pub location: Option<String>,
    pub keyword: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<i32>,
    pub page: i64,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        PropertyFilter {
            property_type: None,
            listing_kind: None,
            location: None,
            keyword: None,
            min_price: None,
            max_price: None,
            min_bedrooms: None,
            page: 1,
        }
    }
}

impl PropertyFilter {
    /// Saturates so an absurd page number from the query string stays a
    /// valid (if pointless) offset instead of overflowing.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(PAGE_SIZE)
    }
}

fn nonempty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_positive<T>(raw: Option<&str>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    nonempty(raw)
        .and_then(|s| s.parse::<T>().ok())
        .filter(|n| *n > T::default())
}

// prices must be finite: "1e999" overflows to infinity, which is no bound
fn parse_price(raw: Option<&str>) -> Option<f64> {
    nonempty(raw)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n > 0.0)
}

fn parse_page(raw: Option<&str>) -> i64 {
    nonempty(raw)
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(1)
        .max(1)
}

/// One page of search results plus the counts the pagination UI needs.
#[derive(Debug, Serialize)]
pub struct PageResult {
    pub records: Vec<PropertySummary>,
    pub total_count: i64,
    pub page_size: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl PageResult {
    pub fn new(records: Vec<PropertySummary>, total_count: i64, current_page: i64) -> Self {
        PageResult {
            records,
            total_count,
            page_size: PAGE_SIZE,
            current_page,
            total_pages: total_pages(total_count, PAGE_SIZE),
        }
    }
}

pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if total_count <= 0 {
        0
    } else {
        (total_count + page_size - 1) / page_size
    }
}
