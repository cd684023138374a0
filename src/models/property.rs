use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

/// Whether a property is listed for rent or for sale. Stored as the
/// `is_for_rent` flag on the properties table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Rent,
    Sale,
}

impl ListingKind {
    pub fn is_for_rent(self) -> bool {
        matches!(self, ListingKind::Rent)
    }

    pub fn from_flag(is_for_rent: bool) -> Self {
        if is_for_rent {
            ListingKind::Rent
        } else {
            ListingKind::Sale
        }
    }

    /// Accepts the spelled-out kind as well as the legacy numeric flag
    /// the old search form submitted ("1" = rent, "0" = sale).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rent" | "1" => Some(ListingKind::Rent),
            "sale" | "0" => Some(ListingKind::Sale),
            _ => None,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::db::schema::properties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Property {
    pub id: i32,
    pub type_id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub is_for_rent: bool,
    pub is_available: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Queryable, Selectable, Clone, Serialize)]
#[diesel(table_name = crate::db::schema::property_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PropertyType {
    pub id: i32,
    pub type_name: String,
}

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::db::schema::property_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PropertyImage {
    pub id: i32,
    pub property_id: i32,
    pub image_path: String,
    pub alt_text: Option<String>,
    pub is_primary: bool,
}

/// One property as it appears in listing grids: row data joined with its
/// type name and primary image.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub listing_kind: ListingKind,
    pub type_id: i32,
    pub type_name: String,
    pub is_available: bool,
    pub is_featured: bool,
    pub image: Option<String>,
}

impl PropertySummary {
    pub fn new(property: Property, type_name: String, image: Option<String>) -> Self {
        PropertySummary {
            id: property.id,
            title: property.title,
            description: property.description,
            location: property.location,
            price: property.price,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            listing_kind: ListingKind::from_flag(property.is_for_rent),
            type_id: property.type_id,
            type_name,
            is_available: property.is_available,
            is_featured: property.is_featured,
            image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageView {
    pub image_path: String,
    pub alt_text: Option<String>,
}

/// Detail-page view: the summary plus the full image gallery.
#[derive(Debug, Serialize)]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub summary: PropertySummary,
    pub images: Vec<ImageView>,
}
