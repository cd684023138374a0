use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

pub const STATUS_NEW: &str = "new";

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::db::schema::inquiries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Inquiry {
    pub id: i32,
    pub customer_id: i32,
    pub property_id: i32,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::db::schema::inquiries)]
pub struct NewInquiry {
    pub customer_id: i32,
    pub property_id: i32,
    pub message: String,
    pub status: String,
}

/// A customer's inquiry with just enough property context to render the
/// inquiries page.
#[derive(Debug, Serialize)]
pub struct InquiryEntry {
    pub inquiry_id: i32,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub property_id: i32,
    pub property_title: String,
    pub property_location: String,
}
