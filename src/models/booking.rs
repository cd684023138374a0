use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::Serialize;

use super::property::PropertySummary;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::db::schema::bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: i32,
    pub customer_id: i32,
    pub property_id: i32,
    pub booking_date: NaiveDate,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::db::schema::bookings)]
pub struct NewBooking {
    pub customer_id: i32,
    pub property_id: i32,
    pub booking_date: NaiveDate,
    pub message: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct BookingEntry {
    pub booking_id: i32,
    pub booking_date: NaiveDate,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub property: PropertySummary,
}
