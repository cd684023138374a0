use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::Error;

use super::schema::{bookings, properties};
use crate::models::booking::{Booking, NewBooking, STATUS_CANCELLED, STATUS_PENDING};
use crate::models::property::Property;

pub fn insert(
    conn: &mut PgConnection,
    target_customer_id: i32,
    target_property_id: i32,
    date: NaiveDate,
    note: Option<String>,
) -> Result<Booking, Error> {
    let new_booking = NewBooking {
        customer_id: target_customer_id,
        property_id: target_property_id,
        booking_date: date,
        message: note,
        status: STATUS_PENDING.to_string(),
    };

    diesel::insert_into(bookings::table)
        .values(new_booking)
        .returning(Booking::as_returning())
        .get_result(conn)
}

/// Cancels the customer's own pending booking. Returns how many rows
/// changed, so the caller can tell a stale id from a successful cancel.
pub fn cancel(
    conn: &mut PgConnection,
    target_customer_id: i32,
    target_booking_id: i32,
) -> Result<usize, Error> {
    diesel::update(
        bookings::table
            .filter(bookings::id.eq(target_booking_id))
            .filter(bookings::customer_id.eq(target_customer_id))
            .filter(bookings::status.eq(STATUS_PENDING)),
    )
    .set(bookings::status.eq(STATUS_CANCELLED))
    .execute(conn)
}

pub fn list_for_customer(
    conn: &mut PgConnection,
    target_customer_id: i32,
) -> Result<Vec<(Booking, Property)>, Error> {
    bookings::table
        .inner_join(properties::table)
        .filter(bookings::customer_id.eq(target_customer_id))
        .order(bookings::created_at.desc())
        .select((Booking::as_select(), Property::as_select()))
        .load(conn)
}
