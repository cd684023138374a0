use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::info;

use crate::config::Config;
use crate::db;
use crate::errors::ServiceError;
use crate::models::booking::BookingEntry;

/// Books a viewing. The date must not be in the past and the property must
/// exist; the booking starts out pending.
pub fn create(
    config: &Arc<Config>,
    customer_id: i32,
    property_id: i32,
    booking_date: NaiveDate,
    message: Option<String>,
) -> Result<BookingEntry, ServiceError> {
    if booking_date < Utc::now().date_naive() {
        return Err(ServiceError::Validation("booking_date"));
    }
    let note = message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    let conn = &mut db::establish_connection(config)?;

    let property =
        db::property::get(conn, property_id)?.ok_or(ServiceError::NotFound("property"))?;

    let booking = db::booking::insert(conn, customer_id, property_id, booking_date, note)?;
    info!(
        "customer {} booked a viewing of property {} on {}",
        customer_id, property_id, booking_date
    );

    let mut summaries = db::property::summarize(conn, vec![property])?;
    let summary = summaries.pop().ok_or(ServiceError::NotFound("property"))?;

    Ok(BookingEntry {
        booking_id: booking.id,
        booking_date: booking.booking_date,
        message: booking.message,
        status: booking.status,
        created_at: booking.created_at,
        property: summary,
    })
}

/// Cancels the customer's own pending booking. A booking that is missing,
/// belongs to someone else, or is no longer pending reads as not found.
pub fn cancel(
    config: &Arc<Config>,
    customer_id: i32,
    booking_id: i32,
) -> Result<(), ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    let changed = db::booking::cancel(conn, customer_id, booking_id)?;
    if changed == 0 {
        return Err(ServiceError::NotFound("booking"));
    }

    info!("customer {} cancelled booking {}", customer_id, booking_id);
    Ok(())
}

pub fn list(config: &Arc<Config>, customer_id: i32) -> Result<Vec<BookingEntry>, ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    let rows = db::booking::list_for_customer(conn, customer_id)?;
    let (bookings, properties): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    let summaries = db::property::summarize(conn, properties)?;

    Ok(bookings
        .into_iter()
        .zip(summaries)
        .map(|(booking, property)| BookingEntry {
            booking_id: booking.id,
            booking_date: booking.booking_date,
            message: booking.message,
            status: booking.status,
            created_at: booking.created_at,
            property,
        })
        .collect())
}
