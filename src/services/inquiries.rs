use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::db;
use crate::errors::ServiceError;
use crate::models::inquiry::InquiryEntry;

pub fn create(
    config: &Arc<Config>,
    customer_id: i32,
    property_id: i32,
    message: String,
) -> Result<InquiryEntry, ServiceError> {
    let text = message.trim().to_string();
    if text.is_empty() {
        return Err(ServiceError::Validation("message"));
    }

    let conn = &mut db::establish_connection(config)?;

    let property =
        db::property::get(conn, property_id)?.ok_or(ServiceError::NotFound("property"))?;

    let inquiry = db::inquiry::insert(conn, customer_id, property_id, text)?;
    info!(
        "customer {} sent inquiry {} about property {}",
        customer_id, inquiry.id, property_id
    );

    Ok(InquiryEntry {
        inquiry_id: inquiry.id,
        message: inquiry.message,
        status: inquiry.status,
        created_at: inquiry.created_at,
        property_id: inquiry.property_id,
        property_title: property.title,
        property_location: property.location,
    })
}

pub fn list(config: &Arc<Config>, customer_id: i32) -> Result<Vec<InquiryEntry>, ServiceError> {
    let conn = &mut db::establish_connection(config)?;
    Ok(db::inquiry::list_for_customer(conn, customer_id)?)
}
