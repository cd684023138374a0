use diesel::prelude::*;
use diesel::result::Error;

use super::schema::{inquiries, properties};
use crate::models::inquiry::{Inquiry, InquiryEntry, NewInquiry, STATUS_NEW};

pub fn insert(
    conn: &mut PgConnection,
    target_customer_id: i32,
    target_property_id: i32,
    text: String,
) -> Result<Inquiry, Error> {
    let new_inquiry = NewInquiry {
        customer_id: target_customer_id,
        property_id: target_property_id,
        message: text,
        status: STATUS_NEW.to_string(),
    };

    diesel::insert_into(inquiries::table)
        .values(new_inquiry)
        .returning(Inquiry::as_returning())
        .get_result(conn)
}

pub fn list_for_customer(
    conn: &mut PgConnection,
    target_customer_id: i32,
) -> Result<Vec<InquiryEntry>, Error> {
    let rows: Vec<(Inquiry, String, String)> = inquiries::table
        .inner_join(properties::table)
        .filter(inquiries::customer_id.eq(target_customer_id))
        .order(inquiries::created_at.desc())
        .select((
            Inquiry::as_select(),
            properties::title,
            properties::location,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(inquiry, title, location)| InquiryEntry {
            inquiry_id: inquiry.id,
            message: inquiry.message,
            status: inquiry.status,
            created_at: inquiry.created_at,
            property_id: inquiry.property_id,
            property_title: title,
            property_location: location,
        })
        .collect())
}
