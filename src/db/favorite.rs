use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;

use super::schema::{favorites, properties};
use crate::models::favorite::{Favorite, NewFavorite};
use crate::models::property::Property;

pub fn exists(
    conn: &mut PgConnection,
    target_customer_id: i32,
    target_property_id: i32,
) -> Result<bool, Error> {
    let found: Vec<i32> = favorites::table
        .filter(favorites::customer_id.eq(target_customer_id))
        .filter(favorites::property_id.eq(target_property_id))
        .select(favorites::id)
        .limit(1)
        .load(conn)?;

    Ok(!found.is_empty())
}

/// Inserts the relation. A concurrent duplicate from the same customer is
/// absorbed by the unique key on (customer_id, property_id).
pub fn insert(
    conn: &mut PgConnection,
    target_customer_id: i32,
    target_property_id: i32,
) -> Result<(), Error> {
    let new_favorite = NewFavorite {
        customer_id: target_customer_id,
        property_id: target_property_id,
        favorited_at: Utc::now(),
    };

    diesel::insert_into(favorites::table)
        .values(new_favorite)
        .on_conflict((favorites::customer_id, favorites::property_id))
        .do_nothing()
        .execute(conn)?;

    Ok(())
}

pub fn remove(
    conn: &mut PgConnection,
    target_customer_id: i32,
    target_property_id: i32,
) -> Result<(), Error> {
    diesel::delete(
        favorites::table
            .filter(favorites::customer_id.eq(target_customer_id))
            .filter(favorites::property_id.eq(target_property_id)),
    )
    .execute(conn)?;

    Ok(())
}

/// All favorites of one customer with the property rows, newest favorite
/// first.
pub fn list_for_customer(
    conn: &mut PgConnection,
    target_customer_id: i32,
) -> Result<Vec<(Favorite, Property)>, Error> {
    favorites::table
        .inner_join(properties::table)
        .filter(favorites::customer_id.eq(target_customer_id))
        .order(favorites::favorited_at.desc())
        .select((Favorite::as_select(), Property::as_select()))
        .load(conn)
}
