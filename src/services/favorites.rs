use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::db;
use crate::errors::ServiceError;
use crate::models::favorite::{FavoriteEntry, FavoriteState};

/// Flips the (customer, property) favorite relation. Present removes,
/// absent adds; repeated calls alternate deterministically.
pub fn toggle(
    config: &Arc<Config>,
    customer_id: i32,
    property_id: i32,
) -> Result<FavoriteState, ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    if !db::property::exists(conn, property_id)? {
        return Err(ServiceError::NotFound("property"));
    }

    let currently_favorited = db::favorite::exists(conn, customer_id, property_id)?;
    let state = FavoriteState::after_toggle(currently_favorited);

    match state {
        FavoriteState::Added => db::favorite::insert(conn, customer_id, property_id)?,
        FavoriteState::Removed => db::favorite::remove(conn, customer_id, property_id)?,
    }

    info!(
        "customer {} favorite for property {}: {:?}",
        customer_id, property_id, state
    );

    Ok(state)
}

pub fn list(config: &Arc<Config>, customer_id: i32) -> Result<Vec<FavoriteEntry>, ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    let rows = db::favorite::list_for_customer(conn, customer_id)?;
    let (favorites, properties): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    let summaries = db::property::summarize(conn, properties)?;

    Ok(favorites
        .into_iter()
        .zip(summaries)
        .map(|(favorite, property)| FavoriteEntry {
            favorite_id: favorite.id,
            favorited_at: favorite.favorited_at,
            property,
        })
        .collect())
}
