use std::sync::Arc;

use log::debug;

use crate::config::Config;
use crate::db;
use crate::errors::ServiceError;
use crate::models::filter::{PageResult, SearchParams};
use crate::models::property::{ImageView, PropertyDetail, PropertySummary, PropertyType};

/// Filtered, paginated property search. Pure read: one count and one page
/// slice under the same predicate. Zero matches is a valid empty page.
pub fn search(config: &Arc<Config>, params: SearchParams) -> Result<PageResult, ServiceError> {
    let filter = params.into_filter();
    let conn = &mut db::establish_connection(config)?;

    let result = db::property::search(conn, &filter)?;
    debug!(
        "search returned {} of {} matches (page {}/{})",
        result.records.len(),
        result.total_count,
        result.current_page,
        result.total_pages
    );

    Ok(result)
}

pub fn detail(config: &Arc<Config>, property_id: i32) -> Result<PropertyDetail, ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    let property = db::property::get(conn, property_id)?
        .ok_or(ServiceError::NotFound("property"))?;
    let gallery = db::property::images(conn, property_id)?;

    let mut summaries = db::property::summarize(conn, vec![property])?;
    let summary = summaries.pop().ok_or(ServiceError::NotFound("property"))?;

    Ok(PropertyDetail {
        summary,
        images: gallery
            .into_iter()
            .map(|image| ImageView {
                image_path: image.image_path,
                alt_text: image.alt_text,
            })
            .collect(),
    })
}

/// Promoted listings for the landing page, capped and newest first.
pub fn featured(config: &Arc<Config>) -> Result<Vec<PropertySummary>, ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    let rows = db::property::featured(conn)?;
    Ok(db::property::summarize(conn, rows)?)
}

/// Dropdown data for the search form: all property types plus every
/// location a property has been listed in.
pub fn filter_meta(config: &Arc<Config>) -> Result<(Vec<PropertyType>, Vec<String>), ServiceError> {
    let conn = &mut db::establish_connection(config)?;

    let types = db::property::all_types(conn)?;
    let locations = db::property::distinct_locations(conn)?;

    Ok((types, locations))
}
