use std::collections::HashMap;

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::result::Error;

use super::schema::{properties, property_images, property_types};
use crate::models::filter::{PageResult, PropertyFilter, PAGE_SIZE};
use crate::models::property::{Property, PropertyImage, PropertySummary, PropertyType};

pub const FEATURED_LIMIT: i64 = 6;

type BoxedProperties = properties::BoxedQuery<'static, Pg>;

/// Applies the filter as a conjunction over available properties. Both the
/// count and the page query are built here so the two can never disagree
/// about which rows match.
fn filtered(filter: &PropertyFilter) -> BoxedProperties {
    let mut query = properties::table
        .into_boxed()
        .filter(properties::is_available.eq(true));

    if let Some(type_id) = filter.property_type {
        query = query.filter(properties::type_id.eq(type_id));
    }
    if let Some(kind) = filter.listing_kind {
        query = query.filter(properties::is_for_rent.eq(kind.is_for_rent()));
    }
    if let Some(location) = &filter.location {
        query = query.filter(properties::location.eq(location.clone()));
    }
    if let Some(keyword) = &filter.keyword {
        let pattern = format!("%{}%", keyword);
        query = query.filter(
            properties::title
                .ilike(pattern.clone())
                .or(properties::description.ilike(pattern)),
        );
    }
    if let Some(min_price) = filter.min_price {
        query = query.filter(properties::price.ge(min_price));
    }
    if let Some(max_price) = filter.max_price {
        query = query.filter(properties::price.le(max_price));
    }
    if let Some(min_bedrooms) = filter.min_bedrooms {
        query = query.filter(properties::bedrooms.ge(min_bedrooms));
    }

    query
}

fn count_query(filter: &PropertyFilter) -> properties::BoxedQuery<'static, Pg, diesel::sql_types::BigInt> {
    filtered(filter).count()
}

fn page_query(filter: &PropertyFilter) -> BoxedProperties {
    filtered(filter)
        .order(properties::id.desc())
        .limit(PAGE_SIZE)
        .offset(filter.offset())
}

/// Runs the search: one count under the full predicate, one page slice under
/// the same predicate. A page past the end comes back empty with the count
/// still correct.
pub fn search(conn: &mut PgConnection, filter: &PropertyFilter) -> Result<PageResult, Error> {
    let total_count: i64 = count_query(filter).get_result(conn)?;
    let page: Vec<Property> = page_query(filter).load(conn)?;
    let records = summarize(conn, page)?;

    Ok(PageResult::new(records, total_count, filter.page))
}

/// Resolves type names and primary images for a batch of rows, preserving
/// the input order.
pub fn summarize(
    conn: &mut PgConnection,
    rows: Vec<Property>,
) -> Result<Vec<PropertySummary>, Error> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|p| p.id).collect();
    let mut type_ids: Vec<i32> = rows.iter().map(|p| p.type_id).collect();
    type_ids.sort_unstable();
    type_ids.dedup();

    let type_names: HashMap<i32, String> = property_types::table
        .filter(property_types::id.eq_any(&type_ids))
        .select((property_types::id, property_types::type_name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    let primary_images: HashMap<i32, String> = property_images::table
        .filter(property_images::property_id.eq_any(&ids))
        .filter(property_images::is_primary.eq(true))
        .select((property_images::property_id, property_images::image_path))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    Ok(rows
        .into_iter()
        .map(|property| {
            let type_name = type_names
                .get(&property.type_id)
                .cloned()
                .unwrap_or_default();
            let image = primary_images.get(&property.id).cloned();
            PropertySummary::new(property, type_name, image)
        })
        .collect())
}

pub fn exists(conn: &mut PgConnection, target_id: i32) -> Result<bool, Error> {
    let found: Vec<i32> = properties::table
        .filter(properties::id.eq(target_id))
        .select(properties::id)
        .limit(1)
        .load(conn)?;

    Ok(!found.is_empty())
}

pub fn get(conn: &mut PgConnection, target_id: i32) -> Result<Option<Property>, Error> {
    properties::table
        .filter(properties::id.eq(target_id))
        .select(Property::as_select())
        .first(conn)
        .optional()
}

pub fn images(conn: &mut PgConnection, target_id: i32) -> Result<Vec<PropertyImage>, Error> {
    property_images::table
        .filter(property_images::property_id.eq(target_id))
        .order((property_images::is_primary.desc(), property_images::id.asc()))
        .select(PropertyImage::as_select())
        .load(conn)
}

pub fn featured(conn: &mut PgConnection) -> Result<Vec<Property>, Error> {
    properties::table
        .filter(properties::is_available.eq(true))
        .filter(properties::is_featured.eq(true))
        .order(properties::id.desc())
        .limit(FEATURED_LIMIT)
        .select(Property::as_select())
        .load(conn)
}

pub fn all_types(conn: &mut PgConnection) -> Result<Vec<PropertyType>, Error> {
    property_types::table
        .order(property_types::type_name.asc())
        .select(PropertyType::as_select())
        .load(conn)
}

pub fn distinct_locations(conn: &mut PgConnection) -> Result<Vec<String>, Error> {
    properties::table
        .select(properties::location)
        .distinct()
        .order(properties::location.asc())
        .load(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::ListingKind;

    fn rendered_sql<Q>(query: &Q) -> String
    where
        Q: diesel::query_builder::QueryFragment<Pg>,
    {
        diesel::debug_query::<Pg, _>(query).to_string()
    }

    fn where_clause(sql: &str) -> String {
        let statement = sql.split(" -- binds:").next().unwrap_or(sql);
        let after_where = statement
            .split_once(" WHERE ")
            .map(|(_, rest)| rest)
            .unwrap_or("");
        after_where
            .split(" ORDER BY ")
            .next()
            .unwrap_or("")
            .trim()
            .to_string()
    }

    fn full_filter() -> PropertyFilter {
        PropertyFilter {
            property_type: Some(2),
            listing_kind: Some(ListingKind::Sale),
            location: Some("London".to_string()),
            keyword: Some("garden".to_string()),
            min_price: Some(100_000.0),
            max_price: Some(500_000.0),
            min_bedrooms: Some(2),
            page: 1,
        }
    }

    #[test]
    fn empty_filter_only_constrains_availability() {
        let sql = rendered_sql(&page_query(&PropertyFilter::default()));
        assert!(sql.contains(r#""properties"."is_available""#));
        assert!(!sql.contains(" AND "));
        assert!(sql.contains(r#"ORDER BY "properties"."id" DESC"#));
    }

    #[test]
    fn count_and_page_share_the_same_predicate() {
        let filter = full_filter();
        let count_sql = rendered_sql(&count_query(&filter));
        let page_sql = rendered_sql(&page_query(&filter));
        assert_eq!(where_clause(&count_sql), where_clause(&page_sql));
    }

    #[test]
    fn each_filter_field_appends_one_conjunct() {
        let base = rendered_sql(&page_query(&PropertyFilter::default()));
        let base_conjuncts = base.matches(" AND ").count();

        let mut with_location = PropertyFilter::default();
        with_location.location = Some("York".to_string());
        let one_more = rendered_sql(&page_query(&with_location));
        assert_eq!(one_more.matches(" AND ").count(), base_conjuncts + 1);

        let full = rendered_sql(&page_query(&full_filter()));
        assert_eq!(full.matches(" AND ").count(), base_conjuncts + 7);
    }

    #[test]
    fn keyword_matches_title_or_description_case_insensitively() {
        let mut filter = PropertyFilter::default();
        filter.keyword = Some("Garden".to_string());
        let sql = rendered_sql(&page_query(&filter));

        assert!(sql.contains(r#""properties"."title" ILIKE"#));
        assert!(sql.contains(r#""properties"."description" ILIKE"#));
        assert!(sql.contains("%Garden%"));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut filter = PropertyFilter::default();
        filter.min_price = Some(100.0);
        filter.max_price = Some(200.0);
        let sql = rendered_sql(&page_query(&filter));

        assert!(sql.contains(r#""properties"."price" >="#));
        assert!(sql.contains(r#""properties"."price" <="#));
    }

    #[test]
    fn bedrooms_filter_is_a_floor() {
        let mut filter = PropertyFilter::default();
        filter.min_bedrooms = Some(3);
        let sql = rendered_sql(&page_query(&filter));

        assert!(sql.contains(r#""properties"."bedrooms" >="#));
    }

    #[test]
    fn later_pages_offset_by_whole_pages() {
        let mut filter = PropertyFilter::default();
        filter.page = 3;
        let sql = rendered_sql(&page_query(&filter));

        // limit and offset are bound parameters; check the bind values
        assert!(sql.contains(&format!("{}, {}", PAGE_SIZE, 2 * PAGE_SIZE)));
    }
}
