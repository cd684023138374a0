use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use super::property::PropertySummary;

#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::db::schema::favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Favorite {
    pub id: i32,
    pub customer_id: i32,
    pub property_id: i32,
    pub favorited_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::db::schema::favorites)]
pub struct NewFavorite {
    pub customer_id: i32,
    pub property_id: i32,
    pub favorited_at: DateTime<Utc>,
}

/// Outcome of a favorite toggle. The relation cycles between the two
/// states; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    Added,
    Removed,
}

impl FavoriteState {
    /// The state a toggle lands in, given whether the relation currently
    /// exists.
    pub fn after_toggle(currently_favorited: bool) -> Self {
        if currently_favorited {
            FavoriteState::Removed
        } else {
            FavoriteState::Added
        }
    }

    pub fn is_favorited(self) -> bool {
        matches!(self, FavoriteState::Added)
    }
}

#[derive(Debug, Serialize)]
pub struct FavoriteEntry {
    pub favorite_id: i32,
    pub favorited_at: DateTime<Utc>,
    pub property: PropertySummary,
}
