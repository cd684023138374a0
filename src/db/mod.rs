pub mod booking;
pub mod favorite;
pub mod inquiry;
pub mod property;
pub mod schema;

use diesel::{Connection, ConnectionError, PgConnection};

use crate::config::Config;

/// One connection per request; every caller maps a failure here to the
/// datastore-unavailable condition rather than an empty result.
pub fn establish_connection(config: &Config) -> Result<PgConnection, ConnectionError> {
    PgConnection::establish(&config.db_path)
}
