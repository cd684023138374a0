use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

/// Request-level failure taxonomy. Malformed filter values never show up
/// here: they are dropped field-by-field while parsing the search form.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("datastore unavailable: {0}")]
    DataStoreUnavailable(#[from] diesel::ConnectionError),

    #[error("query failed: {0}")]
    Datastore(#[from] diesel::result::Error),

    #[error("authentication required")]
    AuthRequired,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid {0}")]
    Validation(&'static str),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match self {
            ServiceError::DataStoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Datastore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::AuthRequired => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            error!("request failed: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}
