use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::{
    config::Config,
    errors::ServiceError,
    models::{
        booking::BookingEntry,
        favorite::{FavoriteEntry, FavoriteState},
        filter::{PageResult, SearchParams},
        inquiry::InquiryEntry,
        property::{PropertyDetail, PropertySummary, PropertyType},
    },
    services::{bookings, favorites, inquiries, properties},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Customer identity established by the fronting session layer, which
/// forwards it as the `x-customer-id` header. Absent or garbled means
/// anonymous.
pub struct Identity(pub Option<i32>);

impl Identity {
    pub fn require(self) -> Result<i32, ServiceError> {
        self.0.ok_or(ServiceError::AuthRequired)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let customer_id = parts
            .headers
            .get("x-customer-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i32>().ok());

        Ok(Identity(customer_id))
    }
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub property_id: i32,
}

#[derive(Deserialize)]
pub struct BookingRequest {
    pub property_id: i32,
    pub booking_date: NaiveDate,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct InquiryRequest {
    pub property_id: i32,
    pub message: String,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub property_id: i32,
    pub state: FavoriteState,
}

#[derive(Serialize)]
pub struct FilterMetaResponse {
    pub types: Vec<PropertyType>,
    pub locations: Vec<String>,
}

#[derive(Serialize)]
pub struct FeaturedResponse {
    pub properties: Vec<PropertySummary>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/properties", get(search_properties))
        .route("/api/properties/featured", get(featured_properties))
        .route("/api/properties/meta", get(filter_meta))
        .route("/api/properties/:id", get(property_detail))
        .route("/api/favorites", get(list_favorites))
        .route("/api/favorites/toggle", post(toggle_favorite))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/:id/cancel", post(cancel_booking))
        .route("/api/inquiries", get(list_inquiries).post(create_inquiry))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) {
    let bind_addr = state
        .config
        .http_bind_address
        .clone()
        .unwrap_or_else(|| "0.0.0.0:8080".to_string());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind http listener on {}: {}", bind_addr, err));
    let app = router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .expect("HTTP server crashed");
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type, x-customer-id"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
}

async fn search_properties(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<PageResult>>, ServiceError> {
    properties::search(&state.config, params).map(|data| Json(ApiResponse { data }))
}

async fn featured_properties(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FeaturedResponse>>, ServiceError> {
    properties::featured(&state.config).map(|properties| {
        Json(ApiResponse {
            data: FeaturedResponse { properties },
        })
    })
}

async fn filter_meta(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FilterMetaResponse>>, ServiceError> {
    properties::filter_meta(&state.config).map(|(types, locations)| {
        Json(ApiResponse {
            data: FilterMetaResponse { types, locations },
        })
    })
}

async fn property_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PropertyDetail>>, ServiceError> {
    properties::detail(&state.config, id).map(|data| Json(ApiResponse { data }))
}

async fn toggle_favorite(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<ToggleRequest>,
) -> Result<Json<ApiResponse<ToggleResponse>>, ServiceError> {
    let customer_id = identity.require()?;

    favorites::toggle(&state.config, customer_id, body.property_id).map(|toggled| {
        Json(ApiResponse {
            data: ToggleResponse {
                property_id: body.property_id,
                state: toggled,
            },
        })
    })
}

async fn list_favorites(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<ApiResponse<Vec<FavoriteEntry>>>, ServiceError> {
    let customer_id = identity.require()?;
    favorites::list(&state.config, customer_id).map(|data| Json(ApiResponse { data }))
}

async fn create_booking(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<BookingRequest>,
) -> Result<Json<ApiResponse<BookingEntry>>, ServiceError> {
    let customer_id = identity.require()?;

    bookings::create(
        &state.config,
        customer_id,
        body.property_id,
        body.booking_date,
        body.message,
    )
    .map(|data| Json(ApiResponse { data }))
}

async fn list_bookings(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<ApiResponse<Vec<BookingEntry>>>, ServiceError> {
    let customer_id = identity.require()?;
    bookings::list(&state.config, customer_id).map(|data| Json(ApiResponse { data }))
}

async fn cancel_booking(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    let customer_id = identity.require()?;
    bookings::cancel(&state.config, customer_id, id).map(|_| StatusCode::NO_CONTENT)
}

async fn create_inquiry(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<InquiryRequest>,
) -> Result<Json<ApiResponse<InquiryEntry>>, ServiceError> {
    let customer_id = identity.require()?;

    inquiries::create(&state.config, customer_id, body.property_id, body.message)
        .map(|data| Json(ApiResponse { data }))
}

async fn list_inquiries(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<ApiResponse<Vec<InquiryEntry>>>, ServiceError> {
    let customer_id = identity.require()?;
    inquiries::list(&state.config, customer_id).map(|data| Json(ApiResponse { data }))
}
