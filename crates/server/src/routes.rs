use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderValue,
    routing::get,
    Json, Router,
};
use configs::AppSettings;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;
use service::errors::ServiceError;
use service::pagination::ListParams;

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;

pub mod customers;
pub mod services;
pub mod vehicles;

/// Shared handler state; handlers keep nothing between requests.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: Arc<AppSettings>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, settings: AppSettings) -> Self {
        Self { db, settings: Arc::new(settings) }
    }
}

/// `skip`/`limit` query parameters shared by the list endpoints.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Rows to skip (default 0)
    pub skip: Option<u64>,
    /// Maximum rows returned (default 100)
    pub limit: Option<u64>,
}

impl From<ListQuery> for ListParams {
    fn from(q: ListQuery) -> Self {
        ListParams::new(q.skip, q.limit)
    }
}

/// Ids outside the `i32` key range name no stored row.
pub(crate) fn entity_id(raw: i64, entity: &str) -> Result<i32, JsonApiError> {
    i32::try_from(raw).map_err(|_| ServiceError::not_found(entity).into())
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::healthy())
}

async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.settings.project_name.clone();
    Json(doc)
}

/// CORS from the configured origins, with credentials; `*` mirrors the caller.
pub fn build_cors(settings: &AppSettings) -> CorsLayer {
    let allow_origin = if settings.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/customers", get(customers::list).post(customers::create))
        .route(
            "/api/customers/:id",
            get(customers::get).put(customers::update).delete(customers::delete),
        )
        .route("/api/vehicles", get(vehicles::list).post(vehicles::create))
        .route(
            "/api/vehicles/:id",
            get(vehicles::get).put(vehicles::update).delete(vehicles::delete),
        )
        .route("/api/services", get(services::list).post(services::create))
        .route(
            "/api/services/:id",
            get(services::get).put(services::update).delete(services::delete),
        )
        .route("/api/openapi.json", get(openapi_json));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
