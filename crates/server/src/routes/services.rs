use axum::{extract::State, http::StatusCode, Json};
use service::service_record_service;
use service::domain::{ServiceCreate, ServiceResponse, ServiceUpdate};

use crate::errors::{ApiJson, ApiPath, ApiQuery, JsonApiError};
use crate::routes::{entity_id, AppState, ListQuery};

#[utoipa::path(
    post, path = "/api/services", tag = "services",
    request_body = crate::openapi::ServiceCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ServiceCreate>,
) -> Result<(StatusCode, Json<ServiceResponse>), JsonApiError> {
    let created = service_record_service::create_service(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/services", tag = "services",
    params(ListQuery),
    responses((status = 200, description = "List OK", body = [crate::openapi::ServiceDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<ListQuery>,
) -> Result<Json<Vec<ServiceResponse>>, JsonApiError> {
    Ok(Json(service_record_service::list_services(&state.db, q.into()).await?))
}

#[utoipa::path(
    get, path = "/api/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service record ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service record not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ServiceResponse>, JsonApiError> {
    let id = entity_id(id, "Service")?;
    Ok(Json(service_record_service::get_service(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/api/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service record ID")),
    request_body = crate::openapi::ServiceUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service record or referenced vehicle not found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(changes): ApiJson<ServiceUpdate>,
) -> Result<Json<ServiceResponse>, JsonApiError> {
    let id = entity_id(id, "Service")?;
    Ok(Json(service_record_service::update_service(&state.db, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/services/{id}", tag = "services",
    params(("id" = i64, Path, description = "Service record ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Service record not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, JsonApiError> {
    let id = entity_id(id, "Service")?;
    service_record_service::delete_service(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
