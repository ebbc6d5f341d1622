use axum::{extract::State, http::StatusCode, Json};
use service::vehicle_service;
use service::domain::{VehicleCreate, VehicleResponse, VehicleUpdate};

use crate::errors::{ApiJson, ApiPath, ApiQuery, JsonApiError};
use crate::routes::{entity_id, AppState, ListQuery};

#[utoipa::path(
    post, path = "/api/vehicles", tag = "vehicles",
    request_body = crate::openapi::VehicleCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<VehicleCreate>,
) -> Result<(StatusCode, Json<VehicleResponse>), JsonApiError> {
    let created = vehicle_service::create_vehicle(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/vehicles", tag = "vehicles",
    params(ListQuery),
    responses((status = 200, description = "List OK", body = [crate::openapi::VehicleDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<ListQuery>,
) -> Result<Json<Vec<VehicleResponse>>, JsonApiError> {
    Ok(Json(vehicle_service::list_vehicles(&state.db, q.into()).await?))
}

#[utoipa::path(
    get, path = "/api/vehicles/{id}", tag = "vehicles",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<VehicleResponse>, JsonApiError> {
    let id = entity_id(id, "Vehicle")?;
    Ok(Json(vehicle_service::get_vehicle(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/api/vehicles/{id}", tag = "vehicles",
    params(("id" = i64, Path, description = "Vehicle ID")),
    request_body = crate::openapi::VehicleUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Vehicle or referenced customer not found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(changes): ApiJson<VehicleUpdate>,
) -> Result<Json<VehicleResponse>, JsonApiError> {
    let id = entity_id(id, "Vehicle")?;
    Ok(Json(vehicle_service::update_vehicle(&state.db, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/vehicles/{id}", tag = "vehicles",
    params(("id" = i64, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Deleted with its services"),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, JsonApiError> {
    let id = entity_id(id, "Vehicle")?;
    vehicle_service::delete_vehicle(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
