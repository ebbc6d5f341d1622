use axum::{extract::State, http::StatusCode, Json};
use service::customer_service;
use service::domain::{CustomerCreate, CustomerResponse, CustomerUpdate};

use crate::errors::{ApiJson, ApiPath, ApiQuery, JsonApiError};
use crate::routes::{entity_id, AppState, ListQuery};

#[utoipa::path(
    post, path = "/api/customers", tag = "customers",
    request_body = crate::openapi::CustomerCreateDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Email already registered", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CustomerCreate>,
) -> Result<(StatusCode, Json<CustomerResponse>), JsonApiError> {
    let created = customer_service::create_customer(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/customers", tag = "customers",
    params(ListQuery),
    responses((status = 200, description = "List OK", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<ListQuery>,
) -> Result<Json<Vec<CustomerResponse>>, JsonApiError> {
    Ok(Json(customer_service::list_customers(&state.db, q.into()).await?))
}

#[utoipa::path(
    get, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CustomerResponse>, JsonApiError> {
    let id = entity_id(id, "Customer")?;
    Ok(Json(customer_service::get_customer(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Email already registered", body = crate::openapi::ErrorBody),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorBody),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(changes): ApiJson<CustomerUpdate>,
) -> Result<Json<CustomerResponse>, JsonApiError> {
    let id = entity_id(id, "Customer")?;
    Ok(Json(customer_service::update_customer(&state.db, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted with its vehicles and services"),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, JsonApiError> {
    let id = entity_id(id, "Customer")?;
    customer_service::delete_customer(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
