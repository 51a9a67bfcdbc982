use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::product::ProductDto;
use tracing::info;

use crate::{errors::ApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "All products", body = [crate::openapi::ProductDtoDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state.products.get_all_products().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDtoDoc),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<ProductDto>, ApiError> {
    state.products.get_product_by_id(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductDtoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDtoDoc),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<ProductDto>) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let created = state.products.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID; overrides any id in the body")),
    request_body = crate::openapi::ProductDtoDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDtoDoc),
        (status = 400, description = "Malformed id or body"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i64>, Json(input): Json<ProductDto>) -> Result<Json<ProductDto>, ApiError> {
    state.products.update_product(id, input).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    if state.products.delete_product(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
