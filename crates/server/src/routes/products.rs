use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::product::{Product, ProductInput};
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses(
        (status = 200, description = "All products", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Product>>, ApiError> {
    let list = state.products.get_all_products().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Product>, ApiError> {
    state
        .products
        .get_product_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<ProductInput>) -> Result<Json<Product>, ApiError> {
    input.validate()?;
    let saved = state.products.save_product(input.into_new_product()).await?;
    info!(id = ?saved.id, name = %saved.name, "created product");
    Ok(Json(saved))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    input.validate()?;
    let Some(mut existing) = state.products.get_product_by_id(id).await? else {
        return Err(ApiError::NotFound);
    };
    existing.apply(input);
    // NotFound here means the row was deleted after the lookup
    let updated = state.products.save_product(existing).await?;
    info!(id, "updated product");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    if state.products.get_product_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    if !state.products.delete_product(id).await? {
        // removed by a concurrent request between lookup and delete
        return Err(ApiError::NotFound);
    }
    info!(id, "deleted product");
    Ok(StatusCode::OK)
}
