use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use models::product;
use serde::Deserialize;
use service::pagination::Page;
use service::product::{CreateProductRequest, ProductSearchRequest, UpdateProductRequest};
use tracing::info;
use utoipa::IntoParams;

use super::params::PageParams;
use crate::errors::JsonApiError;
use crate::state::AppState;

// Flat on purpose: serde(flatten) breaks numeric parsing of query strings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-sensitive substring of the name
    pub partial_name: Option<String>,
    /// Inclusive lower price bound
    pub minimum_price: Option<f64>,
    /// Inclusive upper price bound
    pub maximum_price: Option<f64>,
    /// Inclusive lower quantity bound
    pub minimum_quantity: Option<i32>,
    /// 0-based page index
    pub page: Option<u64>,
    /// Page size, 1..=100
    pub size: Option<u64>,
    /// `field[,asc|desc]`, several separated by `;`
    pub sort: Option<String>,
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(ListQuery),
    responses((status = 200, description = "One page of products", body = crate::openapi::ProductPageDoc), (status = 400, description = "Bad query"))
)]
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, JsonApiError>,
) -> Result<Json<Page<product::Model>>, JsonApiError> {
    let page = PageParams { page: q.page, size: q.size, sort: q.sort }.into_request::<product::Column>()?;
    let search = ProductSearchRequest {
        partial_name: q.partial_name,
        minimum_price: q.minimum_price,
        maximum_price: q.maximum_price,
        minimum_quantity: q.minimum_quantity,
    };
    let found = state.products.search_products(search, page).await?;
    info!(count = found.content.len(), total = found.total_elements, "list products");
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses((status = 201, description = "Created", body = crate::openapi::ProductDoc), (status = 400, description = "Invalid request"))
)]
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateProductRequest>, JsonApiError>,
) -> Result<(StatusCode, Json<product::Model>), JsonApiError> {
    let created = state.products.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses((status = 200, description = "OK", body = crate::openapi::ProductDoc), (status = 404, description = "Not found"))
)]
pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<Json<product::Model>, JsonApiError> {
    Ok(Json(state.products.get_product(id).await?))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::openapi::UpdateProductDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
    WithRejection(Json(input), _): WithRejection<Json<UpdateProductRequest>, JsonApiError>,
) -> Result<Json<product::Model>, JsonApiError> {
    Ok(Json(state.products.update_product(id, input).await?))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found"))
)]
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<StatusCode, JsonApiError> {
    state.products.delete_product(id).await?;
    info!(id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}
