use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use models::customer;
use serde::Deserialize;
use service::customer::{CreateCustomerRequest, CustomerSearchRequest, UpdateCustomerRequest};
use service::pagination::Page;
use tracing::info;
use utoipa::IntoParams;

use super::params::PageParams;
use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Substring of the first name
    pub first_name: Option<String>,
    /// Substring of the last name
    pub last_name: Option<String>,
    /// 0-based page index
    pub page: Option<u64>,
    /// Page size, 1..=100
    pub size: Option<u64>,
    /// `field[,asc|desc]`, several separated by `;`
    pub sort: Option<String>,
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    params(ListQuery),
    responses((status = 200, description = "One page of customers", body = crate::openapi::CustomerPageDoc), (status = 400, description = "Bad query"))
)]
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, JsonApiError>,
) -> Result<Json<Page<customer::Model>>, JsonApiError> {
    let page = PageParams { page: q.page, size: q.size, sort: q.sort }.into_request::<customer::Column>()?;
    let search = CustomerSearchRequest { first_name: q.first_name, last_name: q.last_name };
    let found = state.customers.list_customers(search, page).await?;
    Ok(Json(found))
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CreateCustomerDoc,
    responses((status = 201, description = "Created", body = crate::openapi::CustomerDoc), (status = 400, description = "Invalid request"))
)]
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(input), _): WithRejection<Json<CreateCustomerRequest>, JsonApiError>,
) -> Result<(StatusCode, Json<customer::Model>), JsonApiError> {
    let created = state.customers.create_customer(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "OK", body = crate::openapi::CustomerDoc), (status = 404, description = "Not found"))
)]
pub async fn get(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<Json<customer::Model>, JsonApiError> {
    Ok(Json(state.customers.get_customer(id).await?))
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::UpdateCustomerDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
    WithRejection(Json(input), _): WithRejection<Json<UpdateCustomerRequest>, JsonApiError>,
) -> Result<Json<customer::Model>, JsonApiError> {
    Ok(Json(state.customers.update_customer(id, input).await?))
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found"))
)]
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, JsonApiError>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.delete_customer(id).await?;
    info!(id, "deleted customer");
    Ok(StatusCode::NO_CONTENT)
}
