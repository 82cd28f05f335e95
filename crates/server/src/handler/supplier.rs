use crate::{
    middleware::{
        jwt::auth_middleware, session::session_middleware, validate::SimpleValidatedJson,
    },
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::DynSupplierService,
    domain::{
        requests::{CreateSupplierRequest, FindAllSuppliers, UpdateSupplierRequest},
        responses::{ApiResponse, ApiResponsePagination, SupplierResponse},
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/suppliers",
    tag = "Supplier",
    security(("bearer_auth" = [])),
    params(FindAllSuppliers),
    responses(
        (status = 200, description = "List of suppliers", body = ApiResponsePagination<Vec<SupplierResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_suppliers(
    Extension(service): Extension<DynSupplierService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<FindAllSuppliers>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/suppliers/{id}",
    tag = "Supplier",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier details", body = ApiResponse<SupplierResponse>),
        (status = 404, description = "Supplier not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_supplier(
    Extension(service): Extension<DynSupplierService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(user_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/suppliers",
    tag = "Supplier",
    security(("bearer_auth" = [])),
    request_body = CreateSupplierRequest,
    responses(
        (status = 201, description = "Supplier created", body = ApiResponse<SupplierResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_supplier(
    Extension(service): Extension<DynSupplierService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateSupplierRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_supplier(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/suppliers/{id}",
    tag = "Supplier",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = UpdateSupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = ApiResponse<SupplierResponse>),
        (status = 404, description = "Supplier not found"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_supplier(
    Extension(service): Extension<DynSupplierService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut body): SimpleValidatedJson<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, HttpError> {
    body.id = Some(id);
    let response = service.update_supplier(user_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/suppliers/{id}",
    tag = "Supplier",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier deleted", body = serde_json::Value),
        (status = 404, description = "Supplier not found"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_supplier(
    Extension(service): Extension<DynSupplierService>,
    Extension(user_id): Extension<i32>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_supplier(user_id, id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn supplier_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/suppliers", get(get_suppliers))
        .route("/api/suppliers/{id}", get(get_supplier))
        .route("/api/suppliers", post(create_supplier))
        .route("/api/suppliers/{id}", put(update_supplier))
        .route("/api/suppliers/{id}", delete(delete_supplier))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.supplier_service.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
