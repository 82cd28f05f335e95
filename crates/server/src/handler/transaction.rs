use crate::{
    middleware::{jwt::auth_middleware, session::session_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynTransactionQueryService,
    domain::{
        requests::{FindAllTransactions, ReportQuery},
        responses::{
            ApiResponse, ApiResponsePagination, DailySalesReport, TransactionResponse,
            TransactionStats,
        },
    },
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transaction",
    security(("bearer_auth" = [])),
    params(FindAllTransactions),
    responses(
        (status = 200, description = "Transactions in the requested period", body = ApiResponsePagination<Vec<TransactionResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<FindAllTransactions>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/transactions/stats",
    tag = "Transaction",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Summary statistics for the requested period", body = ApiResponse<TransactionStats>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_transaction_stats(
    Extension(service): Extension<DynTransactionQueryService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.stats(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/transactions/daily-sales",
    tag = "Transaction",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Per-day sales breakdown for the requested period", body = ApiResponse<DailySalesReport>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_daily_sales(
    Extension(service): Extension<DynTransactionQueryService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<ReportQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.daily_sales(user_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/transactions", get(get_transactions))
        .route("/api/transactions/stats", get(get_transaction_stats))
        .route("/api/transactions/daily-sales", get(get_daily_sales))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(
            app_state.di_container.transaction_query_service.clone(),
        ))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
