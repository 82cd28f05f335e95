use crate::{
    domain::{
        requests::{FindAllTransactions, ReportQuery},
        responses::{
            ApiResponse, ApiResponsePagination, DailySalesReport, TransactionResponse,
            TransactionStats,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::Transaction as TransactionModel,
    utils::DateRange,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;
pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllTransactions,
        range: &DateRange,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError>;

    /// Every transaction in the range, newest first, unpaginated. Feeds the
    /// summary statistics and daily breakdown.
    async fn find_by_range(
        &self,
        user_id: i32,
        range: &DateRange,
        search: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
}

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllTransactions,
    ) -> Result<ApiResponsePagination<Vec<TransactionResponse>>, ServiceError>;
    async fn stats(
        &self,
        user_id: i32,
        query: &ReportQuery,
    ) -> Result<ApiResponse<TransactionStats>, ServiceError>;
    async fn daily_sales(
        &self,
        user_id: i32,
        query: &ReportQuery,
    ) -> Result<ApiResponse<DailySalesReport>, ServiceError>;
}
