use crate::{
    abstract_trait::TransactionQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::FindAllTransactions, errors::RepositoryError,
    model::Transaction as TransactionModel, utils::DateRange,
};
use async_trait::async_trait;
use tracing::{error, info};

const TRANSACTION_COLUMNS: &str =
    "transaction_id, user_id, product_id, product_name, quantity, unit_price, total_amount, created_at";

#[derive(Clone)]
pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn search_pattern(search: &str) -> Option<&str> {
    let trimmed = search.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllTransactions,
        range: &DateRange,
    ) -> Result<(Vec<TransactionModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching transactions for user {user_id} in {} .. {}",
            range.start_date, range.end_date
        );

        let limit = i64::from(req.page_size);
        let offset = i64::from((req.page - 1).max(0) * req.page_size);
        let search = search_pattern(&req.search);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM transactions
             WHERE user_id = $1
               AND created_at BETWEEN $2 AND $3
               AND ($4::TEXT IS NULL OR product_name ILIKE '%' || $4 || '%')",
        )
        .bind(user_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .bind(search)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        let transactions = sqlx::query_as::<_, TransactionModel>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions
             WHERE user_id = $1
               AND created_at BETWEEN $2 AND $3
               AND ($4::TEXT IS NULL OR product_name ILIKE '%' || $4 || '%')
             ORDER BY created_at DESC
             LIMIT $5 OFFSET $6"
        ))
        .bind(user_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transactions: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((transactions, total))
    }

    async fn find_by_range(
        &self,
        user_id: i32,
        range: &DateRange,
        search: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let search = search_pattern(search);

        let transactions = sqlx::query_as::<_, TransactionModel>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions
             WHERE user_id = $1
               AND created_at BETWEEN $2 AND $3
               AND ($4::TEXT IS NULL OR product_name ILIKE '%' || $4 || '%')
             ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .bind(search)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transactions in range: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(transactions)
    }
}
