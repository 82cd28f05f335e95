use super::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::ProductQueryRepositoryTrait,
    config::ConnectionPool,
    domain::requests::FindAllProducts,
    errors::RepositoryError,
    model::{LOW_STOCK_THRESHOLD, Product as ProductModel},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

fn search_pattern(search: &str) -> Option<&str> {
    let trimmed = search.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
        info!("🔍 Fetching products for user {user_id}, search: {:?}", req.search);

        let limit = i64::from(req.page_size);
        let offset = i64::from((req.page - 1).max(0) * req.page_size);
        let search = search_pattern(&req.search);

        // status filter comes from the shared classifier, never an ad-hoc
        // threshold
        let status_clause = req
            .status
            .map(|status| format!(" AND {}", status.sql_predicate("stock_quantity")))
            .unwrap_or_default();

        let filter = format!(
            "user_id = $1
               AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%')
               AND ($3::INT4 IS NULL OR supplier_id = $3){status_clause}"
        );

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM products WHERE {filter}"
        ))
        .bind(user_id)
        .bind(search)
        .bind(req.supplier_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to count products: {:?}", e);
            RepositoryError::from(e)
        })?;

        let products = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE {filter}
             ORDER BY created_at DESC
             LIMIT $4 OFFSET $5"
        ))
        .bind(user_id)
        .bind(search)
        .bind(req.supplier_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((products, total))
    }

    async fn find_low_stock(&self, user_id: i32) -> Result<Vec<ProductModel>, RepositoryError> {
        let products = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE user_id = $1 AND stock_quantity < $2
             ORDER BY stock_quantity ASC, name ASC"
        ))
        .bind(user_id)
        .bind(LOW_STOCK_THRESHOLD)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch low-stock products: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1 AND user_id = $2"
        ))
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }
}
