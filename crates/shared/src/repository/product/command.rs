use super::PRODUCT_COLUMNS;
use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::{Product as ProductModel, Transaction as TransactionModel},
    repository::map_constraint,
};
use async_trait::async_trait;
use tracing::{error, info};

const TRANSACTION_COLUMNS: &str =
    "transaction_id, user_id, product_id, product_name, quantity, unit_price, total_amount, created_at";

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
        price_cents: i64,
    ) -> Result<ProductModel, RepositoryError> {
        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "INSERT INTO products (user_id, name, price, stock_quantity, supplier_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&req.name)
        .bind(price_cents)
        .bind(req.stock_quantity)
        .bind(req.supplier_id)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            map_constraint(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            product.product_id, product.name
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        user_id: i32,
        req: &UpdateProductRequest,
        price_cents: i64,
    ) -> Result<ProductModel, RepositoryError> {
        let product_id = req.id.ok_or(RepositoryError::NotFound)?;

        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "UPDATE products
             SET name = $3,
                 price = $4,
                 stock_quantity = $5,
                 supplier_id = $6,
                 updated_at = now()
             WHERE product_id = $1 AND user_id = $2
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(product_id)
        .bind(user_id)
        .bind(&req.name)
        .bind(price_cents)
        .bind(req.stock_quantity)
        .bind(req.supplier_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", product_id, err);
            map_constraint(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = $1 AND user_id = $2")
            .bind(product_id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", product_id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Product ID {} permanently deleted", product_id);
        Ok(())
    }

    async fn sell_product(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(ProductModel, TransactionModel), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // row lock serializes concurrent sells of the same product
        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products
             WHERE product_id = $1 AND user_id = $2
             FOR UPDATE"
        ))
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::NotFound)?;

        if quantity > product.stock_quantity {
            return Err(RepositoryError::InsufficientStock {
                available: product.stock_quantity,
                requested: quantity,
            });
        }

        let total_amount = product.price * i64::from(quantity);

        // the guard repeats the check so stock can never go negative even
        // if this statement is ever reached without the lock above
        let updated = sqlx::query_as::<_, ProductModel>(&format!(
            "UPDATE products
             SET stock_quantity = stock_quantity - $1,
                 updated_at = now()
             WHERE product_id = $2 AND user_id = $3 AND stock_quantity >= $1
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(quantity)
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?
        .ok_or(RepositoryError::InsufficientStock {
            available: product.stock_quantity,
            requested: quantity,
        })?;

        let transaction = sqlx::query_as::<_, TransactionModel>(&format!(
            "INSERT INTO transactions
                 (user_id, product_id, product_name, quantity, unit_price, total_amount)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {TRANSACTION_COLUMNS}"
        ))
        .bind(user_id)
        .bind(product_id)
        .bind(&product.name)
        .bind(quantity)
        .bind(product.price)
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to record sale for product {}: {:?}", product_id, e);
            RepositoryError::from(e)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Sold {} x product ID {} (new stock: {})",
            quantity, updated.product_id, updated.stock_quantity
        );
        Ok((updated, transaction))
    }
}
