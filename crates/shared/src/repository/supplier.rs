use crate::{
    abstract_trait::SupplierRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateSupplierRequest, FindAllSuppliers, UpdateSupplierRequest},
    errors::RepositoryError,
    model::Supplier as SupplierModel,
    repository::map_constraint,
};
use async_trait::async_trait;
use tracing::{error, info};

const SUPPLIER_COLUMNS: &str =
    "supplier_id, user_id, name, contact_person, email, phone, address, created_at, updated_at";

#[derive(Clone)]
pub struct SupplierRepository {
    db: ConnectionPool,
}

impl SupplierRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SupplierRepositoryTrait for SupplierRepository {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllSuppliers,
    ) -> Result<(Vec<SupplierModel>, i64), RepositoryError> {
        let limit = i64::from(req.page_size);
        let offset = i64::from((req.page - 1).max(0) * req.page_size);

        let search = {
            let trimmed = req.search.trim();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        };

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM suppliers
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%'
                    OR contact_person ILIKE '%' || $2 || '%')",
        )
        .bind(user_id)
        .bind(search)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        let suppliers = sqlx::query_as::<_, SupplierModel>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers
             WHERE user_id = $1
               AND ($2::TEXT IS NULL OR name ILIKE '%' || $2 || '%'
                    OR contact_person ILIKE '%' || $2 || '%')
             ORDER BY name ASC
             LIMIT $3 OFFSET $4"
        ))
        .bind(user_id)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch suppliers: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok((suppliers, total))
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<Option<SupplierModel>, RepositoryError> {
        let supplier = sqlx::query_as::<_, SupplierModel>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE supplier_id = $1 AND user_id = $2"
        ))
        .bind(supplier_id)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(RepositoryError::from)?;

        Ok(supplier)
    }

    async fn create_supplier(
        &self,
        user_id: i32,
        req: &CreateSupplierRequest,
    ) -> Result<SupplierModel, RepositoryError> {
        let supplier = sqlx::query_as::<_, SupplierModel>(&format!(
            "INSERT INTO suppliers (user_id, name, contact_person, email, phone, address)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SUPPLIER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.contact_person)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create supplier {}: {:?}", req.name, err);
            map_constraint(err)
        })?;

        info!(
            "✅ Created supplier ID {} ({})",
            supplier.supplier_id, supplier.name
        );
        Ok(supplier)
    }

    async fn update_supplier(
        &self,
        user_id: i32,
        req: &UpdateSupplierRequest,
    ) -> Result<SupplierModel, RepositoryError> {
        let supplier_id = req.id.ok_or(RepositoryError::NotFound)?;

        let supplier = sqlx::query_as::<_, SupplierModel>(&format!(
            "UPDATE suppliers
             SET name = $3,
                 contact_person = $4,
                 email = $5,
                 phone = $6,
                 address = $7,
                 updated_at = now()
             WHERE supplier_id = $1 AND user_id = $2
             RETURNING {SUPPLIER_COLUMNS}"
        ))
        .bind(supplier_id)
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.contact_person)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to update supplier ID {}: {:?}", supplier_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated supplier ID {}", supplier.supplier_id);
        Ok(supplier)
    }

    async fn delete_supplier(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE supplier_id = $1 AND user_id = $2")
            .bind(supplier_id)
            .bind(user_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete supplier {}: {:?}", supplier_id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Supplier ID {} deleted", supplier_id);
        Ok(())
    }
}
