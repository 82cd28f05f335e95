use crate::{
    domain::{
        requests::{CreateSupplierRequest, FindAllSuppliers, UpdateSupplierRequest},
        responses::{ApiResponse, ApiResponsePagination, SupplierResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Supplier as SupplierModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynSupplierRepository = Arc<dyn SupplierRepositoryTrait + Send + Sync>;
pub type DynSupplierService = Arc<dyn SupplierServiceTrait + Send + Sync>;

#[async_trait]
pub trait SupplierRepositoryTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllSuppliers,
    ) -> Result<(Vec<SupplierModel>, i64), RepositoryError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<Option<SupplierModel>, RepositoryError>;
    async fn create_supplier(
        &self,
        user_id: i32,
        req: &CreateSupplierRequest,
    ) -> Result<SupplierModel, RepositoryError>;
    async fn update_supplier(
        &self,
        user_id: i32,
        req: &UpdateSupplierRequest,
    ) -> Result<SupplierModel, RepositoryError>;
    async fn delete_supplier(&self, user_id: i32, supplier_id: i32)
    -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait SupplierServiceTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllSuppliers,
    ) -> Result<ApiResponsePagination<Vec<SupplierResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<ApiResponse<SupplierResponse>, ServiceError>;
    async fn create_supplier(
        &self,
        user_id: i32,
        req: &CreateSupplierRequest,
    ) -> Result<ApiResponse<SupplierResponse>, ServiceError>;
    async fn update_supplier(
        &self,
        user_id: i32,
        req: &UpdateSupplierRequest,
    ) -> Result<ApiResponse<SupplierResponse>, ServiceError>;
    async fn delete_supplier(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
