use crate::{
    domain::{
        requests::{
            CreateProductRequest, FindAllProducts, SellProductRequest, UpdateProductRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, ProductResponse, SellResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Product as ProductModel, Transaction as TransactionModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_low_stock(&self, user_id: i32) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
        price_cents: i64,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        user_id: i32,
        req: &UpdateProductRequest,
        price_cents: i64,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, user_id: i32, product_id: i32) -> Result<(), RepositoryError>;

    /// Atomically decrements stock and appends the sale record. The two
    /// writes commit together or not at all, and the decrement is guarded
    /// so stock can never go negative under concurrent sells.
    async fn sell_product(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(ProductModel, TransactionModel), RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_low_stock(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        user_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError>;
    async fn sell_product(
        &self,
        user_id: i32,
        product_id: i32,
        req: &SellProductRequest,
    ) -> Result<ApiResponse<SellResponse>, ServiceError>;
}
