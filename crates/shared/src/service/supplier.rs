use crate::{
    abstract_trait::{DynSupplierRepository, SupplierServiceTrait},
    domain::{
        requests::{CreateSupplierRequest, FindAllSuppliers, UpdateSupplierRequest},
        responses::{ApiResponse, ApiResponsePagination, Pagination, SupplierResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

pub struct SupplierService {
    repository: DynSupplierRepository,
    metrics: Metrics,
}

impl SupplierService {
    pub fn new(repository: DynSupplierRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "supplier_service_request_counter",
            "Total number of requests to the SupplierService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "supplier_service_request_duration",
            "Histogram of request durations for the SupplierService",
            metrics.request_duration.clone(),
        );

        Self {
            repository,
            metrics,
        }
    }

    fn record(&self, method: Method, started: Instant, ok: bool) {
        let status = if ok { Status::Success } else { Status::Error };
        self.metrics
            .record(method, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl SupplierServiceTrait for SupplierService {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllSuppliers,
    ) -> Result<ApiResponsePagination<Vec<SupplierResponse>>, ServiceError> {
        let started = Instant::now();

        let (suppliers, total_items) = match self.repository.find_all(user_id, req).await {
            Ok(found) => found,
            Err(e) => {
                error!("❌ Failed to list suppliers for user {user_id}: {e:?}");
                self.record(Method::Get, started, false);
                return Err(e.into());
            }
        };

        let data = suppliers.into_iter().map(SupplierResponse::from).collect();
        self.record(Method::Get, started, true);

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Suppliers fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page, req.page_size, total_items),
        })
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<ApiResponse<SupplierResponse>, ServiceError> {
        let started = Instant::now();

        let supplier = self
            .repository
            .find_by_id(user_id, supplier_id)
            .await?
            .ok_or_else(|| {
                self.record(Method::Get, started, false);
                ServiceError::NotFound(format!("Supplier with id {supplier_id} not found"))
            })?;

        self.record(Method::Get, started, true);

        Ok(ApiResponse::success(
            "Supplier fetched successfully",
            SupplierResponse::from(supplier),
        ))
    }

    async fn create_supplier(
        &self,
        user_id: i32,
        req: &CreateSupplierRequest,
    ) -> Result<ApiResponse<SupplierResponse>, ServiceError> {
        info!("📦 Creating supplier '{}' for user {user_id}", req.name);
        let started = Instant::now();

        let supplier = match self.repository.create_supplier(user_id, req).await {
            Ok(supplier) => supplier,
            Err(e) => {
                self.record(Method::Post, started, false);
                return Err(e.into());
            }
        };

        self.record(Method::Post, started, true);

        Ok(ApiResponse::success(
            "Supplier created successfully",
            SupplierResponse::from(supplier),
        ))
    }

    async fn update_supplier(
        &self,
        user_id: i32,
        req: &UpdateSupplierRequest,
    ) -> Result<ApiResponse<SupplierResponse>, ServiceError> {
        let started = Instant::now();

        let supplier = match self.repository.update_supplier(user_id, req).await {
            Ok(supplier) => supplier,
            Err(e) => {
                self.record(Method::Put, started, false);
                return Err(e.into());
            }
        };

        self.record(Method::Put, started, true);

        Ok(ApiResponse::success(
            "Supplier updated successfully",
            SupplierResponse::from(supplier),
        ))
    }

    async fn delete_supplier(
        &self,
        user_id: i32,
        supplier_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let started = Instant::now();

        if let Err(e) = self.repository.delete_supplier(user_id, supplier_id).await {
            self.record(Method::Delete, started, false);
            return Err(e.into());
        }

        self.record(Method::Delete, started, true);

        Ok(ApiResponse::success("Supplier deleted successfully", ()))
    }
}
