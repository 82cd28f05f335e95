use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::FindAllProducts,
        responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    },
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

pub struct ProductQueryService {
    repository: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(repository: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_query_service_request_counter",
            "Total number of requests to the ProductQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_query_service_request_duration",
            "Histogram of request durations for the ProductQueryService",
            metrics.request_duration.clone(),
        );

        Self {
            repository,
            metrics,
        }
    }

    fn record(&self, started: Instant, ok: bool) {
        let status = if ok { Status::Success } else { Status::Error };
        self.metrics
            .record(Method::Get, status, started.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Listing products for user {user_id} (page {}, size {})",
            req.page, req.page_size
        );
        let started = Instant::now();

        let (products, total_items) = match self.repository.find_all(user_id, req).await {
            Ok(found) => found,
            Err(e) => {
                error!("❌ Failed to list products for user {user_id}: {e:?}");
                self.record(started, false);
                return Err(e.into());
            }
        };

        let data = products.into_iter().map(ProductResponse::from).collect();
        self.record(started, true);

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page, req.page_size, total_items),
        })
    }

    async fn find_low_stock(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let started = Instant::now();

        let products = match self.repository.find_low_stock(user_id).await {
            Ok(found) => found,
            Err(e) => {
                error!("❌ Failed to fetch low-stock products: {e:?}");
                self.record(started, false);
                return Err(e.into());
            }
        };

        let data: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();
        self.record(started, true);

        Ok(ApiResponse::success("Low-stock products fetched", data))
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();

        let product = match self.repository.find_by_id(user_id, product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.record(started, false);
                return Err(ServiceError::NotFound(format!(
                    "Product with id {product_id} not found"
                )));
            }
            Err(e) => {
                self.record(started, false);
                return Err(e.into());
            }
        };

        self.record(started, true);

        Ok(ApiResponse::success(
            "Product fetched successfully",
            ProductResponse::from(product),
        ))
    }
}
