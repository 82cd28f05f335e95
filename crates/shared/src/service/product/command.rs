use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, SellProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse, SellResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status, amount_to_cents, cents_to_amount},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

pub struct ProductCommandService {
    query_repository: DynProductQueryRepository,
    command_repository: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        query_repository: DynProductQueryRepository,
        command_repository: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_command_service_request_counter",
            "Total number of requests to the ProductCommandService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_command_service_request_duration",
            "Histogram of request durations for the ProductCommandService",
            metrics.request_duration.clone(),
        );

        Self {
            query_repository,
            command_repository,
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
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("📦 Creating product '{}' for user {user_id}", req.name);
        let started = Instant::now();

        let price_cents = amount_to_cents(req.price);

        let product = match self
            .command_repository
            .create_product(user_id, req, price_cents)
            .await
        {
            Ok(product) => product,
            Err(e) => {
                self.record(Method::Post, started, false);
                return Err(e.into());
            }
        };

        self.record(Method::Post, started, true);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        user_id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();

        let price_cents = amount_to_cents(req.price);

        let product = match self
            .command_repository
            .update_product(user_id, req, price_cents)
            .await
        {
            Ok(product) => product,
            Err(e) => {
                self.record(Method::Put, started, false);
                return Err(e.into());
            }
        };

        self.record(Method::Put, started, true);

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let started = Instant::now();

        if let Err(e) = self
            .command_repository
            .delete_product(user_id, product_id)
            .await
        {
            self.record(Method::Delete, started, false);
            return Err(e.into());
        }

        self.record(Method::Delete, started, true);

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }

    async fn sell_product(
        &self,
        user_id: i32,
        product_id: i32,
        req: &SellProductRequest,
    ) -> Result<ApiResponse<SellResponse>, ServiceError> {
        info!(
            "🛒 Selling {} unit(s) of product {product_id} for user {user_id}",
            req.quantity
        );
        let started = Instant::now();

        if req.quantity < 1 {
            self.record(Method::Post, started, false);
            return Err(ServiceError::Validation(vec![
                "Quantity must be a positive integer".to_string(),
            ]));
        }

        let product = match self.query_repository.find_by_id(user_id, product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.record(Method::Post, started, false);
                return Err(ServiceError::NotFound(format!(
                    "Product with id {product_id} not found"
                )));
            }
            Err(e) => {
                self.record(Method::Post, started, false);
                return Err(e.into());
            }
        };

        // Early rejection with a precise message; the repository re-checks
        // under a row lock, so a concurrent sell can still lose there.
        if req.quantity > product.stock_quantity {
            self.record(Method::Post, started, false);
            return Err(ServiceError::Repo(RepositoryError::InsufficientStock {
                available: product.stock_quantity,
                requested: req.quantity,
            }));
        }

        let (updated, transaction) = match self
            .command_repository
            .sell_product(user_id, product_id, req.quantity)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                error!("❌ Sell of product {product_id} failed: {e:?}");
                self.record(Method::Post, started, false);
                return Err(e.into());
            }
        };

        self.record(Method::Post, started, true);

        Ok(ApiResponse::success(
            "Sale recorded successfully",
            SellResponse {
                product: ProductResponse::from(updated),
                sold: transaction.quantity,
                total_amount: cents_to_amount(transaction.total_amount),
                transaction_id: transaction.transaction_id,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::requests::FindAllProducts,
        model::{Product as ProductModel, Transaction as TransactionModel},
    };
    use chrono::Utc;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    struct InMemoryProducts {
        products: Mutex<HashMap<i32, ProductModel>>,
        next_transaction_id: Mutex<i32>,
    }

    impl InMemoryProducts {
        fn with_product(product_id: i32, price_cents: i64, stock: i32) -> Arc<Self> {
            let now = Utc::now();
            let mut products = HashMap::new();
            products.insert(
                product_id,
                ProductModel {
                    product_id,
                    user_id: 1,
                    name: "Espresso beans 1kg".to_string(),
                    price: price_cents,
                    stock_quantity: stock,
                    supplier_id: None,
                    created_at: now,
                    updated_at: now,
                },
            );
            Arc::new(Self {
                products: Mutex::new(products),
                next_transaction_id: Mutex::new(1),
            })
        }

        fn stock_of(&self, product_id: i32) -> i32 {
            self.products.lock().unwrap()[&product_id].stock_quantity
        }
    }

    #[async_trait]
    impl crate::abstract_trait::ProductQueryRepositoryTrait for InMemoryProducts {
        async fn find_all(
            &self,
            _user_id: i32,
            _req: &FindAllProducts,
        ) -> Result<(Vec<ProductModel>, i64), RepositoryError> {
            let products: Vec<_> = self.products.lock().unwrap().values().cloned().collect();
            let total = products.len() as i64;
            Ok((products, total))
        }

        async fn find_low_stock(
            &self,
            _user_id: i32,
        ) -> Result<Vec<ProductModel>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_by_id(
            &self,
            _user_id: i32,
            product_id: i32,
        ) -> Result<Option<ProductModel>, RepositoryError> {
            Ok(self.products.lock().unwrap().get(&product_id).cloned())
        }
    }

    #[async_trait]
    impl crate::abstract_trait::ProductCommandRepositoryTrait for InMemoryProducts {
        async fn create_product(
            &self,
            _user_id: i32,
            _req: &CreateProductRequest,
            _price_cents: i64,
        ) -> Result<ProductModel, RepositoryError> {
            unimplemented!("not exercised by these tests")
        }

        async fn update_product(
            &self,
            _user_id: i32,
            _req: &UpdateProductRequest,
            _price_cents: i64,
        ) -> Result<ProductModel, RepositoryError> {
            unimplemented!("not exercised by these tests")
        }

        async fn delete_product(
            &self,
            _user_id: i32,
            _product_id: i32,
        ) -> Result<(), RepositoryError> {
            unimplemented!("not exercised by these tests")
        }

        async fn sell_product(
            &self,
            user_id: i32,
            product_id: i32,
            quantity: i32,
        ) -> Result<(ProductModel, TransactionModel), RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let product = products
                .get_mut(&product_id)
                .ok_or(RepositoryError::NotFound)?;

            if product.stock_quantity < quantity {
                return Err(RepositoryError::InsufficientStock {
                    available: product.stock_quantity,
                    requested: quantity,
                });
            }

            product.stock_quantity -= quantity;
            product.updated_at = Utc::now();

            let mut next_id = self.next_transaction_id.lock().unwrap();
            let transaction = TransactionModel {
                transaction_id: *next_id,
                user_id,
                product_id,
                product_name: product.name.clone(),
                quantity,
                unit_price: product.price,
                total_amount: product.price * i64::from(quantity),
                created_at: Utc::now(),
            };
            *next_id += 1;

            Ok((product.clone(), transaction))
        }
    }

    fn service(repo: &Arc<InMemoryProducts>) -> ProductCommandService {
        let mut registry = Registry::default();
        ProductCommandService::new(repo.clone(), repo.clone(), &mut registry)
    }

    #[tokio::test]
    async fn sell_decrements_stock_and_records_exact_total() {
        let repo = InMemoryProducts::with_product(7, amount_to_cents(10.00), 5);
        let svc = service(&repo);

        let response = svc
            .sell_product(1, 7, &SellProductRequest { quantity: 3 })
            .await
            .unwrap();

        assert_eq!(response.data.sold, 3);
        assert_eq!(response.data.total_amount, 30.00);
        assert_eq!(response.data.product.stock_quantity, 2);
        assert_eq!(repo.stock_of(7), 2);
    }

    #[tokio::test]
    async fn sell_more_than_stock_fails_and_leaves_stock_unchanged() {
        let repo = InMemoryProducts::with_product(7, amount_to_cents(10.00), 2);
        let svc = service(&repo);

        let err = svc
            .sell_product(1, 7, &SellProductRequest { quantity: 5 })
            .await
            .unwrap_err();

        match err {
            ServiceError::Repo(RepositoryError::InsufficientStock {
                available,
                requested,
            }) => {
                assert_eq!(available, 2);
                assert_eq!(requested, 5);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(repo.stock_of(7), 2);
    }

    #[tokio::test]
    async fn sell_unknown_product_is_not_found() {
        let repo = InMemoryProducts::with_product(7, amount_to_cents(10.00), 5);
        let svc = service(&repo);

        let err = svc
            .sell_product(1, 99, &SellProductRequest { quantity: 1 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn sell_zero_quantity_is_rejected_before_touching_stock() {
        let repo = InMemoryProducts::with_product(7, amount_to_cents(10.00), 5);
        let svc = service(&repo);

        let err = svc
            .sell_product(1, 7, &SellProductRequest { quantity: 0 })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.stock_of(7), 5);
    }

    #[tokio::test]
    async fn concurrent_sells_never_oversell() {
        let repo = InMemoryProducts::with_product(7, amount_to_cents(10.00), 5);
        let svc = Arc::new(service(&repo));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let svc = svc.clone();
            handles.push(tokio::spawn(async move {
                svc.sell_product(1, 7, &SellProductRequest { quantity: 1 })
                    .await
                    .is_ok()
            }));
        }

        let mut sold = 0;
        for handle in handles {
            if handle.await.unwrap() {
                sold += 1;
            }
        }

        assert!(sold <= 5);
        assert_eq!(repo.stock_of(7), 5 - sold);
    }

    #[tokio::test]
    async fn fractional_price_totals_have_no_float_drift() {
        let repo = InMemoryProducts::with_product(7, amount_to_cents(29.99), 10);
        let svc = service(&repo);

        let response = svc
            .sell_product(1, 7, &SellProductRequest { quantity: 3 })
            .await
            .unwrap();

        assert_eq!(response.data.total_amount, 89.97);
    }
}
