use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{
        DynAuthService, DynHashing, DynJwtService, DynProductCommandRepository,
        DynProductCommandService, DynProductQueryRepository, DynProductQueryService,
        DynSupplierRepository, DynSupplierService, DynTransactionQueryRepository,
        DynTransactionQueryService, DynUserRepository,
    },
    cache::{CacheStore, SessionStore},
    config::{ConnectionPool, Hashing},
    repository::{
        ProductCommandRepository, ProductQueryRepository, SupplierRepository,
        TransactionQueryRepository, UserRepository,
    },
    service::{
        AuthService, AuthServiceDeps, ProductCommandService, ProductQueryService, SupplierService,
        TransactionQueryService,
    },
};
use std::sync::Arc;

/// Wires repositories into services once at startup; handlers only ever see
/// the trait objects.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
    pub supplier_service: DynSupplierService,
    pub transaction_query_service: DynTransactionQueryService,
}

impl DependenciesInject {
    pub fn new(
        db: ConnectionPool,
        jwt: DynJwtService,
        session_store: Arc<SessionStore>,
        cache_store: Arc<CacheStore>,
        registry: &mut Registry,
    ) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let user_repository = Arc::new(UserRepository::new(db.clone())) as DynUserRepository;
        let product_query_repository =
            Arc::new(ProductQueryRepository::new(db.clone())) as DynProductQueryRepository;
        let product_command_repository =
            Arc::new(ProductCommandRepository::new(db.clone())) as DynProductCommandRepository;
        let supplier_repository =
            Arc::new(SupplierRepository::new(db.clone())) as DynSupplierRepository;
        let transaction_query_repository =
            Arc::new(TransactionQueryRepository::new(db)) as DynTransactionQueryRepository;

        let auth_service = Arc::new(AuthService::new(
            AuthServiceDeps {
                hash: hashing,
                jwt,
                user_repository,
                session_store,
                cache_store: cache_store.clone(),
            },
            registry,
        )) as DynAuthService;

        let product_query_service = Arc::new(ProductQueryService::new(
            product_query_repository.clone(),
            registry,
        )) as DynProductQueryService;

        let product_command_service = Arc::new(ProductCommandService::new(
            product_query_repository,
            product_command_repository,
            registry,
        )) as DynProductCommandService;

        let supplier_service =
            Arc::new(SupplierService::new(supplier_repository, registry)) as DynSupplierService;

        let transaction_query_service = Arc::new(TransactionQueryService::new(
            transaction_query_repository,
            cache_store,
            registry,
        )) as DynTransactionQueryService;

        Self {
            auth_service,
            product_query_service,
            product_command_service,
            supplier_service,
            transaction_query_service,
        }
    }
}
