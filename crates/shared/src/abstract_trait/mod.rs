mod auth;
mod hashing;
mod jwt;
mod product;
mod supplier;
mod transaction;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::supplier::{
    DynSupplierRepository, DynSupplierService, SupplierRepositoryTrait, SupplierServiceTrait,
};
pub use self::transaction::{
    DynTransactionQueryRepository, DynTransactionQueryService, TransactionQueryRepositoryTrait,
    TransactionQueryServiceTrait,
};
pub use self::user::{DynUserRepository, UserRepositoryTrait};
