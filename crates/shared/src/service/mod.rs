mod auth;
mod product;
mod supplier;
mod transaction;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::product::{ProductCommandService, ProductQueryService};
pub use self::supplier::SupplierService;
pub use self::transaction::TransactionQueryService;
