mod auth;
mod product;
mod supplier;
mod transaction;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::product::{
    CreateProductRequest, FindAllProducts, SellProductRequest, UpdateProductRequest,
};
pub use self::supplier::{CreateSupplierRequest, FindAllSuppliers, UpdateSupplierRequest};
pub use self::transaction::{FindAllTransactions, ReportQuery};
