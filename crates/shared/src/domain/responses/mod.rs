mod api;
mod pagination;
mod product;
mod supplier;
mod transaction;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::pagination::Pagination;
pub use self::product::ProductResponse;
pub use self::supplier::SupplierResponse;
pub use self::transaction::{
    DailySales, DailySalesReport, SellResponse, TransactionResponse, TransactionStats,
};
pub use self::user::{TokenResponse, UserResponse};
