mod product;
mod stock_status;
mod supplier;
mod transaction;
mod user;

pub use self::product::Product;
pub use self::stock_status::{LOW_STOCK_THRESHOLD, StockStatus};
pub use self::supplier::Supplier;
pub use self::transaction::Transaction;
pub use self::user::User;
