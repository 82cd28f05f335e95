mod command;
mod query;

pub use self::command::ProductCommandRepository;
pub use self::query::ProductQueryRepository;

pub(crate) const PRODUCT_COLUMNS: &str =
    "product_id, user_id, name, price, stock_quantity, supplier_id, created_at, updated_at";
