use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Units remaining below which a product is flagged for replenishment.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Single source of truth for stock classification. Filters, dashboard
/// counts, and the low-stock list all go through this type so the
/// threshold can never drift between call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn classify(stock_quantity: i32) -> Self {
        if stock_quantity == 0 {
            StockStatus::OutOfStock
        } else if stock_quantity < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// SQL predicate over a `stock_quantity` column, derived from the same
    /// threshold as [`StockStatus::classify`].
    pub fn sql_predicate(self, column: &str) -> String {
        match self {
            StockStatus::OutOfStock => format!("{column} = 0"),
            StockStatus::LowStock => {
                format!("{column} > 0 AND {column} < {LOW_STOCK_THRESHOLD}")
            }
            StockStatus::InStock => format!("{column} >= {LOW_STOCK_THRESHOLD}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_out_of_stock() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
    }

    #[test]
    fn below_threshold_is_low_stock() {
        assert_eq!(StockStatus::classify(1), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(3), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(4), StockStatus::LowStock);
    }

    #[test]
    fn at_or_above_threshold_is_in_stock() {
        assert_eq!(StockStatus::classify(5), StockStatus::InStock);
        assert_eq!(StockStatus::classify(100), StockStatus::InStock);
    }

    #[test]
    fn predicate_follows_classification() {
        assert_eq!(
            StockStatus::LowStock.sql_predicate("stock_quantity"),
            "stock_quantity > 0 AND stock_quantity < 5"
        );
        assert_eq!(StockStatus::OutOfStock.sql_predicate("s"), "s = 0");
    }
}
