use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Append-only sale record. `product_name` and `unit_price` are snapshots
/// taken at sale time, so later product edits never rewrite history.
/// `total_amount == unit_price * quantity`, computed once at creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub transaction_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}
