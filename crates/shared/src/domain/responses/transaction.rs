use crate::domain::responses::product::ProductResponse;
use crate::model::Transaction as TransactionModel;
use crate::utils::{DateRange, cents_to_amount};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TransactionResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_amount: f64,
    #[serde(rename = "created_at")]
    pub created_at: String,
}

impl From<TransactionModel> for TransactionResponse {
    fn from(value: TransactionModel) -> Self {
        TransactionResponse {
            id: value.transaction_id,
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            unit_price: cents_to_amount(value.unit_price),
            total_amount: cents_to_amount(value.total_amount),
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

/// Result of a successful sell operation.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SellResponse {
    pub product: ProductResponse,
    pub sold: i32,
    pub total_amount: f64,
    pub transaction_id: i32,
}

/// Summary statistics over a reporting period.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total_revenue: f64,
    pub total_transactions: i64,
    pub total_items_sold: i64,
    pub average_order_value: f64,
}

/// One calendar day of the daily-sales breakdown.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub transaction_count: i64,
    pub items_sold: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DailySalesReport {
    pub daily_sales: Vec<DailySales>,
    pub period: DateRange,
}
