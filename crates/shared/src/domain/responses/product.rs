use crate::model::{Product as ProductModel, StockStatus};
use crate::utils::cents_to_amount;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub status: StockStatus,
    pub supplier_id: Option<i32>,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: cents_to_amount(value.price),
            status: StockStatus::classify(value.stock_quantity),
            stock_quantity: value.stock_quantity,
            supplier_id: value.supplier_id,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
