use crate::model::StockStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    /// Stock-status filter: `in-stock`, `low-stock` or `out-of-stock`.
    pub status: Option<StockStatus>,

    pub supplier_id: Option<i32>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    #[schema(example = "Espresso beans 1kg")]
    pub name: String,

    /// Unit price in currency units, at most two decimal places.
    #[validate(range(min = 0.01, message = "Price must be at least 0.01"))]
    #[schema(example = 19.99)]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock_quantity: i32,

    pub supplier_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    #[schema(example = "Espresso beans 1kg")]
    pub name: String,

    #[validate(range(min = 0.01, message = "Price must be at least 0.01"))]
    #[schema(example = 19.99)]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 100)]
    pub stock_quantity: i32,

    pub supplier_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SellProductRequest {
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_or_negative_sell_quantity() {
        assert!(SellProductRequest { quantity: 0 }.validate().is_err());
        assert!(SellProductRequest { quantity: -2 }.validate().is_err());
        assert!(SellProductRequest { quantity: 1 }.validate().is_ok());
    }

    #[test]
    fn rejects_one_character_product_name() {
        let req = CreateProductRequest {
            name: "x".into(),
            price: 1.0,
            stock_quantity: 0,
            supplier_id: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_free_products() {
        let req = CreateProductRequest {
            name: "Sample".into(),
            price: 0.0,
            stock_quantity: 1,
            supplier_id: None,
        };
        assert!(req.validate().is_err());
    }
}
