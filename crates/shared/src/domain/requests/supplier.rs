use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllSuppliers {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Acme Wholesale")]
    pub name: String,

    #[validate(length(min = 1, message = "Contact person is required"))]
    #[schema(example = "John Smith")]
    pub contact_person: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "sales@acme.example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    #[schema(example = "+1-555-0100")]
    pub phone: String,

    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSupplierRequest {
    #[serde(skip_deserializing)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Contact person is required"))]
    pub contact_person: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    pub address: Option<String>,
}
