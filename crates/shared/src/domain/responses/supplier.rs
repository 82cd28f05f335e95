use crate::model::Supplier as SupplierModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SupplierResponse {
    pub id: i32,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: String,
    #[serde(rename = "updated_at")]
    pub updated_at: String,
}

impl From<SupplierModel> for SupplierResponse {
    fn from(value: SupplierModel) -> Self {
        SupplierResponse {
            id: value.supplier_id,
            name: value.name,
            contact_person: value.contact_person,
            email: value.email,
            phone: value.phone,
            address: value.address,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}
