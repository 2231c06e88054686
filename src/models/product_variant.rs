//! Module containg product variant model for query, insert, update
use std::time::SystemTime;

use rust_decimal::Decimal;
use validator::Validate;

use models::validation_rules::*;
use schema::product_variants;

/// Payload for querying product variants
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "product_variants"]
pub struct ProductVariant {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub additional_info: Option<String>,
    pub available: bool,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

fn default_available() -> bool {
    true
}

/// Payload for creating product variants
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "product_variants"]
pub struct NewProductVariant {
    pub product_id: i32,
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: String,
    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,
    #[validate(range(min = "0", max = "1000000"))]
    pub stock: i32,
    pub additional_info: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    pub created_by: Option<i32>,
}

/// Payload for updating product variants
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "product_variants"]
pub struct UpdateProductVariant {
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(custom = "validate_non_negative")]
    pub price: Option<Decimal>,
    #[validate(range(min = "0", max = "1000000"))]
    pub stock: Option<i32>,
    pub additional_info: Option<String>,
    pub available: Option<bool>,
}
