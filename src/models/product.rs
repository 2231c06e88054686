//! Module containg product model for query, insert, update
use std::time::SystemTime;

use rust_decimal::Decimal;
use validator::Validate;

use models::image;
use models::image::default_image_path;
use models::validation_rules::*;
use schema::products;

/// Payload for querying products
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "products"]
pub struct Product {
    pub id: i32,
    pub store_id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub image: Option<String>,
    pub available: bool,
    pub digital: bool,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

impl Product {
    /// Public URL of the product image, empty string when there is none.
    pub fn image_url(&self, base_url: &str) -> String {
        image::resolve_image_url(base_url, self.image.as_ref().map(|image| image.as_str()))
    }
}

fn default_available() -> bool {
    true
}

fn default_digital() -> bool {
    true
}

/// Payload for creating products
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "products"]
pub struct NewProduct {
    pub store_id: i32,
    pub category_id: i32,
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,
    #[validate(range(min = "0", max = "1000000"))]
    pub stock: i32,
    #[serde(default = "default_image_path")]
    pub image: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default = "default_digital")]
    pub digital: bool,
    pub created_by: Option<i32>,
}

/// Payload for updating products
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "products"]
pub struct UpdateProduct {
    pub category_id: Option<i32>,
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom = "validate_non_negative")]
    pub price: Option<Decimal>,
    #[validate(range(min = "0", max = "1000000"))]
    pub stock: Option<i32>,
    pub image: Option<String>,
    pub available: Option<bool>,
    pub digital: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json;

    use super::*;

    #[test]
    fn new_product_payload_defaults() {
        let payload: NewProduct = serde_json::from_value(json!({
            "store_id": 1,
            "category_id": 1,
            "name": "Phone X",
            "price": "500.00",
            "stock": 10
        })).unwrap();
        assert_eq!(payload.image, default_image_path());
        assert!(payload.available);
        assert!(payload.digital);
    }

    #[test]
    fn missing_image_resolves_to_empty_string() {
        let product = Product {
            id: 1,
            store_id: 1,
            category_id: 1,
            name: "Phone X".to_string(),
            description: None,
            price: Decimal::new(50000, 2),
            stock: 10,
            image: None,
            available: true,
            digital: false,
            created_on: SystemTime::now(),
            created_by: None,
        };
        assert_eq!(product.image_url("https://static.marketplace.local"), "");
    }
}
