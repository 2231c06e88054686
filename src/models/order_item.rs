//! Module containg order item model for query, insert, update
use std::time::SystemTime;

use rust_decimal::Decimal;
use validator::Validate;

use models::validation_rules::*;
use schema::order_items;

/// Payload for querying order items. `price` is the snapshot taken when the
/// line item was added and is never recomputed afterwards.
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "order_items"]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_variant_id: i32,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: SystemTime,
}

/// Payload for creating order items
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "order_items"]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_variant_id: i32,
    #[validate(range(min = "1", max = "1000000"))]
    pub quantity: i32,
    #[validate(custom = "validate_non_negative")]
    pub price: Decimal,
}
