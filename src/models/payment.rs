//! Module containg payment model for query, insert
use std::time::SystemTime;

use rust_decimal::Decimal;
use validator::Validate;

use models::validation_rules::*;
use schema::payments;

/// Payload for querying payments
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "payments"]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub payment_option_id: i32,
    pub amount: Decimal,
    pub payment_date: SystemTime,
    pub transaction_id: String,
}

/// Payload for creating payments
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "payments"]
pub struct NewPayment {
    pub order_id: i32,
    pub payment_option_id: i32,
    #[validate(custom = "validate_non_negative")]
    pub amount: Decimal,
    #[serde(default)]
    pub payment_date: Option<SystemTime>,
    #[validate(length(min = "1", max = "150", message = "Transaction id must not be empty"))]
    pub transaction_id: String,
}
