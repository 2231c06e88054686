//! Module containg payment option model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use schema::payment_options;

/// Payload for querying payment options
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "payment_options"]
pub struct PaymentOption {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

/// Payload for creating payment options
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "payment_options"]
pub struct NewPaymentOption {
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<i32>,
}

/// Payload for updating payment options
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "payment_options"]
pub struct UpdatePaymentOption {
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}
