//! Module containg shipping address model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use schema::shipping_addresses;

/// Payload for querying shipping addresses. Both references are nullable:
/// removing the customer or the order keeps the address row around with the
/// reference cleared. `date_added` is rewritten on every save.
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "shipping_addresses"]
pub struct ShippingAddress {
    pub id: i32,
    pub customer_id: Option<i32>,
    pub order_id: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub date_added: SystemTime,
}

/// Payload for creating shipping addresses
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "shipping_addresses"]
pub struct NewShippingAddress {
    pub customer_id: Option<i32>,
    pub order_id: Option<i32>,
    #[validate(length(min = "1", max = "255", message = "Address must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = "1", max = "100", message = "City must not be empty"))]
    pub city: Option<String>,
    #[validate(length(min = "1", max = "100", message = "Zipcode must not be empty"))]
    pub zipcode: Option<String>,
}

/// Payload for updating shipping addresses
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "shipping_addresses"]
pub struct UpdateShippingAddress {
    pub customer_id: Option<i32>,
    pub order_id: Option<i32>,
    #[validate(length(min = "1", max = "255", message = "Address must not be empty"))]
    pub address: Option<String>,
    #[validate(length(min = "1", max = "100", message = "City must not be empty"))]
    pub city: Option<String>,
    #[validate(length(min = "1", max = "100", message = "Zipcode must not be empty"))]
    pub zipcode: Option<String>,
}
