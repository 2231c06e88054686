//! Module containg customer model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use models::validation_rules::*;
use schema::customers;

/// Payload for querying customers. There is exactly one customer profile
/// per platform user.
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "customers"]
pub struct Customer {
    pub id: i32,
    pub user_id: i32,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_on: SystemTime,
}

/// Payload for creating customers
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "customers"]
pub struct NewCustomer {
    pub user_id: i32,
    pub address: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
}

/// Payload for updating customers
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "customers"]
pub struct UpdateCustomer {
    pub address: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
}
