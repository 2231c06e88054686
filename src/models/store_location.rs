//! Module containg store location model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use models::validation_rules::*;
use schema::store_locations;

/// Payload for querying store locations
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "store_locations"]
pub struct StoreLocation {
    pub id: i32,
    pub store_id: i32,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

/// Payload for creating store locations
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "store_locations"]
pub struct NewStoreLocation {
    pub store_id: i32,
    pub address: Option<String>,
    #[validate(length(min = "1", max = "191", message = "City must not be empty"))]
    pub city: String,
    #[validate(length(min = "1", max = "191", message = "State must not be empty"))]
    pub state: String,
    #[validate(length(min = "1", max = "20", message = "Postal code must not be empty"))]
    pub postal_code: String,
    #[validate(length(min = "1", max = "191", message = "Country must not be empty"))]
    pub country: String,
    #[validate(range(min = "-90.0", max = "90.0"))]
    pub latitude: Option<f64>,
    #[validate(range(min = "-180.0", max = "180.0"))]
    pub longitude: Option<f64>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    pub created_by: Option<i32>,
}

/// Payload for updating store locations
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "store_locations"]
pub struct UpdateStoreLocation {
    pub address: Option<String>,
    #[validate(length(min = "1", max = "191", message = "City must not be empty"))]
    pub city: Option<String>,
    #[validate(length(min = "1", max = "191", message = "State must not be empty"))]
    pub state: Option<String>,
    #[validate(length(min = "1", max = "20", message = "Postal code must not be empty"))]
    pub postal_code: Option<String>,
    #[validate(length(min = "1", max = "191", message = "Country must not be empty"))]
    pub country: Option<String>,
    #[validate(range(min = "-90.0", max = "90.0"))]
    pub latitude: Option<f64>,
    #[validate(range(min = "-180.0", max = "180.0"))]
    pub longitude: Option<f64>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
}
