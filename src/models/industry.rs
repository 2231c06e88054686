//! Module containg industry model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use schema::industries;

/// Payload for querying industries
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "industries"]
pub struct Industry {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

/// Payload for creating industries
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "industries"]
pub struct NewIndustry {
    #[validate(length(min = "1", max = "150", message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<i32>,
}

/// Payload for updating industries
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "industries"]
pub struct UpdateIndustry {
    #[validate(length(min = "1", max = "150", message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}
