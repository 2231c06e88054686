//! Module containg category model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use schema::categories;

/// Payload for querying categories
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "categories"]
pub struct Category {
    pub id: i32,
    pub industry_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

/// Payload for creating categories
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "categories"]
pub struct NewCategory {
    pub industry_id: i32,
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub created_by: Option<i32>,
}

/// Payload for updating categories
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "categories"]
pub struct UpdateCategory {
    pub industry_id: Option<i32>,
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}
