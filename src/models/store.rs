//! Module containg store model for query, insert, update
use std::time::SystemTime;

use validator::Validate;

use models::image;
use models::image::default_image_path;
use schema::stores;

/// Payload for querying stores
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "stores"]
pub struct Store {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub created_on: SystemTime,
    pub created_by: Option<i32>,
}

impl Store {
    /// Public URL of the store logo, empty string when there is none.
    pub fn image_url(&self, base_url: &str) -> String {
        image::resolve_image_url(base_url, self.logo.as_ref().map(|logo| logo.as_str()))
    }
}

/// Payload for creating stores
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "stores"]
pub struct NewStore {
    pub user_id: i32,
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_image_path")]
    pub logo: Option<String>,
    #[validate(url(message = "Invalid website url"))]
    pub website: Option<String>,
    pub created_by: Option<i32>,
}

/// Payload for updating stores
#[derive(Default, Serialize, Deserialize, Insertable, Validate, AsChangeset, Debug, Clone)]
#[table_name = "stores"]
pub struct UpdateStore {
    #[validate(length(min = "1", max = "191", message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    #[validate(url(message = "Invalid website url"))]
    pub website: Option<String>,
}
