//! Repos is a module responsible for interacting with postgres db

pub mod categories;
pub mod customers;
pub mod industries;
pub mod order_items;
pub mod orders;
pub mod payment_options;
pub mod payments;
pub mod product_variants;
pub mod products;
pub mod repo_factory;
pub mod shipping_addresses;
pub mod store_locations;
pub mod stores;
pub mod types;

pub use self::categories::*;
pub use self::customers::*;
pub use self::industries::*;
pub use self::order_items::*;
pub use self::orders::*;
pub use self::payment_options::*;
pub use self::payments::*;
pub use self::product_variants::*;
pub use self::products::*;
pub use self::repo_factory::*;
pub use self::shipping_addresses::*;
pub use self::store_locations::*;
pub use self::stores::*;
pub use self::types::*;
