//! Models contains all structures that are used in different
//! modules of the app

pub mod category;
pub mod customer;
pub mod image;
pub mod industry;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod payment_option;
pub mod product;
pub mod product_variant;
pub mod shipping_address;
pub mod store;
pub mod store_location;
pub mod validation_rules;

pub use self::category::*;
pub use self::customer::*;
pub use self::image::*;
pub use self::industry::*;
pub use self::order::*;
pub use self::order_item::*;
pub use self::payment::*;
pub use self::payment_option::*;
pub use self::product::*;
pub use self::product_variant::*;
pub use self::shipping_address::*;
pub use self::store::*;
pub use self::store_location::*;
pub use self::validation_rules::*;
