//! Services is a core layer for the app business logic like validation,
//! sequencing of repo calls and the explicit cascade delete paths.

pub mod cascades;
pub mod categories;
pub mod customers;
pub mod industries;
pub mod orders;
pub mod payment_options;
pub mod products;
pub mod stores;
pub mod types;

pub use self::cascades::*;
pub use self::categories::*;
pub use self::customers::*;
pub use self::industries::*;
pub use self::orders::*;
pub use self::payment_options::*;
pub use self::products::*;
pub use self::stores::*;
pub use self::types::*;
