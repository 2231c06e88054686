//! Marketplace is the persistent data layer of a multi-tenant e-commerce
//! platform: industry/category taxonomy, stores with locations, products
//! with variants, customers, orders with line items, payments and shipping
//! addresses.
//!
//! The layered structure of the app is
//!
//! `Service -> Repo -> PostgreSQL`
//!
//! There is no controller layer here: the crate is consumed by a hosting
//! web framework which owns routing, authentication and request parsing.
//! Each layer can throw Error with context or cover occurred error with
//! Error in the context.

#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]
extern crate config as config_crate;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate failure;
extern crate futures;
extern crate futures_cpupool;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate num_traits;
extern crate r2d2;
extern crate regex;
extern crate rust_decimal;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate validator;
#[macro_use]
extern crate validator_derive;

#[cfg(test)]
#[macro_use]
extern crate serde_json;
#[cfg(test)]
extern crate tokio_core;

#[macro_use]
pub mod macros;
pub mod config;
pub mod errors;
pub mod models;
pub mod repos;
pub mod schema;
pub mod services;
