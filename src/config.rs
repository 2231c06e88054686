//! Config module contains the initialization of config with params.

use std::env;

use config_crate::{Config as RawConfig, ConfigError, Environment, File};

/// Basic settings - pool of connections to db, amount of worker threads
#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub database: String,
    pub thread_count: usize,
}

/// Static image storage settings
#[derive(Debug, Deserialize, Clone)]
pub struct Images {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: Server,
    pub images: Images,
}

impl Config {
    /// Creates config from base.toml, which can be overwritten by
    /// config/<env>.toml, where env is set in `RUN_MODE` environment
    /// variable. After that it could be overwritten by environment variables
    /// like MARKETPLACE_SERVER_DATABASE.
    pub fn new() -> Result<Self, ConfigError> {
        let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let mut s = RawConfig::new();
        s.merge(File::with_name("config/base"))?;
        s.merge(File::with_name(&format!("config/{}", env)).required(false))?;
        s.merge(Environment::with_prefix("MARKETPLACE"))?;
        s.try_into()
    }
}
