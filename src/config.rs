use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Environment variable prefix, e.g. `USER_STORE_DATABASE_URL`.
pub const ENV_PREFIX: &str = "USER_STORE_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// sqlx connection string; the file is created if missing.
    pub database_url: String,
    pub loglevel: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:users.db".to_string(),
            loglevel: "info".to_string(),
            max_connections: 1,
        }
    }
}

impl Config {
    /// Defaults overlaid with `USER_STORE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, StoreError> {
        Ok(Self::figment().extract()?)
    }
}
