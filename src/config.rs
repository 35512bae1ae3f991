use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::BlogError;

/// Runtime settings. Every key can be overridden with a `TECHTRENDS_`-prefixed
/// environment variable, e.g. `TECHTRENDS_DATABASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Create the `posts` table at startup when it does not exist yet.
    pub init_schema: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:database.db".to_string(),
            listen_addr: "0.0.0.0:3111".to_string(),
            loglevel: "info".to_string(),
            init_schema: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, BlogError> {
        Self::figment().extract().map_err(BlogError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("TECHTRENDS_"))
    }
}
