//! Process configuration.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. `config.toml` in the working directory (optional)
//! 3. Environment variables prefixed with `USERLOOKUP_`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "USERLOOKUP_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// sqlx SQLite URL of the users database.
    pub database_url: String,
    pub listen_addr: String,
    pub max_connections: u32,
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:users.db".to_string(),
            listen_addr: "127.0.0.1:4000".to_string(),
            max_connections: 5,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
