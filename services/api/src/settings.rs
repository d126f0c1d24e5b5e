//! Service settings
//!
//! Settings are layered: built-in defaults, then an optional `attendance.*`
//! file in the working directory, then `ATTENDANCE_*` environment variables.

use common::store::StoreConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Service settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Path of the JSON document holding all classes
    pub database_path: PathBuf,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Settings {
    /// Load settings from defaults, optional file and environment
    ///
    /// # Environment Variables
    /// - `ATTENDANCE_HOST`: bind interface (default: "0.0.0.0")
    /// - `ATTENDANCE_PORT`: listen port (default: 2000)
    /// - `ATTENDANCE_DATABASE_PATH`: document path (default: "database.json")
    /// - `ATTENDANCE_LOG_LEVEL`: log filter (default: "info")
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 2000_i64)?
            .set_default("database_path", "database.json")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("attendance").required(false))
            .add_source(Environment::with_prefix("ATTENDANCE").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_path)
    }
}
