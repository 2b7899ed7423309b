//! Configuration loading and management
//!
//! Configuration is layered: built-in defaults, then an optional YAML file
//! (path in `REGISTRAR_CONFIG`), then environment variables.
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 3004
//!   cors_origin: http://localhost:3000
//! storage:
//!   backend: mongodb
//!   mongodb:
//!     uri: mongodb://localhost:27017
//!     database: registrar
//! ```

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable holding the path of the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "REGISTRAR_CONFIG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3004;
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_MONGODB_DATABASE: &str = "registrar";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Single origin allowed to make cross-origin requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: None,
        }
    }
}

/// Which document store backs the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Mongodb,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "in-memory" | "memory" => Ok(StorageBackend::InMemory),
            "mongodb" | "mongo" => Ok(StorageBackend::Mongodb),
            other => Err(anyhow!("Unknown storage backend: {}", other)),
        }
    }
}

/// MongoDB connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_MONGODB_DATABASE.to_string(),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub mongodb: MongoConfig,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load defaults, the optional YAML file and the process environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(path = %path, "loading configuration file");
                Self::from_yaml_file(&path)?
            }
            Err(_) => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides read through `lookup`
    ///
    /// Recognised keys: `PORT`, `HOST_NAME`, `CORS_ORIGIN`, `MONGODB_URI`,
    /// `MONGODB_DATABASE`, `STORAGE_BACKEND`. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow!("Invalid PORT '{}': {}", port, e))?;
        }
        if let Some(host) = get("HOST_NAME") {
            self.server.host = host;
        }
        if let Some(origin) = get("CORS_ORIGIN") {
            self.server.cors_origin = Some(origin);
        }
        if let Some(uri) = get("MONGODB_URI") {
            self.storage.mongodb.uri = uri;
        }
        if let Some(database) = get("MONGODB_DATABASE") {
            self.storage.mongodb.database = database;
        }
        if let Some(backend) = get("STORAGE_BACKEND") {
            self.storage.backend = backend.parse()?;
        }

        Ok(())
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
