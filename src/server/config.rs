// src/server/config.rs
//! Configuration file parsing for the recipe server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [storage] - Store backend and database path

use crate::server::ServerConfig;
use crate::store::{StoreBackend, StoreKind};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Storage settings
    #[serde(default)]
    pub storage: StorageSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// API bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// Store backend ("memory" or "sqlite")
    #[serde(default = "default_backend")]
    pub backend: StoreKind,

    /// SQLite database file, used by the sqlite backend
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: default_db_path(),
        }
    }
}

fn default_backend() -> StoreKind {
    StoreKind::Memory
}

fn default_db_path() -> PathBuf {
    PathBuf::from("recipes.db")
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if self.storage.backend == StoreKind::Sqlite && self.storage.path.as_os_str().is_empty() {
            anyhow::bail!("storage.path must be set when storage.backend = \"sqlite\"");
        }

        Ok(())
    }

    /// Parsed bind address
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        self.validate()?;

        let backend = match self.storage.backend {
            StoreKind::Memory => StoreBackend::Memory,
            StoreKind::Sqlite => StoreBackend::Sqlite(self.storage.path.clone()),
        };

        Ok(ServerConfig {
            bind_addr: self.bind_addr()?,
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.storage.backend, StoreKind::Memory);

        let server = config.to_server_config().unwrap();
        assert_eq!(server.backend, StoreBackend::Memory);
        assert_eq!(server.bind_addr.port(), 8080);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[server]
bind = "0.0.0.0:3000"

[storage]
backend = "sqlite"
path = "/var/lib/recipes/recipes.db"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr.port(), 3000);
        assert_eq!(
            server.backend,
            StoreBackend::Sqlite(PathBuf::from("/var/lib/recipes/recipes.db"))
        );
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.storage.path, PathBuf::from("recipes.db"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let toml_str = r#"
[server]
bind = "not-an-address"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let toml_str = r#"
[storage]
backend = "postgres"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_sqlite_requires_path() {
        let toml_str = r#"
[storage]
backend = "sqlite"
path = ""
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = \"127.0.0.1:9090\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.bind_addr().unwrap().port(), 9090);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(AppConfig::load(Path::new("/nonexistent/recipes.toml")).is_err());
    }
}
