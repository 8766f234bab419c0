//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable selecting the `{environment}.toml` overlay.
pub const ENVIRONMENT_VAR: &str = "ROSTER_ENVIRONMENT";

/// Configuration loader over layered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER__` prefix (`ROSTER__SERVER__PORT=8080`)
    ///
    /// Every file is optional; built-in defaults apply to anything unset.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RosterError> {
        let config = Self::load_config(&config_dir.into())?;
        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, RosterError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ROSTER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    pub fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        if config.database.url.is_empty() {
            return Err(RosterError::Configuration("Database URL is required".to_string()));
        }

        if config.server.port == 0 {
            return Err(RosterError::Configuration("Server port must be 1-65535".to_string()));
        }

        if config.database.max_connections == 0 {
            return Err(RosterError::Configuration(
                "Database max_connections must be at least 1".to_string(),
            ));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(RosterError::Configuration(format!(
                "Database min_connections ({}) exceeds max_connections ({})",
                config.database.min_connections, config.database.max_connections
            )));
        }

        if let Some(seed) = config
            .bootstrap
            .users
            .iter()
            .find(|u| u.name.is_empty() || u.email.is_empty())
        {
            return Err(RosterError::Configuration(format!(
                "Seed user entries need a name and an email: {:?}",
                seed
            )));
        }

        if config.database.url.contains(":memory:") && config.database.max_connections > 1 {
            warn!("In-memory SQLite with more than one pooled connection; each connection sees its own database");
        }

        Ok(())
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let loader = ConfigLoader::new(missing.to_string_lossy()).unwrap();

        let config = loader.get();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.url, "sqlite://database.db");
        assert_eq!(config.bootstrap.users.len(), 2);
    }

    #[test]
    fn test_default_toml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
            [server]
            port = 8088

            [database]
            url = "sqlite://roster-test.db"

            [bootstrap]
            seed_on_startup = false
            "#,
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        let config = loader.get();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite://roster-test.db");
        assert!(!config.bootstrap.seed_on_startup);
        assert_eq!(config.bootstrap.users.len(), 2);
    }

    #[test]
    fn test_local_toml_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 7000\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 7001\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().server.port, 7001);
    }

    #[test]
    fn test_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate_config(&config),
            Err(RosterError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let mut config = AppConfig::default();
        config.database.min_connections = 10;
        config.database.max_connections = 2;
        assert!(ConfigLoader::validate_config(&config).is_err());

        config.database.min_connections = 0;
        config.database.max_connections = 0;
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_seed_user() {
        let mut config = AppConfig::default();
        config.bootstrap.users.push(crate::SeedUser::new("", "ghost@example.com"));
        assert!(ConfigLoader::validate_config(&config).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigLoader::validate_config(&AppConfig::default()).is_ok());
    }
}
