//! Application settings, loaded once at startup

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

/// Signing secret used when `SECRET_KEY` is not provided
pub const DEFAULT_SECRET_KEY: &str = "change-this-secret-key-in-production";

/// Process-wide settings
///
/// Built from environment variables over defaults, then handed to the
/// components that need it. Nothing mutates it after start.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to
    pub bind_address: String,
    /// HMAC secret for signing access tokens
    pub secret_key: String,
    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,
    /// Directory holding the frontend bundle, served as the router fallback
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfig from environment variables
    ///
    /// # Environment Variables
    /// - `BIND_ADDRESS`: listen address (default: "0.0.0.0:8000")
    /// - `SECRET_KEY`: token signing secret (default: development placeholder)
    /// - `ACCESS_TOKEN_EXPIRE_MINUTES`: token lifetime (default: 60)
    /// - `STATIC_DIR`: optional frontend bundle directory
    pub fn from_env() -> Result<Self> {
        let settings = Config::builder()
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("secret_key", DEFAULT_SECRET_KEY)?
            .set_default("access_token_expire_minutes", 60)?
            .add_source(Environment::default())
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        config.static_dir = config.static_dir.filter(|dir| !dir.trim().is_empty());

        if config.access_token_expire_minutes <= 0 {
            anyhow::bail!("ACCESS_TOKEN_EXPIRE_MINUTES must be a positive number of minutes");
        }

        if config.secret_key == DEFAULT_SECRET_KEY {
            warn!("SECRET_KEY is not set, using the development default");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_app_config_defaults() {
        unsafe {
            for key in [
                "BIND_ADDRESS",
                "SECRET_KEY",
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                "STATIC_DIR",
            ] {
                std::env::remove_var(key);
            }
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.secret_key, DEFAULT_SECRET_KEY);
        assert_eq!(config.access_token_expire_minutes, 60);
        assert!(config.static_dir.is_none());
    }

    #[test]
    #[serial]
    fn test_app_config_from_env_with_custom_values() {
        unsafe {
            std::env::set_var("SECRET_KEY", "s3cret");
            std::env::set_var("ACCESS_TOKEN_EXPIRE_MINUTES", "15");
            std::env::set_var("STATIC_DIR", "frontend");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.secret_key, "s3cret");
        assert_eq!(config.access_token_expire_minutes, 15);
        assert_eq!(config.static_dir.as_deref(), Some("frontend"));

        unsafe {
            std::env::remove_var("SECRET_KEY");
            std::env::remove_var("ACCESS_TOKEN_EXPIRE_MINUTES");
            std::env::remove_var("STATIC_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_app_config_rejects_non_positive_expiry() {
        unsafe {
            std::env::set_var("ACCESS_TOKEN_EXPIRE_MINUTES", "0");
        }

        assert!(AppConfig::from_env().is_err());

        unsafe {
            std::env::remove_var("ACCESS_TOKEN_EXPIRE_MINUTES");
        }
    }

    #[test]
    #[serial]
    fn test_app_config_ignores_blank_static_dir() {
        unsafe {
            std::env::set_var("STATIC_DIR", "  ");
        }

        let config = AppConfig::from_env().unwrap();
        assert!(config.static_dir.is_none());

        unsafe {
            std::env::remove_var("STATIC_DIR");
        }
    }
}
