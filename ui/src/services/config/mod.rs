//! Store configuration
//!
//! The Supabase endpoint and public anon key are baked into the WASM bundle at
//! build time from `SUPABASE_URL` and `SUPABASE_ANON_KEY`. Without both the
//! page cannot register anyone, so the app refuses to render the form.

use std::sync::OnceLock;
use thiserror::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
pub const DEFAULT_TABLE: &str = "registrations";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {name}")]
    Missing { name: String },

    #[error("Invalid configuration value: {name} - {reason}")]
    Invalid { name: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl StoreConfig {
    /// Load from the values captured at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = required(URL_VAR, url)?;
        let anon_key = required(ANON_KEY_VAR, anon_key)?;

        let config = Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
            table: DEFAULT_TABLE.to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                name: URL_VAR.to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::Missing {
                name: ANON_KEY_VAR.to_string(),
            });
        }

        if self.table.trim().is_empty() {
            return Err(ConfigError::Invalid {
                name: "table".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// PostgREST endpoint for the registrations table
    pub fn rest_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }
}

fn required(name: &str, value: Option<&str>) -> Result<String, ConfigError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ConfigError::Missing {
            name: name.to_string(),
        }),
    }
}

static GLOBAL_CONFIG: OnceLock<Result<StoreConfig, ConfigError>> = OnceLock::new();

/// Get the build-time configuration, loaded once per page
pub fn get_global_config() -> Result<StoreConfig, ConfigError> {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = StoreConfig::from_build_env();
            if let Err(e) = &config {
                tracing::error!("Invalid store configuration: {}", e);
            }
            config
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values() {
        let config =
            StoreConfig::from_values(Some("https://abc.supabase.co/"), Some("anon-key")).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.table, "registrations");
        assert_eq!(
            config.rest_endpoint(),
            "https://abc.supabase.co/rest/v1/registrations"
        );
    }

    #[test]
    fn test_missing_values_are_fatal() {
        assert_eq!(
            StoreConfig::from_values(None, Some("key")),
            Err(ConfigError::Missing {
                name: "SUPABASE_URL".to_string()
            })
        );
        assert_eq!(
            StoreConfig::from_values(Some("https://abc.supabase.co"), Some("  ")),
            Err(ConfigError::Missing {
                name: "SUPABASE_ANON_KEY".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_non_http_url() {
        let err = StoreConfig::from_values(Some("abc.supabase.co"), Some("key")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
