//! Application configuration
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

use crate::validation::DEFAULT_MAX_UPLOAD_SIZE;

/// Built-in webhook endpoints from the processing service
const DEFAULT_WEBHOOK_TEST_URL: &str =
    "https://cape-fear-automations.app.n8n.cloud/webhook-test/70729559-d618-4bbf-95ad-b4b3c88b645d";
const DEFAULT_WEBHOOK_PRODUCTION_URL: &str =
    "https://cape-fear-automations.app.n8n.cloud/webhook/70729559-d618-4bbf-95ad-b4b3c88b645d";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Webhook endpoint used when running against the test environment
    pub webhook_test_url: String,
    /// Webhook endpoint used in production
    pub webhook_production_url: String,
    /// Maximum upload file size in bytes
    pub max_upload_size: u64,
    /// Environment (test/production); selects which endpoint is invoked
    pub environment: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Test,
    Production,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // The service only ever invoked the production endpoint, so that is
        // the default; ENVIRONMENT=test switches to the test endpoint.
        let environment = match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .to_lowercase()
            .as_str()
        {
            "test" | "development" | "dev" => Environment::Test,
            _ => Environment::Production,
        };

        // WEBHOOK_URL overrides both endpoints at once
        let override_url = env::var("WEBHOOK_URL").ok();

        let webhook_test_url = override_url.clone().unwrap_or_else(|| {
            env::var("WEBHOOK_TEST_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_TEST_URL.to_string())
        });
        let webhook_production_url = override_url.unwrap_or_else(|| {
            env::var("WEBHOOK_PRODUCTION_URL")
                .unwrap_or_else(|_| DEFAULT_WEBHOOK_PRODUCTION_URL.to_string())
        });

        for url in [&webhook_test_url, &webhook_production_url] {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ConfigError::Invalid(format!(
                    "webhook URL must be http(s): {}",
                    url
                )));
            }
        }

        let max_upload_size = match env::var("MAX_UPLOAD_SIZE") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::Invalid(format!("MAX_UPLOAD_SIZE is not a byte count: {}", raw))
            })?,
            Err(_) => DEFAULT_MAX_UPLOAD_SIZE,
        };

        Ok(Config {
            webhook_test_url,
            webhook_production_url,
            max_upload_size,
            environment,
        })
    }

    /// Check if running against the production endpoint
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// The webhook endpoint selected by the current environment
    pub fn webhook_url(&self) -> &str {
        match self.environment {
            Environment::Production => &self.webhook_production_url,
            Environment::Test => &self.webhook_test_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_test_url: DEFAULT_WEBHOOK_TEST_URL.to_string(),
            webhook_production_url: DEFAULT_WEBHOOK_PRODUCTION_URL.to_string(),
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            environment: Environment::Production,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_production() {
        let config = Config::default();
        assert!(config.is_production());
        assert_eq!(config.webhook_url(), config.webhook_production_url);
        assert!(config.webhook_url().contains("/webhook/"));
    }

    #[test]
    fn test_test_environment_selects_test_url() {
        let config = Config {
            environment: Environment::Test,
            ..Config::default()
        };
        assert_eq!(config.webhook_url(), config.webhook_test_url);
        assert!(config.webhook_url().contains("/webhook-test/"));
    }

    #[test]
    fn test_default_max_upload_size() {
        assert_eq!(Config::default().max_upload_size, 10 * 1024 * 1024);
    }
}
