//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub openai: OpenAiConfig,
    pub worker: WorkerConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Chat-completion provider configuration
#[derive(Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl OpenAiConfig {
    /// Config for the default endpoint and model with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            temperature: default_temperature(),
        }
    }
}

// The API key must never reach the logs
impl std::fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Background spam check worker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Maximum number of checks running at once
    #[serde(default = "default_worker_concurrency")]
    pub concurrency: usize,
    /// Jobs the in-process queue holds before new ones are dropped
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            concurrency: default_worker_concurrency(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "chatter-spam".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_worker_concurrency() -> usize {
    4
}

fn default_queue_capacity() -> usize {
    1024
}

/// Parse an optional variable, rejecting values that are present but malformed
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(raw) => Environment::parse(&raw).ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            Err(_) => Environment::default(),
        };

        let temperature: f32 = parse_var("OPENAI_TEMPERATURE")?.unwrap_or_else(default_temperature);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidValue(
                "OPENAI_TEMPERATURE",
                temperature.to_string(),
            ));
        }

        let worker = WorkerConfig {
            concurrency: parse_var("SPAM_CHECK_WORKERS")?.unwrap_or_else(default_worker_concurrency),
            queue_capacity: parse_var("SPAM_CHECK_QUEUE_CAPACITY")?
                .unwrap_or_else(default_queue_capacity),
        };
        if worker.concurrency == 0 {
            return Err(ConfigError::InvalidValue("SPAM_CHECK_WORKERS", "0".to_string()));
        }
        if worker.queue_capacity == 0 {
            return Err(ConfigError::InvalidValue(
                "SPAM_CHECK_QUEUE_CAPACITY",
                "0".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: parse_var("API_PORT")?.ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
            },
            openai: OpenAiConfig {
                api_key: required_var("OPENAI_API_KEY")?,
                base_url: env::var("OPENAI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|_| default_openai_base_url()),
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| default_openai_model()),
                temperature,
            },
            worker,
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
