// Configuration management from environment variables

use dotenv::dotenv;
use std::env;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a connection URL could not be assembled
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {scheme} URL: {source}")]
    InvalidUrl {
        scheme: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{scheme} URL for host {host:?} cannot carry credentials")]
    CredentialsRejected { scheme: &'static str, host: String },
}

/// Connection settings for the Redis cache
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

impl RedisConfig {
    /// Builds the `redis://` connection URL, database 0
    pub fn url(&self) -> Result<Url, ConfigError> {
        let mut url = parse_url("redis", &format!("redis://{}:{}/0", self.host, self.port))?;
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|_| credentials_rejected("redis", &self.host))?;
        }
        Ok(url)
    }
}

/// Connection settings for the MySQL database
#[derive(Debug, Clone)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
}

impl MysqlConfig {
    /// Builds the `mysql://` connection URL with percent-encoded credentials
    pub fn url(&self) -> Result<Url, ConfigError> {
        let mut url = parse_url(
            "mysql",
            &format!("mysql://{}:{}/{}", self.host, self.port, self.name),
        )?;
        url.set_username(&self.user)
            .map_err(|_| credentials_rejected("mysql", &self.host))?;
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|_| credentials_rejected("mysql", &self.host))?;
        }
        Ok(url)
    }
}

/// Time bounds applied to backend calls
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// Startup connection attempt
    pub connect: Duration,
    /// Liveness probes behind `/health`
    pub probe: Duration,
    /// Round-trip test cycles
    pub operation: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            probe: Duration::from_secs(2),
            operation: Duration::from_secs(5),
        }
    }
}

/// Configuration settings for the service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Backend configuration
    pub backends_enabled: bool,
    pub redis: RedisConfig,
    pub mysql: MysqlConfig,
    pub timeouts: Timeouts,
}

impl ServiceConfig {
    /// Creates configuration instance from environment variables with defaults
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let port = |key: &str, default: u16| {
            lookup(key)
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(default)
        };
        // Empty values count as unset
        let secret = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let backends_enabled = lookup("BACKENDS_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            host: var("HOST", "0.0.0.0"),
            port: port("PORT", 3000),
            backends_enabled,
            redis: RedisConfig {
                host: var("REDIS_HOST", "redis"),
                port: port("REDIS_PORT", 6379),
                password: secret("REDIS_PASSWORD"),
            },
            mysql: MysqlConfig {
                host: var("DB_HOST", "db"),
                port: port("DB_PORT", 3306),
                user: var("DB_USER", "admin"),
                password: secret("DB_PASSWORD"),
                name: var("DB_NAME", "mydb"),
            },
            timeouts: Timeouts::default(),
        }
    }

    /// Returns formatted server address string (host:port)
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_url(scheme: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { scheme, source })
}

fn credentials_rejected(scheme: &'static str, host: &str) -> ConfigError {
    ConfigError::CredentialsRejected {
        scheme,
        host: host.to_string(),
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Renders a connection URL with its password masked, for logging
pub fn redacted_url(url: &Url) -> String {
    let mut masked = url.clone();
    if masked.password().is_some() {
        let _ = masked.set_password(Some("***"));
    }
    masked.to_string()
}
