//! Configuration management

use serde::{Deserialize, Serialize};

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default base URL of the annotation service.
pub const DEFAULT_ANNOTATION_BASE_URL: &str = "http://annoq.org/api/query";

/// Default base URL of the supplement service.
pub const DEFAULT_SUPPLEMENT_BASE_URL: &str = "http://pantherdb.org/api/query";

/// Default timeout for outbound annotation calls in seconds.
pub const DEFAULT_ANNOTATION_TIMEOUT_SECS: u64 = 30;

/// Default session time-to-live in seconds (30 minutes).
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1800;

/// Default CORS allowed origin. The upload/query surface is meant to be
/// called from arbitrary frontends, so the default is fully permissive.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "*";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub annotation: AnnotationConfig,
    pub session: SessionConfig,
    pub cors: CorsConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// Outbound annotation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationConfig {
    pub annotation_base_url: String,
    pub supplement_base_url: String,
    pub timeout_secs: u64,
}

/// Session store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub ttl_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: std::env::var("ANNOFUSE_HOST")
                    .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: std::env::var("ANNOFUSE_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: std::env::var("ANNOFUSE_SHUTDOWN_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            },
            annotation: AnnotationConfig {
                annotation_base_url: std::env::var("ANNOTATION_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_ANNOTATION_BASE_URL.to_string()),
                supplement_base_url: std::env::var("SUPPLEMENT_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_SUPPLEMENT_BASE_URL.to_string()),
                timeout_secs: std::env::var("ANNOTATION_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_ANNOTATION_TIMEOUT_SECS),
            },
            session: SessionConfig {
                ttl_secs: std::env::var("SESSION_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SESSION_TTL_SECS),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                allow_credentials: std::env::var("CORS_ALLOW_CREDENTIALS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.annotation.annotation_base_url.is_empty() {
            anyhow::bail!("Annotation service base URL cannot be empty");
        }

        if self.annotation.supplement_base_url.is_empty() {
            anyhow::bail!("Supplement service base URL cannot be empty");
        }

        if self.annotation.timeout_secs == 0 {
            anyhow::bail!("Annotation timeout must be greater than 0");
        }

        if self.session.ttl_secs == 0 {
            anyhow::bail!("Session TTL must be greater than 0");
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            annotation: AnnotationConfig {
                annotation_base_url: DEFAULT_ANNOTATION_BASE_URL.to_string(),
                supplement_base_url: DEFAULT_SUPPLEMENT_BASE_URL.to_string(),
                timeout_secs: DEFAULT_ANNOTATION_TIMEOUT_SECS,
            },
            session: SessionConfig {
                ttl_secs: DEFAULT_SESSION_TTL_SECS,
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
                allow_credentials: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_annotation_url_is_rejected() {
        let mut config = Config::default();
        config.annotation.annotation_base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.annotation.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_session_ttl_is_rejected() {
        let mut config = Config::default();
        config.session.ttl_secs = 0;
        assert!(config.validate().is_err());
    }
}
