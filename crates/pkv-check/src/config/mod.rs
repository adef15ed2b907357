use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::workflows::eligibility::{ResetPolicy, WizardConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub wizard: WizardConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            wizard: load_wizard_config()?,
        })
    }
}

fn load_wizard_config() -> Result<WizardConfig, ConfigError> {
    let defaults = WizardConfig::default();

    let privacy_mode = match env::var("PKV_PRIVACY_MODE") {
        Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidPrivacyMode { value: raw })?,
        Err(_) => defaults.privacy_mode,
    };

    let reset_policy = match env::var("PKV_RESET_POLICY") {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "navigation" | "navigation_only" => ResetPolicy::NavigationOnly,
            "answers" | "clear_answers" => ResetPolicy::ClearAnswers,
            _ => return Err(ConfigError::InvalidResetPolicy { value: raw }),
        },
        Err(_) => defaults.reset_policy,
    };

    let source_url = env::var("PKV_SOURCE_URL").unwrap_or(defaults.source_url);
    let booking_url = env::var("PKV_BOOKING_URL").unwrap_or(defaults.booking_url);

    Ok(WizardConfig {
        privacy_mode,
        reset_policy,
        source_url,
        booking_url,
    })
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPrivacyMode { value: String },
    InvalidResetPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPrivacyMode { value } => {
                write!(f, "PKV_PRIVACY_MODE must be a boolean flag, got '{value}'")
            }
            ConfigError::InvalidResetPolicy { value } => write!(
                f,
                "PKV_RESET_POLICY must be 'navigation' or 'answers', got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidPrivacyMode { .. }
            | ConfigError::InvalidResetPolicy { .. } => None,
        }
    }
}
