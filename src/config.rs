/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, HTTP limits)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub request_body_limit_bytes: usize,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env, map in tests, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let request_body_limit_bytes: usize = parse_or(
            &lookup,
            "REQUEST_BODY_LIMIT_BYTES",
            DEFAULT_BODY_LIMIT_BYTES,
        )?;
        if request_body_limit_bytes == 0 {
            return Err(ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES"));
        }

        let timeout_seconds: u64 =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS)?;
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        Ok(Self {
            addr,
            app_env,
            request_body_limit_bytes,
            request_timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

// unset -> default, set but unparsable -> error
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("REQUEST_BODY_LIMIT_BYTES", "4096"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(config.request_body_limit_bytes, 4096);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            config_from(&[("PORT", "http")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            config_from(&[("PORT", "70000")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            config_from(&[("REQUEST_TIMEOUT_SECONDS", "0")]).unwrap_err(),
            ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS")
        );
        assert_eq!(
            config_from(&[("REQUEST_BODY_LIMIT_BYTES", "-1")]).unwrap_err(),
            ConfigError::Invalid("REQUEST_BODY_LIMIT_BYTES")
        );
    }

    #[test]
    fn unknown_app_env_is_development() {
        assert_eq!(AppEnv::parse(Some("staging")), AppEnv::Development);
        assert_eq!(AppEnv::parse(None), AppEnv::Development);
        assert_eq!(AppEnv::parse(Some("production")), AppEnv::Production);
    }
}
