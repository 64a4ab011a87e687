// region:    --- Imports
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Defaults
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/auction";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// 개발용 서명 키. 운영 환경에서는 반드시 JWT_SECRET 으로 덮어쓴다.
const DEV_JWT_SECRET: &str = "dev-only-jwt-secret";
// endregion: --- Defaults

// region:    --- Config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 서버 설정
#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl Config {
    /// 환경 변수(.env 포함)에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!(
                    "{:<12} --> JWT_SECRET 미설정, 개발용 서명 키 사용",
                    "Config"
                );
                DEV_JWT_SECRET.to_string()
            }
        };

        Ok(Self {
            port: parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT)?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                env::var("DATABASE_MAX_CONNECTIONS").ok(),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            jwt_secret,
            token_ttl_secs: parse_or(
                "TOKEN_TTL_SECS",
                env::var("TOKEN_TTL_SECS").ok(),
                DEFAULT_TOKEN_TTL_SECS,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

/// 값이 없으면 기본값, 있으면 파싱
fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        None => {
            info!("{:<12} --> {} 미설정, 기본값 사용: {}", "Config", key, default);
            Ok(default)
        }
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

// endregion: --- Config

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_falls_back_to_default() {
        assert_eq!(parse_or("PORT", None, 5000u16).unwrap(), 5000);
    }

    #[test]
    fn present_value_is_parsed() {
        assert_eq!(parse_or("PORT", Some(" 8080 ".into()), 5000u16).unwrap(), 8080);
    }

    #[test]
    fn garbage_value_is_an_error() {
        let err = parse_or("TOKEN_TTL_SECS", Some("an hour".into()), 3600i64).unwrap_err();
        assert!(err.to_string().contains("TOKEN_TTL_SECS"));
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.token_ttl_secs, 3600);
        assert_eq!(config.database_max_connections, 5);
    }
}
