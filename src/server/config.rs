use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 100;
const DEFAULT_SESSION_TIMEOUT_MINUTES: i64 = 30;
const DEFAULT_OTP_VALIDITY_MINUTES: u64 = 5;
const DEFAULT_STAFF_PASSWORD: &str = "staff@123";
const DEFAULT_ADMIN_PASSWORD: &str = "admin@123";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    /// Allowed CORS origins. Empty allows any origin without credentials.
    pub cors_allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u32,

    pub session_timeout_minutes: i64,
    pub otp_validity_minutes: u64,

    pub default_staff_password: String,
    pub default_admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            upload_dir: PathBuf::from(var_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: parse_var_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            cors_allowed_origins: split_list(&var_or("CORS_ALLOWED_ORIGINS", "")),
            rate_limit_per_minute: parse_var_or(
                "RATE_LIMIT_PER_MINUTE",
                DEFAULT_RATE_LIMIT_PER_MINUTE,
            )?,
            session_timeout_minutes: parse_var_or(
                "SESSION_TIMEOUT_MINUTES",
                DEFAULT_SESSION_TIMEOUT_MINUTES,
            )?,
            otp_validity_minutes: parse_var_or(
                "OTP_VALIDITY_MINUTES",
                DEFAULT_OTP_VALIDITY_MINUTES,
            )?,
            default_staff_password: var_or("DEFAULT_STAFF_PASSWORD", DEFAULT_STAFF_PASSWORD),
            default_admin_password: var_or("DEFAULT_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = var_or(name, default);
    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

fn parse_var_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests splitting a comma-separated origin list.
    ///
    /// Expected: blank entries dropped and whitespace trimmed
    #[test]
    fn splits_origin_list() {
        assert_eq!(
            split_list(" http://a.test, ,http://b.test "),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
