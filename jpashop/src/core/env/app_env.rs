use std::{env, str::FromStr};

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppEnv {
    pub app_port: u16,
    pub db_uri: DbUri,
    pub db_pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct DbUri(pub String);

#[derive(Debug, Error, PartialEq)]
pub enum EnvError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

impl AppEnv {
    pub fn new() -> Result<Self, EnvError> {
        dotenv().ok();

        Ok(Self {
            app_port: Self::get_env("APP_PORT", 3000),
            db_uri: DbUri(Self::require_env("DATABASE_URL")?),
            db_pool_size: Self::get_env("DB_POOL_SIZE", 10),
        })
    }

    fn require_env(var: &'static str) -> Result<String, EnvError> {
        env::var(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(EnvError::Missing(var))
    }

    fn get_env<T: FromStr>(var: &str, default: T) -> T {
        env::var(var)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_falls_back_to_default() {
        let port: u16 = AppEnv::get_env("JPASHOP_TEST_UNSET_PORT", 3000);
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_require_env_reports_missing_variable() {
        let result = AppEnv::require_env("JPASHOP_TEST_UNSET_DATABASE_URL");
        assert_eq!(
            result,
            Err(EnvError::Missing("JPASHOP_TEST_UNSET_DATABASE_URL"))
        );
        assert_eq!(
            EnvError::Missing("DATABASE_URL").to_string(),
            "DATABASE_URL must be set"
        );
    }
}
