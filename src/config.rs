// Runtime configuration loaded from the environment
// `.env` is read by `main` through dotenv before this module runs

use rust_decimal::Decimal;
use std::str::FromStr;

/// Configuration errors raised while reading the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Credentials for an account every new session starts with
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Lifetime of an access token in seconds
    pub access_token_ttl_secs: i64,
    /// Amount added to every ingredient by the restock-all action
    pub restock_amount: u32,
    /// Fraction of the baseline level below which an ingredient counts as low
    pub low_stock_ratio: Decimal,
    pub seed_admin: SeedAccount,
    pub seed_customer: SeedAccount,
}

impl AppConfig {
    /// Read configuration from environment variables
    ///
    /// Only `JWT_SECRET` is mandatory; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            jwt_secret,
            access_token_ttl_secs: parse_var("ACCESS_TOKEN_TTL_SECS", 3600)?,
            restock_amount: parse_var("RESTOCK_AMOUNT", 100)?,
            low_stock_ratio: parse_var("LOW_STOCK_RATIO", Decimal::new(2, 1))?,
            seed_admin: SeedAccount {
                username: std::env::var("SEED_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
                password: std::env::var("SEED_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "adminpass".to_string()),
            },
            seed_customer: SeedAccount {
                username: std::env::var("SEED_CUSTOMER_USERNAME")
                    .unwrap_or_else(|_| "customer".to_string()),
                password: std::env::var("SEED_CUSTOMER_PASSWORD")
                    .unwrap_or_else(|_| "custpass".to_string()),
            },
        })
    }

    /// Configuration with every default and the given signing secret
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: jwt_secret.into(),
            access_token_ttl_secs: 3600,
            restock_amount: 100,
            low_stock_ratio: Decimal::new(2, 1),
            seed_admin: SeedAccount {
                username: "admin".to_string(),
                password: "adminpass".to_string(),
            },
            seed_customer: SeedAccount {
                username: "customer".to_string(),
                password: "custpass".to_string(),
            },
        }
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_with_secret_defaults() {
        let config = AppConfig::with_secret("secret");
        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.restock_amount, 100);
        assert_eq!(config.low_stock_ratio, dec!(0.2));
        assert_eq!(config.seed_admin.username, "admin");
        assert_eq!(config.seed_customer.password, "custpass");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_var_falls_back_to_default() {
        let value: u32 = parse_var("COFFEE_SHOP_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        std::env::set_var("COFFEE_SHOP_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16, _> = parse_var("COFFEE_SHOP_TEST_BAD_PORT", 8080);
        assert!(matches!(result, Err(ConfigError::Invalid { name: "COFFEE_SHOP_TEST_BAD_PORT", .. })));
    }
}
