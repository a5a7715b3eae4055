//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_CATALOGUE_SOURCE` - `http(s)://` URL or file path of the
//!   catalogue JSON (default: `crates/storefront/static/catalogue.json`)
//! - `STOREFRONT_SALES_TAX_DIVISOR` - Divisor applied to the subtotal to get
//!   tax (default: 7.25)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use menu_cart_core::SalesTax;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalogue::CatalogueSource;

const DEFAULT_CATALOGUE_SOURCE: &str = "crates/storefront/static/catalogue.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Where the catalogue is read from
    pub catalogue_source: CatalogueSource,
    /// Sales tax applied at checkout
    pub sales_tax: SalesTax,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            catalogue_source: CatalogueSource::File(DEFAULT_CATALOGUE_SOURCE.into()),
            sales_tax: SalesTax::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = parse_var("STOREFRONT_HOST", &get_or("STOREFRONT_HOST", "127.0.0.1"))?;
        let port = parse_var("STOREFRONT_PORT", &get_or("STOREFRONT_PORT", "3000"))?;

        let catalogue_source = CatalogueSource::parse(&get_or(
            "STOREFRONT_CATALOGUE_SOURCE",
            DEFAULT_CATALOGUE_SOURCE,
        ))
        .map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_CATALOGUE_SOURCE".to_string(), e.to_string())
        })?;

        let divisor: Decimal = parse_var(
            "STOREFRONT_SALES_TAX_DIVISOR",
            &get_or(
                "STOREFRONT_SALES_TAX_DIVISOR",
                &SalesTax::DEFAULT_DIVISOR.to_string(),
            ),
        )?;
        let sales_tax = SalesTax::new(divisor).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_SALES_TAX_DIVISOR".to_string(), e.to_string())
        })?;

        Ok(Self {
            host,
            port,
            catalogue_source,
            sales_tax,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a variable's value, naming the variable on failure.
fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
