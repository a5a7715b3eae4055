//! CLI command implementations.

pub mod catalogue;
pub mod quote;

use menu_cart_core::{Catalogue, PricingError, SummaryError};
use menu_cart_storefront::catalogue::{CatalogueSource, LoadError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The source string is not a usable URL or path.
    #[error("Invalid catalogue source: {0}")]
    InvalidSource(#[from] url::ParseError),

    /// The catalogue could not be loaded.
    #[error("Unable to fetch catalogue: {0}")]
    Load(#[from] LoadError),

    /// The cart references an unknown item or an amount overflows.
    #[error("{0}")]
    Summary(#[from] SummaryError),

    /// The tax divisor is not usable.
    #[error("{0}")]
    Pricing(#[from] PricingError),
}

/// Parse a source string and load the catalogue it points to.
async fn load_catalogue(source: &str) -> Result<Catalogue, CommandError> {
    let source = CatalogueSource::parse(source)?;
    tracing::info!(%source, "Loading catalogue");
    Ok(menu_cart_storefront::catalogue::load(&source, &reqwest::Client::new()).await?)
}
