//! Catalogue inspection commands.
//!
//! # Usage
//!
//! ```bash
//! menu-cli catalogue validate https://cdn.example.com/catalogue.json
//! menu-cli catalogue validate crates/storefront/static/catalogue.json
//! ```

use super::{CommandError, load_catalogue};

/// Load a catalogue and print one line per item.
///
/// # Errors
///
/// Returns `CommandError` if the source is invalid or the catalogue fails to
/// load (network error, non-2xx status, malformed body, duplicate ids or
/// negative prices).
pub async fn validate(source: &str) -> Result<(), CommandError> {
    let catalogue = load_catalogue(source).await?;

    #[allow(clippy::print_stdout)]
    {
        for item in catalogue.iter() {
            println!("{:>6}  {:<32} {:>10}", item.id.as_str(), item.name, item.price.display());
        }
        println!("{} items OK", catalogue.len());
    }

    Ok(())
}
