//! Menu Cart CLI - catalogue and checkout tools.
//!
//! # Usage
//!
//! ```bash
//! # Check that a catalogue resource loads and list its items
//! menu-cli catalogue validate crates/storefront/static/catalogue.json
//!
//! # Price a cart without starting the storefront
//! menu-cli quote crates/storefront/static/catalogue.json --item 1 --item 1 --item 3
//! ```
//!
//! # Commands
//!
//! - `catalogue validate` - Load a catalogue from a URL or file
//! - `quote` - Compute subtotal, tax and total for a list of items

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "menu-cli")]
#[command(author, version, about = "Menu Cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect catalogue resources
    Catalogue {
        #[command(subcommand)]
        action: CatalogueAction,
    },
    /// Price a cart against a catalogue
    Quote {
        /// Catalogue URL or file path
        source: String,

        /// Item to add to the cart (repeat to add more units)
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,

        /// Divisor applied to the subtotal to get tax
        #[arg(long, default_value_t = menu_cart_core::SalesTax::DEFAULT_DIVISOR)]
        tax_divisor: Decimal,
    },
}

#[derive(Subcommand)]
enum CatalogueAction {
    /// Load a catalogue and list its items
    Validate {
        /// Catalogue URL or file path
        source: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalogue { action } => match action {
            CatalogueAction::Validate { source } => commands::catalogue::validate(&source).await?,
        },
        Commands::Quote {
            source,
            items,
            tax_divisor,
        } => commands::quote::quote(&source, &items, tax_divisor).await?,
    }
    Ok(())
}
