//! Storefront Pricing Binary
//!
//! Quotes each price given on the command line and totals them as one cart.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p storefront-pricing -- '$29.99' 15.99 '$7.99'
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_PRICING_CONFIG`: Config file path (default: storefront-pricing.yaml if present)
//! - `RUST_LOG`: Log level (overrides `observability.logging.level`)

use anyhow::Context;
use storefront_pricing::config::{CONFIG_PATH_ENV, load_config};
use storefront_pricing::report::PricingReport;
use storefront_pricing::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = load_config(config_path.as_deref()).context("failed to load configuration")?;
    init_tracing(&config.observability.logging).context("failed to initialize logging")?;

    let prices: Vec<String> = std::env::args().skip(1).collect();
    tracing::info!(items = prices.len(), "Pricing cart");

    let report = PricingReport::build(&prices).context("price extraction or parsing failed")?;

    if config.output.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

/// Load `.env` from the working directory or its nearest ancestor, if any.
fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {e}");
        }
    }
}
