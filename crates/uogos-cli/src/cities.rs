//! The `cities` subcommand: print the distinct cities present in the
//! currently visible listings, one per line.

use clap::Args;

use uogos_client::MarketClient;
use uogos_core::{load_app_config, unique_cities};

#[derive(Debug, Args)]
pub struct CitiesArgs {
    /// Free-text search forwarded to the backend before deriving cities.
    #[arg(long)]
    pub query: Option<String>,
}

pub async fn run(args: CitiesArgs) -> anyhow::Result<()> {
    let config = load_app_config()?;
    let client = MarketClient::from_config(&config)?;

    let listings = client.list_listings(args.query.as_deref()).await?;
    let cities = unique_cities(&listings);
    tracing::info!(count = cities.len(), "cities: derived catalogue");

    if cities.is_empty() {
        println!("No cities");
        return Ok(());
    }
    for city in cities {
        println!("{city}");
    }
    Ok(())
}
