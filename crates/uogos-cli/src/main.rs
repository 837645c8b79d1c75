use clap::{Parser, Subcommand};

mod browse;
mod cities;

#[derive(Debug, Parser)]
#[command(name = "uogos-cli")]
#[command(about = "Berry marketplace listing browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch listings and browse them with filters and sorting.
    Browse(browse::BrowseArgs),
    /// Print the city catalogue derived from the current listings.
    Cities(cities::CitiesArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse(args) => browse::run(args).await,
        Commands::Cities(args) => cities::run(args).await,
    }
}
