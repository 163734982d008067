use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wikidive::cli::commands::{Cli, Commands};
use wikidive::config::DiscoveryConfig;
use wikidive::domain::entities::interest_vector::InterestVector;
use wikidive::domain::ports::shuffler::Shuffler;
use wikidive::domain::values::correlation_mode::CorrelationMode;
use wikidive::domain::values::depth::Depth;
use wikidive::infrastructure::shuffle::{RandomShuffler, SeededShuffler};
use wikidive::WikiDive;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wikidive=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let config = DiscoveryConfig::from_env()?;

    match cmd {
        Commands::Discover {
            vectors,
            depth,
            mode,
            seed,
        } => {
            let depth: Depth = depth.parse()?;
            let mode: CorrelationMode = mode.parse()?;
            let vectors = vectors
                .iter()
                .map(|v| v.parse::<InterestVector>())
                .collect::<Result<Vec<_>, _>>()?;
            let shuffler: Arc<dyn Shuffler> = match seed {
                Some(seed) => Arc::new(SeededShuffler::new(seed)),
                None => Arc::new(RandomShuffler),
            };

            let wd = WikiDive::from_config(&config, shuffler)?;
            let items = wd.discover(&vectors, depth, mode).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Summary { title } => {
            let wd = WikiDive::from_config(&config, Arc::new(RandomShuffler))?;
            match wd.summary(&title).await? {
                Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
                None => return Err(format!("No article found for '{title}'").into()),
            }
        }
        Commands::Random => {
            let wd = WikiDive::from_config(&config, Arc::new(RandomShuffler))?;
            let summary = wd
                .random_article()
                .await
                .ok_or("Could not fetch a random article")?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Suggest { query } => {
            let wd = WikiDive::from_config(&config, Arc::new(RandomShuffler))?;
            let suggestions = wd.suggest(&query).await;
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        Commands::Locate { topic } => {
            let wd = WikiDive::from_config(&config, Arc::new(RandomShuffler))?;
            let wiki = wd.locate_wiki(&topic).await?;
            println!("{}", serde_json::to_string_pretty(&wiki)?);
        }
    }
    Ok(())
}
