use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wikidive", about = "Hybrid Wikipedia + Fandom interest discovery")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a discovery grid from 1-5 interests
    Discover {
        /// Interest terms; pin one to a wiki with `term@https://name.fandom.com`
        #[arg(required = true, num_args = 1..=5)]
        vectors: Vec<String>,
        /// Wikipedia/Fandom ratio: 1 (surface), 2 (hybrid), 3 (deep)
        #[arg(long, default_value = "2")]
        depth: String,
        /// Correlation mode (parallel, synthesis)
        #[arg(long, default_value = "parallel")]
        mode: String,
        /// Seed for a reproducible discovery order
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a Wikipedia article summary
    Summary {
        title: String,
    },
    /// Pick a random Wikipedia article
    Random,
    /// Autocomplete Wikipedia titles
    Suggest {
        query: String,
    },
    /// Find the Fandom wiki for a topic
    Locate {
        topic: String,
    },
}
