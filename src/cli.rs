//! CLI argument parsing for the haulmatch binary.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "haulmatch", about = "Route-load matching engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a load against a snapshot of trucks with planned routes
    Match {
        /// Path to a JSON match snapshot ({ load, candidates })
        #[arg(long)]
        snapshot: String,
        /// Override the anchor search radius in kilometers
        #[arg(long)]
        max_distance_km: Option<f64>,
    },
    /// Print the great-circle distance between two coordinates
    CheckDistance {
        /// Origin as "lat,lng"
        #[arg(long)]
        from: String,
        /// Destination as "lat,lng"
        #[arg(long)]
        to: String,
    },
}
