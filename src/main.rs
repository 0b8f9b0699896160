//! Haulmatch CLI - runs the matching engine against a local snapshot.
//!
//! The engine itself lives in the library; the surrounding API that
//! would normally fetch the snapshot is replaced here by a JSON file so
//! matching runs can be exercised end-to-end from the command line.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use haulmatch::config::MatcherConfig;
use haulmatch::services::{geo, matcher};
use haulmatch::types::{Coordinates, MatchSnapshot};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,haulmatch=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Match { snapshot, max_distance_km } => {
            let mut config = MatcherConfig::from_env()?;
            if let Some(radius) = max_distance_km {
                config.max_distance_km = radius;
            }

            let raw = std::fs::read_to_string(&snapshot)
                .with_context(|| format!("failed to read snapshot file '{}'", snapshot))?;
            let snapshot: MatchSnapshot = serde_json::from_str(&raw)
                .context("snapshot file is not a valid match snapshot")?;

            info!(
                "Matching load {} against {} candidate routes",
                snapshot.load.id,
                snapshot.candidates.len()
            );

            let (matches, stats) =
                matcher::match_load_with_stats(&snapshot.load, &snapshot.candidates, &config)?;

            info!(
                "{} of {} candidates matched",
                stats.matched, stats.candidates_considered
            );
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        cli::Command::CheckDistance { from, to } => {
            let from = parse_coordinates(&from)?;
            let to = parse_coordinates(&to)?;
            println!("{:.2} km", geo::haversine_distance(&from, &to));
        }
    }

    Ok(())
}

fn parse_coordinates(raw: &str) -> Result<Coordinates> {
    let (lat, lng) = raw
        .split_once(',')
        .with_context(|| format!("expected 'lat,lng', got '{}'", raw))?;
    Ok(Coordinates {
        lat: lat.trim().parse().context("latitude is not a number")?,
        lng: lng.trim().parse().context("longitude is not a number")?,
    })
}
