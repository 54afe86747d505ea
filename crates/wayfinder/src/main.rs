//! Wayfinder - Entry Point
//!
//! CLI over the directions and geocoding services.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `route` | Resolve directions between two coordinates |
//! | `geocode` | Resolve a free-text query to a coordinate |
//! | `reverse` | Resolve a coordinate to an address |
//! | `init` | Write a starter configuration file |

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};

use wayfinder::config::loader::DEFAULT_CONFIG_FILENAME;
use wayfinder::config::{AppConfig, ConfigLoader};
use wayfinder::logging::init_logging;
use wayfinder::wiring::build_services;
use wayfinder_application::coords::parse_coordinates;
use wayfinder_domain::format::{format_distance, format_duration};
use wayfinder_domain::{RoutePoint, RouteResult, TravelProfile};

/// Command line interface for Wayfinder
#[derive(Parser, Debug)]
#[command(name = "wayfinder")]
#[command(about = "Wayfinder - Multi-provider directions resolution")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve directions between two coordinates
    Route {
        /// Start coordinate as "lat,lng"
        #[arg(long)]
        from: String,

        /// End coordinate as "lat,lng"
        #[arg(long)]
        to: String,

        /// Travel profile
        #[arg(long, default_value = "driving")]
        profile: TravelProfile,

        /// Emit the raw route as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a free-text query to a coordinate
    Geocode {
        /// Address or place name to look up
        query: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a coordinate to an address
    Reverse {
        /// Coordinate as "lat,lng"
        point: String,
    },

    /// Write a starter configuration file to the working directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn coordinate_arg(text: &str, flag: &str) -> anyhow::Result<RoutePoint> {
    match parse_coordinates(text) {
        Some(point) => Ok(point),
        None => bail!("{flag} must be a \"lat,lng\" pair, got \"{text}\""),
    }
}

fn print_route(route: &RouteResult) {
    println!("Route via {}", route.provider);
    println!("Distance: {}", format_distance(route.distance_meters));
    println!("Duration: {}", format_duration(route.duration_seconds));
    println!();
    for (index, instruction) in route.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, instruction);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `init` must work before any config exists
    if let Command::Init { force } = cli.command {
        let path = cli
            .config
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
        if path.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        ConfigLoader::new().save_to_file(&AppConfig::default(), &path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    let services = build_services(&config)?;

    match cli.command {
        Command::Route {
            from,
            to,
            profile,
            json,
        } => {
            let start = coordinate_arg(&from, "--from")?;
            let end = coordinate_arg(&to, "--to")?;

            let route = services.directions.get_directions(start, end, profile).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else {
                print_route(&route);
            }
        }

        Command::Geocode { query, json } => match services.geocoding.geocode(&query).await {
            Some(location) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&location)?);
                } else {
                    println!("{}", location.address);
                    println!("{}, {}", location.point.lat, location.point.lng);
                }
            }
            None => bail!("No results for \"{query}\""),
        },

        Command::Reverse { point } => {
            let point = coordinate_arg(&point, "POINT")?;
            println!("{}", services.geocoding.reverse(point).await);
        }

        Command::Init { .. } => unreachable!("handled above"),
    }

    Ok(())
}
