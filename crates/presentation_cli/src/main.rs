//! skycast CLI
//!
//! Search places, show current conditions with the daily forecast, and export
//! the forecast as CSV straight from the terminal.

#![allow(clippy::print_stdout)]

mod render;

use std::{path::PathBuf, sync::Arc};

use application::{WeatherPort, WeatherService};
use clap::{Parser, Subcommand};
use domain::Location;
use infrastructure::{AppConfig, WeatherAdapter, init_tracing};
use tracing::debug;

/// skycast CLI
#[derive(Parser)]
#[command(name = "skycast-cli")]
#[command(author, version, about = "Weather search, forecast and CSV export", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true, env = "SKYCAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Coordinates and label of a location
#[derive(clap::Args)]
struct LocationArgs {
    /// Latitude (-90 to 90)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude (-180 to 180)
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Display name, also used for the export filename
    #[arg(long)]
    name: String,

    /// Country code
    #[arg(long, default_value = "")]
    country: String,
}

impl LocationArgs {
    fn into_location(self) -> Location {
        Location::new(self.lat, self.lng, self.name, self.country)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search locations by place name
    Search {
        /// Place name
        term: String,
    },

    /// Show current conditions and the daily forecast
    Show {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Export the forecast as CSV
    ///
    /// Example: skycast-cli export --lat 51.5073 --lng -0.1276 --name London
    Export {
        #[command(flatten)]
        location: LocationArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Set up logging based on verbosity
    init_tracing(log_filter_from_verbosity(cli.verbose), config.server.log_format)?;
    debug!(config = ?cli.config, "Starting CLI");

    let adapter = WeatherAdapter::new(config.weather.clone())?;
    let weather: Arc<dyn WeatherPort> = Arc::new(adapter);
    let zone = config.forecast.timezone;
    let service = WeatherService::new(weather, zone);

    match cli.command {
        Commands::Search { term } => {
            let results = service.search(&term).await;
            println!("{}", render::locations(&term, &results));
        },

        Commands::Show { location } => {
            let overview = service.overview(&location.into_location()).await?;
            println!("{}", render::overview(&overview, zone, config.weather.units));
        },

        Commands::Export { location, output } => {
            let export = service.export(&location.into_location()).await?;
            let path = render::write_export(&output, &export)?;
            println!("Exported forecast to {}", path.display());
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_longitude_parses() {
        let cli = Cli::try_parse_from([
            "skycast-cli",
            "show",
            "--lat",
            "51.5",
            "--lng",
            "-0.12",
            "--name",
            "London",
        ])
        .unwrap();

        let Commands::Show { location } = cli.command else {
            unreachable!("expected show");
        };
        let location = location.into_location();
        assert!((location.lng + 0.12).abs() < f64::EPSILON);
        assert_eq!(location.country, "");
    }
}
