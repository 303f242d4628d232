//! Terminal rendering and export file output

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use application::{CsvExport, LocationOverview};
use domain::{DayBucket, Location, Metric, ReferenceZone, Units};
use tracing::info;

const MISSING: &str = "-";

fn reading(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.1}{unit}"))
}

/// Search results, one location per line
pub fn locations(term: &str, results: &[Location]) -> String {
    if results.is_empty() {
        return format!("No results for \"{term}\"");
    }

    let mut out = format!("Found {} location(s) for \"{term}\":", results.len());
    for location in results {
        let _ = write!(
            out,
            "\n  {location}  (--lat {} --lng {} --name \"{}\" --country {})",
            location.lat, location.lng, location.name, location.country
        );
    }
    out
}

fn day_block(out: &mut String, day: &DayBucket, zone: ReferenceZone, units: Units) {
    let degrees = units.temperature_suffix();
    let speed = units.speed_suffix();
    let _ = write!(
        out,
        "\n\n{}  avg {} (feels {}), humidity {}, wind {}",
        day.date_text(),
        reading(day.average_temperature(), degrees),
        reading(day.average_feels_like(), degrees),
        reading(day.average_humidity(), "%"),
        reading(day.average_wind_speed(), speed),
    );

    for forecast in &day.forecasts {
        let _ = write!(
            out,
            "\n  {}  {:>8}  feels {:>8}  {:>6}  {:>9}  {}",
            zone.hour_minute(&forecast.timestamp),
            reading(forecast.metric(Metric::Temp), degrees),
            reading(forecast.metric(Metric::FeelsLike), degrees),
            reading(forecast.metric(Metric::Humidity), "%"),
            reading(forecast.metric(Metric::WindSpeed), speed),
            forecast.condition_text().unwrap_or_default(),
        );
    }
}

/// Current conditions followed by the daily forecast, labelled in `units`
pub fn overview(overview: &LocationOverview, zone: ReferenceZone, units: Units) -> String {
    let mut out = overview.location.to_string();

    match &overview.current {
        Some(current) => {
            let _ = write!(out, "\nNow: {}", current.summary(units));
        },
        None => out.push_str("\nCurrent conditions unavailable"),
    }

    if overview.days.is_empty() {
        out.push_str("\n\nNo forecast available");
    } else {
        let _ = write!(out, "\n\nForecast ({zone})");
        for day in &overview.days {
            day_block(&mut out, day, zone, units);
        }
    }

    out
}

/// Write an export into `dir` under its suggested filename
///
/// The filename must be a plain file name; anything that would resolve
/// outside `dir` is refused.
pub fn write_export(dir: &Path, export: &CsvExport) -> anyhow::Result<PathBuf> {
    let is_plain_name = Path::new(&export.filename)
        .file_name()
        .is_some_and(|name| name == export.filename.as_str());
    if !is_plain_name {
        bail!("Refusing to write export to {:?}", export.filename);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(&export.filename);
    fs::write(&path, &export.content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = export.content.len(), "Export written");
    Ok(path)
}
