//! Application services - Use case implementations

mod csv_exporter;
mod forecast_aggregator;
mod weather_service;

pub use csv_exporter::{ColumnKey, CsvExport, CsvExporter, ExportRow};
pub use forecast_aggregator::ForecastAggregator;
pub use weather_service::{LocationOverview, WeatherService};
