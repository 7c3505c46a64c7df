use thiserror::Error;

/// Errors surfaced by the climate core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClimateError {
    /// `trend_analysis` was handed an empty history.
    #[error("No historical data provided.")]
    NoHistoricalData,

    #[error("Zone '{zone_id}' not found. Available zones: {}", available.join(", "))]
    UnknownZone {
        zone_id: String,
        available: Vec<String>,
    },

    #[error(
        "Unknown alert type '{0}'. Supported types: flood, drought, heatwave, cold_wave, cyclone, thunderstorm."
    )]
    UnknownAlertType(String),

    #[error("Unknown severity '{0}'. Supported severities: watch, warning, severe_warning.")]
    UnknownSeverity(String),
}
