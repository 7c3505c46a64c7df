use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::error::ClimateError;

pub const ENVIRONMENTAL_DISCLAIMER: &str = "Climate and weather data provided by this tool are estimates based on \
     historical averages and modelled projections. Do not use this tool as the sole basis for emergency \
     response decisions. Always verify alerts with official meteorological authorities such as IMD \
     (India Meteorological Department) before taking action.";

/// One of India's major climate zones, with its long-run climate normals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: String,
    pub name: String,
    /// Member states, in registration order.
    pub states: Vec<String>,
    /// Average annual rainfall in mm.
    pub avg_rainfall_mm: f64,
    /// Average annual temperature in °C.
    pub avg_temp_c: f64,
}

impl Zone {
    /// Case-insensitive exact match against the member states.
    pub fn contains_state(&self, state: &str) -> bool {
        let wanted = state.to_lowercase();
        self.states.iter().any(|s| s.to_lowercase() == wanted)
    }
}

/// Weather observation as supplied by the caller. Every field is optional.
///
/// Absent fields are skipped on serialization so a report echoes exactly what
/// the caller sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,
    /// Rainfall accumulated over the last 24 hours, mm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity_pct: Option<f64>,
    /// Sustained wind speed, km/h.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_kmh: Option<f64>,
    /// Percentage below normal rainfall (positive means drier).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall_deficit_pct: Option<f64>,
}

impl Observation {
    /// Fill in defaults: temperature falls back to the zone normal, everything else to 0.0.
    pub fn resolve(&self, zone: &Zone) -> ResolvedObservation {
        ResolvedObservation {
            temperature_c: self.temperature_c.unwrap_or(zone.avg_temp_c),
            rainfall_mm: self.rainfall_mm.unwrap_or(0.0),
            humidity_pct: self.humidity_pct.unwrap_or(0.0),
            wind_kmh: self.wind_kmh.unwrap_or(0.0),
            rainfall_deficit_pct: self.rainfall_deficit_pct.unwrap_or(0.0),
        }
    }
}

/// An [`Observation`] with every default substituted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedObservation {
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub humidity_pct: f64,
    pub wind_kmh: f64,
    pub rainfall_deficit_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Flood,
    Drought,
    Heatwave,
    ColdWave,
    Cyclone,
    /// Reserved; no rule emits it yet.
    Thunderstorm,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Flood => "flood",
            AlertType::Drought => "drought",
            AlertType::Heatwave => "heatwave",
            AlertType::ColdWave => "cold_wave",
            AlertType::Cyclone => "cyclone",
            AlertType::Thunderstorm => "thunderstorm",
        }
    }

    pub const fn all() -> &'static [AlertType] {
        &[
            AlertType::Flood,
            AlertType::Drought,
            AlertType::Heatwave,
            AlertType::ColdWave,
            AlertType::Cyclone,
            AlertType::Thunderstorm,
        ]
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AlertType {
    type Error = ClimateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        AlertType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ClimateError::UnknownAlertType(value.to_string()))
    }
}

/// Alert urgency, ordered `Watch < Warning < SevereWarning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Watch,
    Warning,
    SevereWarning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Watch => "watch",
            Severity::Warning => "warning",
            Severity::SevereWarning => "severe_warning",
        }
    }

    pub const fn all() -> &'static [Severity] {
        &[Severity::Watch, Severity::Warning, Severity::SevereWarning]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Severity {
    type Error = ClimateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "watch" => Ok(Severity::Watch),
            "warning" => Ok(Severity::Warning),
            "severe_warning" => Ok(Severity::SevereWarning),
            _ => Err(ClimateError::UnknownSeverity(value.to_string())),
        }
    }
}

/// An early-warning alert for an extreme weather or climate event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_id: String,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub affected_zones: Vec<String>,
    pub message: String,
    pub issued_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}

/// Climate report for a zone at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateReport {
    pub zone: Zone,
    pub current_conditions: Observation,
    pub alerts: Vec<Alert>,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub next_24h: ShortRangeForecast,
    pub next_7_days: MediumRangeOutlook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortRangeForecast {
    pub temperature_c: f64,
    pub expected_rainfall_mm: f64,
    pub humidity_pct: f64,
    pub advisory: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediumRangeOutlook {
    pub trend: RainfallTrend,
    pub temperature_trend: TemperatureTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainfallTrend {
    #[serde(rename = "wetter than normal")]
    WetterThanNormal,
    #[serde(rename = "near normal")]
    NearNormal,
    #[serde(rename = "drier than normal")]
    DrierThanNormal,
}

impl RainfallTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            RainfallTrend::WetterThanNormal => "wetter than normal",
            RainfallTrend::NearNormal => "near normal",
            RainfallTrend::DrierThanNormal => "drier than normal",
        }
    }
}

impl fmt::Display for RainfallTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureTrend {
    #[serde(rename = "above normal")]
    AboveNormal,
    #[serde(rename = "near normal")]
    NearNormal,
    #[serde(rename = "below normal")]
    BelowNormal,
}

impl TemperatureTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureTrend::AboveNormal => "above normal",
            TemperatureTrend::NearNormal => "near normal",
            TemperatureTrend::BelowNormal => "below normal",
        }
    }
}

impl fmt::Display for TemperatureTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive statistics over a run of historical observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub zone_id: String,
    pub zone_name: String,
    pub observations: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<RainfallStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub mean_c: f64,
    pub min_c: f64,
    pub max_c: f64,
    pub anomaly_vs_normal_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainfallStats {
    pub total_mm: f64,
    pub mean_daily_mm: f64,
    pub deficit_vs_normal_pct: f64,
}
