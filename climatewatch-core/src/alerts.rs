//! Rule-based early-warning alerts.
//!
//! Five independent rule families are checked in a fixed order: flood,
//! drought, heatwave, cold wave, cyclone. Each family fires at most once per
//! evaluation, at the highest severity whose threshold is met. All thresholds
//! are inclusive.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::{
    clock::{Clock, IdGenerator, SystemClock, UuidGenerator},
    model::{Alert, AlertType, Observation, ResolvedObservation, Severity, Zone},
};

/// 24h rainfall for a flood warning.
pub const FLOOD_RAINFALL_MM: f64 = 200.0;
pub const SEVERE_FLOOD_RAINFALL_MM: f64 = 400.0;
/// % below normal rainfall for a drought watch.
pub const DROUGHT_DEFICIT_PCT: f64 = 25.0;
pub const SEVERE_DROUGHT_DEFICIT_PCT: f64 = 50.0;
pub const HEATWAVE_TEMP_C: f64 = 40.0;
pub const SEVERE_HEATWAVE_TEMP_C: f64 = 45.0;
pub const COLD_WAVE_TEMP_C: f64 = 5.0;
/// Tropical storm (Beaufort 8).
pub const CYCLONE_WIND_KMH: f64 = 64.0;
/// Severe cyclonic storm.
pub const SEVERE_CYCLONE_WIND_KMH: f64 = 118.0;

/// A rule that fired, before it is stamped with an id and timestamps.
struct Finding {
    alert_type: AlertType,
    severity: Severity,
    message: String,
    valid_for: Duration,
}

impl Finding {
    fn new(alert_type: AlertType, severity: Severity, message: String) -> Self {
        Self {
            alert_type,
            severity,
            message,
            valid_for: Duration::hours(24),
        }
    }

    fn valid_for(mut self, valid_for: Duration) -> Self {
        self.valid_for = valid_for;
        self
    }
}

/// Turns a zone and its current observation into alerts.
#[derive(Debug)]
pub struct AlertEvaluator {
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl AlertEvaluator {
    /// Evaluator backed by wall-clock time and random UUIDs.
    pub fn new() -> Self {
        Self::with_sources(SystemClock, UuidGenerator)
    }

    pub fn with_sources(clock: impl Clock + 'static, ids: impl IdGenerator + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    /// Apply every rule family to `observation` and return the alerts that fired.
    ///
    /// Absent fields are defaulted once via [`Observation::resolve`]. Any finite
    /// input is accepted; there is no validation layer.
    pub fn evaluate(&self, zone: &Zone, observation: &Observation) -> Vec<Alert> {
        let obs = observation.resolve(zone);
        let issued_at = self.clock.now();

        [
            check_flood(zone, &obs),
            check_drought(zone, &obs),
            check_heatwave(zone, &obs),
            check_cold_wave(zone, &obs),
            check_cyclone(zone, &obs),
        ]
        .into_iter()
        .flatten()
        .map(|finding| {
            debug!(
                zone = %zone.zone_id,
                alert_type = %finding.alert_type,
                severity = %finding.severity,
                "alert rule fired"
            );

            Alert {
                alert_id: self.ids.next_id(),
                alert_type: finding.alert_type,
                severity: finding.severity,
                affected_zones: vec![zone.zone_id.clone()],
                message: finding.message,
                issued_at,
                valid_until: issued_at
                    .checked_add_signed(finding.valid_for)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            }
        })
        .collect()
    }
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_flood(zone: &Zone, obs: &ResolvedObservation) -> Option<Finding> {
    let rain = obs.rainfall_mm;

    if rain >= SEVERE_FLOOD_RAINFALL_MM {
        Some(Finding::new(
            AlertType::Flood,
            Severity::SevereWarning,
            format!(
                "SEVERE FLOOD WARNING for {}. Extremely heavy rainfall of {rain:.0} mm in 24 hours. \
                 Evacuate flood-prone areas immediately. Do not cross flooded waterways.",
                zone.name
            ),
        ))
    } else if rain >= FLOOD_RAINFALL_MM {
        Some(Finding::new(
            AlertType::Flood,
            Severity::Warning,
            format!(
                "FLOOD WARNING for {}. Heavy rainfall of {rain:.0} mm expected in 24 hours. \
                 Move to higher ground if in low-lying areas.",
                zone.name
            ),
        ))
    } else {
        None
    }
}

fn check_drought(zone: &Zone, obs: &ResolvedObservation) -> Option<Finding> {
    let deficit = obs.rainfall_deficit_pct;

    let finding = if deficit >= SEVERE_DROUGHT_DEFICIT_PCT {
        Finding::new(
            AlertType::Drought,
            Severity::SevereWarning,
            format!(
                "SEVERE DROUGHT WARNING for {}. Rainfall is {deficit:.0}% below normal. \
                 Initiate water conservation measures and activate drought relief protocols.",
                zone.name
            ),
        )
    } else if deficit >= DROUGHT_DEFICIT_PCT {
        Finding::new(
            AlertType::Drought,
            Severity::Watch,
            format!(
                "DROUGHT WATCH for {}. Rainfall is {deficit:.0}% below normal. \
                 Monitor reservoir levels and groundwater conditions.",
                zone.name
            ),
        )
    } else {
        return None;
    };

    Some(finding.valid_for(Duration::days(7)))
}

fn check_heatwave(zone: &Zone, obs: &ResolvedObservation) -> Option<Finding> {
    let temp = obs.temperature_c;

    if temp >= SEVERE_HEATWAVE_TEMP_C {
        Some(Finding::new(
            AlertType::Heatwave,
            Severity::SevereWarning,
            format!(
                "SEVERE HEATWAVE WARNING for {}. Temperature {temp:.1}°C. \
                 Avoid outdoor activities 11 AM - 4 PM. Stay hydrated. Heat stroke risk is EXTREME.",
                zone.name
            ),
        ))
    } else if temp >= HEATWAVE_TEMP_C {
        Some(Finding::new(
            AlertType::Heatwave,
            Severity::Warning,
            format!(
                "HEATWAVE WARNING for {}. Temperature {temp:.1}°C. \
                 Limit outdoor exposure during peak hours. Drink water regularly.",
                zone.name
            ),
        ))
    } else {
        None
    }
}

// Single tier: there is no severe cold wave.
fn check_cold_wave(zone: &Zone, obs: &ResolvedObservation) -> Option<Finding> {
    let temp = obs.temperature_c;

    (temp <= COLD_WAVE_TEMP_C).then(|| {
        Finding::new(
            AlertType::ColdWave,
            Severity::Warning,
            format!(
                "COLD WAVE WARNING for {}. Temperature {temp:.1}°C. \
                 Keep elderly and children indoors. Protect livestock.",
                zone.name
            ),
        )
    })
}

fn check_cyclone(zone: &Zone, obs: &ResolvedObservation) -> Option<Finding> {
    let wind = obs.wind_kmh;

    if wind >= SEVERE_CYCLONE_WIND_KMH {
        Some(Finding::new(
            AlertType::Cyclone,
            Severity::SevereWarning,
            format!(
                "SEVERE CYCLONE WARNING for {}. Wind speed {wind:.0} km/h. \
                 Evacuate coastal areas immediately. Do not go outdoors.",
                zone.name
            ),
        ))
    } else if wind >= CYCLONE_WIND_KMH {
        Some(Finding::new(
            AlertType::Cyclone,
            Severity::Warning,
            format!(
                "CYCLONE WATCH for {}. Wind speed {wind:.0} km/h. \
                 Secure loose objects. Monitor IMD bulletins.",
                zone.name
            ),
        ))
    } else {
        None
    }
}
