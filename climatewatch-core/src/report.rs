//! Climate reports and historical trend statistics.

use tracing::debug;

use crate::{
    alerts::AlertEvaluator,
    error::ClimateError,
    model::{
        ClimateReport, Forecast, MediumRangeOutlook, Observation, RainfallStats, RainfallTrend,
        ResolvedObservation, ShortRangeForecast, TemperatureStats, TemperatureTrend, TrendSummary,
        Zone,
    },
};

const NEXT_24H_ADVISORY: &str =
    "Conditions similar to today expected. Monitor IMD forecasts at mausam.imd.gov.in.";

/// Share of today's rainfall expected over the next 24 hours.
const RAINFALL_CARRYOVER: f64 = 0.8;
/// Degrees either side of the zone normal still counted as "near normal".
const TEMPERATURE_BAND_C: f64 = 3.0;

#[derive(Debug, Default)]
pub struct ReportComposer {
    evaluator: AlertEvaluator,
}

impl ReportComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evaluator(evaluator: AlertEvaluator) -> Self {
        Self { evaluator }
    }

    /// Build a report from the current observation: active alerts plus a
    /// short-range forecast derived from the zone's normals.
    pub fn generate_report(&self, zone: &Zone, observation: &Observation) -> ClimateReport {
        let alerts = self.evaluator.evaluate(zone, observation);
        let forecast = forecast(zone, &observation.resolve(zone));

        debug!(
            zone = %zone.zone_id,
            alerts = alerts.len(),
            rainfall_trend = %forecast.next_7_days.trend,
            temperature_trend = %forecast.next_7_days.temperature_trend,
            "climate report generated"
        );

        ClimateReport {
            zone: zone.clone(),
            current_conditions: observation.clone(),
            alerts,
            forecast,
        }
    }

    /// Summarise a run of historical observations for `zone`.
    ///
    /// Temperature and rainfall blocks are computed independently, each only
    /// from entries that carry the field. An empty history is an error so it
    /// cannot be mistaken for all-zero data.
    pub fn trend_analysis(
        &self,
        zone: &Zone,
        historical: &[Observation],
    ) -> Result<TrendSummary, ClimateError> {
        if historical.is_empty() {
            return Err(ClimateError::NoHistoricalData);
        }

        let temps: Vec<f64> = historical.iter().filter_map(|o| o.temperature_c).collect();
        let rains: Vec<f64> = historical.iter().filter_map(|o| o.rainfall_mm).collect();

        debug!(
            zone = %zone.zone_id,
            observations = historical.len(),
            temperature_samples = temps.len(),
            rainfall_samples = rains.len(),
            "trend analysis"
        );

        Ok(TrendSummary {
            zone_id: zone.zone_id.clone(),
            zone_name: zone.name.clone(),
            observations: historical.len(),
            temperature: temperature_stats(zone, &temps),
            rainfall: rainfall_stats(zone, &rains),
        })
    }
}

fn forecast(zone: &Zone, obs: &ResolvedObservation) -> Forecast {
    Forecast {
        next_24h: ShortRangeForecast {
            temperature_c: obs.temperature_c,
            expected_rainfall_mm: obs.rainfall_mm * RAINFALL_CARRYOVER,
            humidity_pct: obs.humidity_pct,
            advisory: NEXT_24H_ADVISORY.to_string(),
        },
        next_7_days: MediumRangeOutlook {
            trend: rainfall_trend(zone, obs.rainfall_mm),
            temperature_trend: temperature_trend(zone, obs.temperature_c),
        },
    }
}

// Upper and lower bounds use different divisors (/30, /60); both are exclusive.
fn rainfall_trend(zone: &Zone, rainfall_mm: f64) -> RainfallTrend {
    if rainfall_mm > zone.avg_rainfall_mm / 30.0 {
        RainfallTrend::WetterThanNormal
    } else if rainfall_mm < zone.avg_rainfall_mm / 60.0 {
        RainfallTrend::DrierThanNormal
    } else {
        RainfallTrend::NearNormal
    }
}

fn temperature_trend(zone: &Zone, temperature_c: f64) -> TemperatureTrend {
    if temperature_c > zone.avg_temp_c + TEMPERATURE_BAND_C {
        TemperatureTrend::AboveNormal
    } else if temperature_c < zone.avg_temp_c - TEMPERATURE_BAND_C {
        TemperatureTrend::BelowNormal
    } else {
        TemperatureTrend::NearNormal
    }
}

fn temperature_stats(zone: &Zone, temps: &[f64]) -> Option<TemperatureStats> {
    if temps.is_empty() {
        return None;
    }

    let mean = temps.iter().sum::<f64>() / temps.len() as f64;
    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(TemperatureStats {
        mean_c: round2(mean),
        min_c: round2(min),
        max_c: round2(max),
        anomaly_vs_normal_c: round2(mean - zone.avg_temp_c),
    })
}

fn rainfall_stats(zone: &Zone, rains: &[f64]) -> Option<RainfallStats> {
    if rains.is_empty() {
        return None;
    }

    let total: f64 = rains.iter().sum();
    // Annual normal pro-rated to one day per rainfall entry.
    let expected = zone.avg_rainfall_mm * rains.len() as f64 / 365.0;
    let deficit = if expected > 0.0 {
        (1.0 - total / expected) * 100.0
    } else {
        0.0
    };

    Some(RainfallStats {
        total_mm: round2(total),
        mean_daily_mm: round2(total / rains.len() as f64),
        deficit_vs_normal_pct: round2(deficit),
    })
}

// Two decimals, ties to even. Values too large to scale by 100 carry no
// fractional part and are returned as-is.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / 100.0
}
