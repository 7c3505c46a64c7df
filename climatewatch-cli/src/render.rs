//! Human-readable output.

use climatewatch_core::{Alert, ClimateReport, ENVIRONMENTAL_DISCLAIMER, TrendSummary, Zone};
use std::fmt::{self, Write};

use crate::input::present_fields;

const RULE_WIDTH: usize = 60;
const REPORT_MESSAGE_CHARS: usize = 100;

pub fn zone_table(heading: &str, zones: &[&Zone]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\n{heading}")?;
    writeln!(
        out,
        "{:<22} {:<22} {:>14} {:>12}",
        "Zone ID", "Name", "Avg Rain (mm)", "Avg Temp (C)"
    )?;
    writeln!(out, "{}", "-".repeat(75))?;
    for zone in zones {
        writeln!(
            out,
            "{:<22} {:<22} {:>14.0} {:>12.1}",
            zone.zone_id, zone.name, zone.avg_rainfall_mm, zone.avg_temp_c
        )?;
    }
    Ok(out)
}

pub fn alerts(zone: &Zone, alerts: &[Alert]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\nWEATHER ALERTS: {}", zone.name)?;
    writeln!(out, "States: {}", zone.states.join(", "))?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    if alerts.is_empty() {
        writeln!(out, "No active alerts. Conditions are within normal range.")?;
    }
    for alert in alerts {
        writeln!(out, "\nALERT TYPE: {}", alert.alert_type.as_str().to_uppercase())?;
        writeln!(out, "SEVERITY:   {}", alert.severity.as_str().to_uppercase())?;
        writeln!(out, "MESSAGE:    {}", alert.message)?;
        writeln!(
            out,
            "VALID UNTIL: {}",
            alert.valid_until.format("%Y-%m-%d %H:%M UTC")
        )?;
    }
    Ok(out)
}

pub fn report(report: &ClimateReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\nCLIMATE REPORT: {}", report.zone.name)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    writeln!(out, "\nCURRENT CONDITIONS:")?;
    for (name, value) in present_fields(&report.current_conditions) {
        writeln!(out, "  {name}: {value}")?;
    }

    writeln!(out, "\nACTIVE ALERTS: {}", report.alerts.len())?;
    for alert in &report.alerts {
        let short: String = alert.message.chars().take(REPORT_MESSAGE_CHARS).collect();
        writeln!(
            out,
            "  [{}] {}: {short}...",
            alert.severity.as_str().to_uppercase(),
            alert.alert_type
        )?;
    }

    let next = &report.forecast.next_24h;
    let outlook = &report.forecast.next_7_days;
    writeln!(out, "\nFORECAST:")?;
    writeln!(out, "  next_24h:")?;
    writeln!(out, "    temperature_c: {}", next.temperature_c)?;
    writeln!(out, "    expected_rainfall_mm: {:.1}", next.expected_rainfall_mm)?;
    writeln!(out, "    humidity_pct: {}", next.humidity_pct)?;
    writeln!(out, "    advisory: {}", next.advisory)?;
    writeln!(out, "  next_7_days:")?;
    writeln!(out, "    trend: {}", outlook.trend)?;
    writeln!(out, "    temperature_trend: {}", outlook.temperature_trend)?;
    Ok(out)
}

pub fn trend(summary: &TrendSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\nTREND ANALYSIS: {}", summary.zone_name)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Observations: {}", summary.observations)?;

    match &summary.temperature {
        Some(t) => {
            writeln!(out, "\nTEMPERATURE:")?;
            writeln!(out, "  mean: {:.2} C", t.mean_c)?;
            writeln!(out, "  min:  {:.2} C", t.min_c)?;
            writeln!(out, "  max:  {:.2} C", t.max_c)?;
            writeln!(out, "  anomaly vs normal: {:+.2} C", t.anomaly_vs_normal_c)?;
        }
        None => {
            writeln!(out, "\nTEMPERATURE: no readings")?;
        }
    }

    match &summary.rainfall {
        Some(r) => {
            writeln!(out, "\nRAINFALL:")?;
            writeln!(out, "  total: {:.2} mm", r.total_mm)?;
            writeln!(out, "  mean daily: {:.2} mm", r.mean_daily_mm)?;
            writeln!(out, "  deficit vs normal: {:.2}%", r.deficit_vs_normal_pct)?;
        }
        None => {
            writeln!(out, "\nRAINFALL: no readings")?;
        }
    }
    Ok(out)
}

/// Zone listing for `zones`, optionally filtered by state.
pub fn zone_listing(state: Option<&str>, zones: &[&Zone]) -> Result<String, fmt::Error> {
    match state {
        Some(state) if zones.is_empty() => Ok(format!("No zones include state '{state}'.\n")),
        Some(state) => zone_table(&format!("ZONES FOR {}:", state.to_uppercase()), zones),
        None => zone_table("INDIA CLIMATE ZONES:", zones),
    }
}

/// Append the environmental disclaimer when enabled.
pub fn with_disclaimer(mut body: String, show_disclaimer: bool) -> String {
    if show_disclaimer {
        body.push_str(&format!("\nDISCLAIMER: {ENVIRONMENTAL_DISCLAIMER}\n\n"));
    }
    body
}
