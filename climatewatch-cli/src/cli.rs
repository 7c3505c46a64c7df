use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use climatewatch_core::{AlertEvaluator, Config, ReportComposer, Zone, ZoneCatalog};
use inquire::Select;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::{input, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "climatewatch",
    version,
    about = "Climate monitoring and early warning for India"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the climate zones.
    Zones {
        /// Only zones that include this state (case-insensitive).
        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Generate weather alerts for a zone.
    Alerts {
        /// Zone id, e.g. "central-india". Defaults to the configured zone.
        #[arg(long)]
        zone: Option<String>,

        /// JSON file with current observations; sample conditions if absent.
        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Generate a full climate report for a zone.
    Report {
        #[arg(long)]
        zone: Option<String>,

        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Summarise historical observations for a zone.
    Trend {
        #[arg(long)]
        zone: Option<String>,

        /// JSON file holding an array of observations.
        #[arg(long)]
        data: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Set the default zone (interactive if omitted).
    Configure { zone: Option<String> },

    /// Start the ClimateWatch API server (not yet implemented).
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,

        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let catalog = ZoneCatalog::new();
        let mut config = Config::load()?;

        let body = match self.command {
            Command::Zones { state, json } => {
                let zones: Vec<&Zone> = match &state {
                    Some(state) => catalog.zones_for_state(state),
                    None => catalog.all_zones().iter().collect(),
                };

                if json {
                    return print_json(&zones);
                }

                render::zone_listing(state.as_deref(), &zones)?
            }
            Command::Alerts { zone, data, json } => {
                let zone = resolve_zone(&catalog, &config, zone.as_deref())?;
                let observation = match &data {
                    Some(path) => input::read_observation(path)?,
                    None => input::sample_alert_conditions(zone),
                };

                debug!(zone = %zone.zone_id, ?observation, "evaluating alerts");
                let alerts = AlertEvaluator::new().evaluate(zone, &observation);

                if json {
                    return print_json(&alerts);
                }
                render::alerts(zone, &alerts)?
            }
            Command::Report { zone, data, json } => {
                let zone = resolve_zone(&catalog, &config, zone.as_deref())?;
                let observation = match &data {
                    Some(path) => input::read_observation(path)?,
                    None => input::sample_report_conditions(zone),
                };

                let report = ReportComposer::new().generate_report(zone, &observation);

                if json {
                    return print_json(&report);
                }
                render::report(&report)?
            }
            Command::Trend { zone, data, json } => {
                let zone = resolve_zone(&catalog, &config, zone.as_deref())?;
                let history = input::read_history(&data)?;

                let summary = ReportComposer::new().trend_analysis(zone, &history)?;

                if json {
                    return print_json(&summary);
                }
                render::trend(&summary)?
            }
            Command::Configure { zone } => {
                let zone_id = match zone {
                    Some(id) => id,
                    None => {
                        let options: Vec<String> =
                            catalog.zone_ids().into_iter().map(str::to_string).collect();
                        Select::new("Default zone:", options)
                            .prompt()
                            .context("Zone selection was cancelled")?
                    }
                };

                config.set_default_zone(&catalog, &zone_id)?;
                config.save()?;

                info!(zone = %zone_id, "default zone saved");
                println!(
                    "Default zone set to '{zone_id}' in {}",
                    Config::config_file_path()?.display()
                );
                return Ok(());
            }
            Command::Serve { port, host } => {
                bail!(
                    "The ClimateWatch API server is not yet available (requested {host}:{port}). \
                     The api module has not been implemented."
                );
            }
        };

        print!("{}", render::with_disclaimer(body, config.show_disclaimer));
        Ok(())
    }
}

fn resolve_zone<'a>(
    catalog: &'a ZoneCatalog,
    config: &Config,
    explicit: Option<&str>,
) -> Result<&'a Zone> {
    let zone_id = config.zone_id_or_default(explicit)?;
    Ok(catalog.require_zone(zone_id)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_alerts_with_zone_and_data() {
        let cli = Cli::try_parse_from([
            "climatewatch",
            "alerts",
            "--zone",
            "central-india",
            "--data",
            "obs.json",
        ])
        .expect("valid args");

        match cli.command {
            Command::Alerts { zone, data, json } => {
                assert_eq!(zone.as_deref(), Some("central-india"));
                assert_eq!(data, Some(PathBuf::from("obs.json")));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn trend_requires_data() {
        assert!(Cli::try_parse_from(["climatewatch", "trend", "--zone", "central-india"]).is_err());
    }

    #[test]
    fn serve_has_default_bind_address() {
        let cli = Cli::try_parse_from(["climatewatch", "serve"]).expect("valid args");
        match &cli.command {
            Command::Serve { port, host } => {
                assert_eq!(*port, 8000);
                assert_eq!(host, "127.0.0.1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn resolve_zone_prefers_explicit_then_default() {
        let catalog = ZoneCatalog::new();
        let mut config = Config::default();

        let err = resolve_zone(&catalog, &config, None).unwrap_err();
        assert!(err.to_string().contains("No default zone configured"));

        config.set_default_zone(&catalog, "eastern-india").expect("known zone");
        assert_eq!(resolve_zone(&catalog, &config, None).unwrap().zone_id, "eastern-india");
        assert_eq!(
            resolve_zone(&catalog, &config, Some("western-india")).unwrap().zone_id,
            "western-india"
        );

        let err = resolve_zone(&catalog, &config, Some("atlantis")).unwrap_err();
        assert!(err.to_string().contains("Available zones: northwest-india"));
    }
}
