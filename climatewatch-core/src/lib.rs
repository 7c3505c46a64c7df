//! Core library for the `climatewatch` CLI.
//!
//! This crate defines:
//! - The catalog of India's climate zones and their normals
//! - Threshold rules that turn observations into early-warning alerts
//! - Climate reports and historical trend statistics
//! - Configuration handling
//!
//! Everything here is synchronous and free of I/O apart from the config file.
//! It is used by `climatewatch-cli`, but can also be reused by other binaries or services.

pub mod alerts;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod zones;

pub use alerts::AlertEvaluator;
pub use clock::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use config::Config;
pub use error::ClimateError;
pub use model::{
    Alert, AlertType, ClimateReport, ENVIRONMENTAL_DISCLAIMER, Forecast, Observation, Severity,
    TrendSummary, Zone,
};
pub use report::ReportComposer;
pub use zones::ZoneCatalog;
