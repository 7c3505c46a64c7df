use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::zones::ZoneCatalog;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_zone = "central-india"
/// show_disclaimer = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Zone used when a command is run without `--zone`.
    pub default_zone: Option<String>,

    #[serde(default = "default_show_disclaimer")]
    pub show_disclaimer: bool,
}

fn default_show_disclaimer() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_zone: None,
            show_disclaimer: default_show_disclaimer(),
        }
    }
}

impl Config {
    /// The configured default zone id.
    pub fn default_zone_id(&self) -> Result<&str> {
        self.default_zone.as_deref().ok_or_else(|| {
            anyhow!(
                "No default zone configured.\n\
                 Hint: pass --zone <ID> or run `climatewatch configure <zone>` \
                 (e.g. `climatewatch configure central-india`) first."
            )
        })
    }

    /// Pick the explicit zone if given, else the configured default.
    pub fn zone_id_or_default<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        match explicit {
            Some(id) => Ok(id),
            None => self.default_zone_id(),
        }
    }

    /// Store `zone_id` as the default, rejecting ids the catalog doesn't know.
    pub fn set_default_zone(&mut self, catalog: &ZoneCatalog, zone_id: &str) -> Result<()> {
        let zone = catalog.require_zone(zone_id)?;
        self.default_zone = Some(zone.zone_id.clone());
        Ok(())
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "climatewatch", "climatewatch")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("climatewatch-config-test-{}", std::process::id()))
            .join(name)
            .join("config.toml")
    }

    #[test]
    fn default_zone_id_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.default_zone_id().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No default zone configured"));
        assert!(msg.contains("Hint: pass --zone"));
    }

    #[test]
    fn explicit_zone_wins_over_default() {
        let catalog = ZoneCatalog::new();
        let mut cfg = Config::default();
        cfg.set_default_zone(&catalog, "central-india").expect("known zone");

        assert_eq!(cfg.zone_id_or_default(Some("eastern-india")).unwrap(), "eastern-india");
        assert_eq!(cfg.zone_id_or_default(None).unwrap(), "central-india");
    }

    #[test]
    fn set_default_zone_rejects_unknown_zone() {
        let catalog = ZoneCatalog::new();
        let mut cfg = Config::default();

        let err = cfg.set_default_zone(&catalog, "atlantis").unwrap_err();

        assert!(err.to_string().contains("Zone 'atlantis' not found"));
        assert_eq!(cfg.default_zone, None);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = Config::load_from(&scratch_path("missing")).expect("defaults");

        assert_eq!(cfg, Config::default());
        assert!(cfg.show_disclaimer);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let path = scratch_path("saved");
        let catalog = ZoneCatalog::new();

        let mut cfg = Config::default();
        cfg.set_default_zone(&catalog, "western-india").expect("known zone");
        cfg.show_disclaimer = false;
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);

        let _ = fs::remove_dir_all(path.parent().and_then(Path::parent).unwrap());
    }

    #[test]
    fn show_disclaimer_defaults_to_true_when_absent() {
        let cfg: Config = toml::from_str(r#"default_zone = "central-india""#).expect("parse");

        assert_eq!(cfg.default_zone.as_deref(), Some("central-india"));
        assert!(cfg.show_disclaimer);
    }
}
