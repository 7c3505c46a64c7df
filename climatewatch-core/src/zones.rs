//! India's major climate zones (IMD classification).
//!
//! The catalog is built once and handed to whoever needs it; it is never
//! mutated after construction.

use crate::{error::ClimateError, model::Zone};

struct ZoneSeed {
    zone_id: &'static str,
    name: &'static str,
    states: &'static [&'static str],
    avg_rainfall_mm: f64,
    avg_temp_c: f64,
}

const SEED: &[ZoneSeed] = &[
    ZoneSeed {
        zone_id: "northwest-india",
        name: "Northwest India",
        states: &["Rajasthan", "Punjab", "Haryana", "Himachal Pradesh", "Jammu & Kashmir", "Ladakh"],
        avg_rainfall_mm: 350.0,
        avg_temp_c: 24.0,
    },
    ZoneSeed {
        zone_id: "northeast-india",
        name: "Northeast India",
        states: &[
            "Assam",
            "Meghalaya",
            "Arunachal Pradesh",
            "Nagaland",
            "Manipur",
            "Mizoram",
            "Tripura",
            "Sikkim",
        ],
        avg_rainfall_mm: 2500.0,
        avg_temp_c: 22.0,
    },
    ZoneSeed {
        zone_id: "central-india",
        name: "Central India",
        states: &["Madhya Pradesh", "Chhattisgarh", "Jharkhand", "Odisha"],
        avg_rainfall_mm: 1100.0,
        avg_temp_c: 27.0,
    },
    ZoneSeed {
        zone_id: "western-india",
        name: "Western India",
        states: &["Gujarat", "Maharashtra", "Goa"],
        avg_rainfall_mm: 900.0,
        avg_temp_c: 27.5,
    },
    ZoneSeed {
        zone_id: "southern-peninsula",
        name: "Southern Peninsula",
        states: &["Karnataka", "Tamil Nadu", "Kerala", "Andhra Pradesh", "Telangana"],
        avg_rainfall_mm: 1200.0,
        avg_temp_c: 28.0,
    },
    ZoneSeed {
        zone_id: "eastern-india",
        name: "Eastern India",
        states: &["West Bengal", "Bihar", "Uttar Pradesh", "Uttarakhand"],
        avg_rainfall_mm: 1050.0,
        avg_temp_c: 26.5,
    },
];

/// Immutable registry of climate zones, kept in registration order.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl ZoneCatalog {
    pub fn new() -> Self {
        let zones = SEED
            .iter()
            .map(|seed| Zone {
                zone_id: seed.zone_id.to_string(),
                name: seed.name.to_string(),
                states: seed.states.iter().map(|s| s.to_string()).collect(),
                avg_rainfall_mm: seed.avg_rainfall_mm,
                avg_temp_c: seed.avg_temp_c,
            })
            .collect();

        Self { zones }
    }

    /// All registered zones, in registration order.
    pub fn all_zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone_ids(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.zone_id.as_str()).collect()
    }

    /// Exact-match lookup by zone id.
    pub fn get_zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.zone_id == zone_id)
    }

    /// Like [`get_zone`](Self::get_zone), but an unknown id becomes an error
    /// listing the available zones.
    pub fn require_zone(&self, zone_id: &str) -> Result<&Zone, ClimateError> {
        self.get_zone(zone_id).ok_or_else(|| ClimateError::UnknownZone {
            zone_id: zone_id.to_string(),
            available: self.zone_ids().into_iter().map(str::to_string).collect(),
        })
    }

    /// Zones whose member states include `state` (case-insensitive, exact).
    pub fn zones_for_state(&self, state: &str) -> Vec<&Zone> {
        self.zones.iter().filter(|z| z.contains_state(state)).collect()
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::new()
    }
}
