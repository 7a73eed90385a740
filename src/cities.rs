//! City table.
//!
//! Cities are pinned to a fixed UTC offset. There is no daylight-saving
//! handling: Los Angeles is always UTC-8, Lviv always UTC+2.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::offset::{self, OffsetRepr};

/// A city shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "CityEntry")]
pub struct City {
    /// Display label, e.g. `"LAX (PST)"`.
    pub name: String,
    /// Short code used for lookups, e.g. `"LAX"`.
    pub code: String,
    /// Hours from UTC. Usually whole, may be fractional (UTC+5:30).
    pub utc_offset: f64,
    /// Where to ask for weather, if anywhere.
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl City {
    pub fn new(name: impl Into<String>, code: impl Into<String>, utc_offset: f64) -> Self {
        Self { name: name.into(), code: code.into(), utc_offset, coordinates: None }
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.coordinates = Some(Coordinates { lat, lon });
        self
    }

    /// Parse a `NAME=OFFSET` spec, e.g. `"TYO (JST)=+9"`.
    ///
    /// The code is the first whitespace-separated word of the name.
    pub fn parse_spec(spec: &str) -> crate::Result<Self> {
        let (name, raw_offset) =
            spec.rsplit_once('=').ok_or_else(|| crate::Error::InvalidCity(format!("'{spec}' (expected NAME=OFFSET)")))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(crate::Error::InvalidCity(format!("'{spec}' (empty name)")));
        }

        let utc_offset = offset::parse_offset(raw_offset)?;
        Ok(City::new(name, code_from_name(name), utc_offset))
    }
}

fn code_from_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_ascii_uppercase()
}

/// City as written in the config file. `lat`/`lon` come as a pair or not at all.
#[derive(Debug, Deserialize)]
struct CityEntry {
    name: String,
    #[serde(default)]
    code: Option<String>,
    offset: OffsetRepr,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl TryFrom<CityEntry> for City {
    type Error = crate::Error;

    fn try_from(entry: CityEntry) -> crate::Result<Self> {
        let utc_offset = entry.offset.hours()?;
        let coordinates = match (entry.lat, entry.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            (None, None) => None,
            _ => return Err(crate::Error::InvalidCity(format!("'{}' needs both lat and lon, or neither", entry.name))),
        };
        let code = entry.code.unwrap_or_else(|| code_from_name(&entry.name));
        Ok(City { name: entry.name, code, utc_offset, coordinates })
    }
}

/// A secondary zone in which the optimal window is restated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuxZone {
    pub label: String,
    #[serde(rename = "offset", deserialize_with = "offset::deserialize_hours")]
    pub utc_offset: f64,
}

impl AuxZone {
    pub fn new(label: impl Into<String>, utc_offset: f64) -> Self {
        Self { label: label.into(), utc_offset }
    }
}

/// The built-in deployment: two US offices and two in Central/Eastern Europe.
pub static DEFAULT_CITIES: Lazy<Vec<City>> = Lazy::new(|| {
    vec![
        City::new("LAX (PST)", "LAX", -8.0).with_coordinates(34.05, -118.24),
        City::new("NYC (EST)", "NYC", -5.0).with_coordinates(40.71, -74.0),
        City::new("WRO (CET)", "WRO", 1.0).with_coordinates(51.1, 17.03),
        City::new("LVI (EET)", "LVI", 2.0).with_coordinates(49.83, 24.02),
    ]
});

pub static DEFAULT_AUX_ZONES: Lazy<Vec<AuxZone>> =
    Lazy::new(|| vec![AuxZone::new("EST", -5.0), AuxZone::new("CET", 1.0)]);

/// Look a city up by its code, ignoring case.
pub fn find_by_code<'a>(cities: &'a [City], code: &str) -> Option<&'a City> {
    cities.iter().find(|city| city.code.eq_ignore_ascii_case(code))
}
