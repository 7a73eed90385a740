//! Weather cards.
//!
//! Fetching is left to the caller; this module builds the request URL, decodes
//! the open-meteo `current_weather` payload and renders it in whatever unit
//! the shared [`UnitStore`](crate::store::UnitStore) currently holds.

use serde::Deserialize;
use tokio::sync::watch;
use tracing::warn;

use crate::Result;
use crate::cities::{City, Coordinates};
use crate::store::TempUnit;

pub const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

/// Current conditions as reported by open-meteo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    /// WMO weather interpretation code.
    pub code: u32,
}

#[derive(Debug, Deserialize)]
struct ForecastPayload {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: u32,
}

impl WeatherReading {
    pub fn from_open_meteo(body: &str) -> Result<Self> {
        let payload: ForecastPayload = serde_json::from_str(body)?;
        let current = payload.current_weather;
        Ok(Self { temperature_c: current.temperature, code: current.weathercode })
    }

    pub fn description(&self) -> &'static str {
        describe(self.code)
    }
}

pub fn forecast_url(coordinates: Coordinates) -> String {
    format!(
        "{FORECAST_ENDPOINT}?latitude={}&longitude={}&current_weather=true",
        coordinates.lat, coordinates.lon
    )
}

/// Short upper-case label for a WMO code.
pub fn describe(code: u32) -> &'static str {
    match code {
        0 => "CLEAR SKY",
        1 => "MAINLY CLEAR",
        2 => "PARTLY CLOUDY",
        3 => "OVERCAST",
        45 | 48 => "FOG",
        51 | 53 | 55 => "DRIZZLE",
        61 | 63 => "RAIN",
        65 => "HEAVY RAIN",
        71 | 73 => "SNOW",
        75 => "HEAVY SNOW",
        95 => "THUNDERSTORM",
        _ => "UNKNOWN",
    }
}

/// Celsius values print as reported; Fahrenheit is converted and rounded to
/// one decimal.
pub fn format_temperature(temperature_c: f64, unit: TempUnit) -> String {
    match unit {
        TempUnit::Celsius => temperature_c.to_string(),
        TempUnit::Fahrenheit => format!("{:.1}", temperature_c * 9.0 / 5.0 + 32.0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CardState {
    Loading,
    Ready(WeatherReading),
    Failed,
}

/// Weather block of one city card, bound to the shared display unit.
#[derive(Debug)]
pub struct WeatherCard {
    city: City,
    state: CardState,
    unit: watch::Receiver<TempUnit>,
}

impl WeatherCard {
    pub fn new(city: City, unit: watch::Receiver<TempUnit>) -> Self {
        Self { city, state: CardState::Loading, unit }
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    /// Where to fetch from, or `None` for a city without coordinates.
    pub fn url(&self) -> Option<String> {
        self.city.coordinates.map(forecast_url)
    }

    /// Feed a response body. A body that does not decode marks the card failed.
    pub fn apply(&mut self, body: &str) {
        self.state = match WeatherReading::from_open_meteo(body) {
            Ok(reading) => CardState::Ready(reading),
            Err(err) => {
                warn!(target: "meridian::weather", city = %self.city.code, %err, "weather payload rejected");
                CardState::Failed
            }
        };
    }

    pub fn mark_failed(&mut self) {
        self.state = CardState::Failed;
    }

    pub fn reading(&self) -> Option<WeatherReading> {
        match self.state {
            CardState::Ready(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self.state {
            CardState::Loading => "LOADING...",
            CardState::Ready(reading) => reading.description(),
            CardState::Failed => "ERR",
        }
    }

    /// Temperature in the current display unit, e.g. `"12.5°C"` or `"--°F"`.
    pub fn temperature(&self) -> String {
        let unit = *self.unit.borrow();
        match self.state {
            CardState::Ready(reading) => format!("{}{}", format_temperature(reading.temperature_c, unit), unit),
            _ => format!("--{unit}"),
        }
    }
}
