//! Desk-dashboard engine for distributed teams.
//!
//! The heart of the crate is the overlap engine (see [`engine`]): given a
//! table of cities pinned to fixed UTC offsets it classifies every hour of the
//! day as working, shoulder or off for each city and finds the single UTC hour
//! during which the most cities are at work.
//!
//! Around it sit the smaller dashboard widgets: city clocks, weather cards, an
//! FX ticker and a quarter progress tracker.
//!
//! ```
//! use meridian::{cities, find_optimal_window};
//!
//! let window = find_optimal_window(&cities::DEFAULT_CITIES);
//! assert_eq!(window.start_hour_utc, 14);
//! assert_eq!(window.to_string(), "14:00 - 15:00 UTC (9:00 - 10:00 EST / 15:00 - 16:00 CET)");
//! ```

extern crate self as meridian;

#[macro_use]
mod macros;
mod api;
pub mod cities;
pub mod clock;
pub mod config;
pub mod engine;
mod error;
pub mod logging;
pub mod offset;
pub mod quarter;
pub mod refresh;
pub mod store;
pub mod ticker;
pub mod weather;

pub use api::{
    Axis, Context, GridCell, GridRow, OverlapGrid, Options, optimal_window, optimal_window_with, overlap_grid,
};
pub use cities::{AuxZone, City};
pub use engine::{
    WORKING_END, WORKING_START, city_local_hour, classify, find_optimal_window, find_optimal_window_with,
    normalize_hour, overlap_counts,
};
pub use error::{Error, Result};

// --- Core types ---------------------------------------------------------------

/// Status of one grid cell: a city at a given axis hour.
///
/// `Current` and `CurrentLight` only ever appear in the column of the viewer's
/// current hour; they replace the static classification there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourStatus {
    /// Inside the 9-to-6 business day.
    Working,
    /// The hour right before (08) or right after (18) the business day.
    Shoulder,
    Off,
    /// Live column, city is between 08 and 18 inclusive.
    Current,
    /// Live column, city is outside 08..=18.
    CurrentLight,
}

impl HourStatus {
    /// Stable tag consumed by renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            HourStatus::Working => "working",
            HourStatus::Shoulder => "shoulder",
            HourStatus::Off => "off",
            HourStatus::Current => "current",
            HourStatus::CurrentLight => "current-light",
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, HourStatus::Current | HourStatus::CurrentLight)
    }
}

impl std::fmt::Display for HourStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The best meeting hour across a city table.
///
/// `end_hour_utc` is `start_hour_utc + 1` and is deliberately left
/// unnormalized, so a window starting at 23 ends at 24.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapWindow {
    pub start_hour_utc: u32,
    pub end_hour_utc: u32,
    /// Number of cities inside working hours during the window.
    pub overlap: usize,
    /// The same window expressed in each auxiliary zone.
    pub aux: Vec<AuxWindow>,
}

/// An [`OverlapWindow`] translated into an auxiliary zone. Both ends lie in `0..24`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuxWindow {
    pub label: String,
    pub start_local: u32,
    pub end_local: u32,
}
