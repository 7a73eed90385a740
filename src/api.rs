use crate::cities::{AuxZone, City};
use crate::engine::{self, HOURS_PER_DAY, city_local_hour, classify};
use crate::{Error, HourStatus, OverlapWindow, Result};
use chrono::{Local, Timelike};
use serde::Deserialize;

/// The viewer's side of the grid.
///
/// Owned by the presentation layer and refreshed on a timer; the engine only
/// reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    /// Viewer's hours from UTC.
    pub user_utc_offset: f64,
    /// Viewer's current local hour, `0..24`.
    pub current_local_hour: u32,
}

impl Context {
    pub fn new(user_utc_offset: f64, current_local_hour: u32) -> Result<Self> {
        if current_local_hour >= HOURS_PER_DAY {
            return Err(Error::InvalidHour(current_local_hour));
        }
        Ok(Self { user_utc_offset, current_local_hour })
    }

    /// Read offset and hour from the host clock.
    pub fn from_local() -> Self {
        let now = Local::now();
        Self {
            user_utc_offset: now.offset().local_minus_utc() as f64 / 3600.0,
            current_local_hour: now.hour(),
        }
    }

    /// The viewer's current hour on a UTC axis.
    pub fn current_utc_hour(&self) -> u32 {
        city_local_hour(self.current_local_hour, self.user_utc_offset, 0.0)
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) { Self { user_utc_offset: 1.0, current_local_hour: 12 } } else { Self::from_local() }
    }
}

/// Which clock the grid columns follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Utc,
    /// The viewer's own local time.
    #[serde(rename = "local", alias = "user")]
    UserLocal,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Utc => "UTC",
            Axis::UserLocal => "LOCAL",
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utc" => Ok(Axis::Utc),
            "local" | "user" => Ok(Axis::UserLocal),
            other => Err(format!("unknown axis '{other}' (expected utc or local)")),
        }
    }
}

/// Options that affect grid construction.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub axis: Axis,
}

/// One city at one axis hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub axis_hour: u32,
    pub local_hour: u32,
    pub status: HourStatus,
}

#[derive(Debug, Clone)]
pub struct GridRow {
    pub city: City,
    /// Exactly 24 cells, indexed by axis hour.
    pub cells: Vec<GridCell>,
}

/// The whole visualizer: one row per city, 24 columns.
#[derive(Debug, Clone)]
pub struct OverlapGrid {
    pub axis: Axis,
    /// Axis hour holding the live indicator.
    pub current_column: u32,
    pub rows: Vec<GridRow>,
}

impl OverlapGrid {
    pub fn row(&self, code: &str) -> Option<&GridRow> {
        self.rows.iter().find(|row| row.city.code.eq_ignore_ascii_case(code))
    }

    /// Cities working (strictly, not shoulder) per column. The live column
    /// counts by the static rule so it lines up with its neighbours.
    pub fn working_per_column(&self) -> Vec<usize> {
        (0..HOURS_PER_DAY as usize)
            .map(|col| self.rows.iter().filter(|row| engine::is_working_hour(row.cells[col].local_hour)).count())
            .collect()
    }
}

/// Build the status grid for `cities` as seen from `context`.
///
/// ```
/// use meridian::{cities, overlap_grid, Axis, Context, HourStatus, Options};
///
/// let ctx = Context::new(1.0, 12).unwrap();
/// let grid = overlap_grid(&cities::DEFAULT_CITIES, &ctx, &Options { axis: Axis::Utc });
/// assert_eq!(grid.current_column, 11);
/// assert_eq!(grid.row("NYC").unwrap().cells[14].status, HourStatus::Working);
/// ```
pub fn overlap_grid(cities: &[City], context: &Context, options: &Options) -> OverlapGrid {
    let (reference_offset, current_column) = match options.axis {
        Axis::Utc => (0.0, context.current_utc_hour()),
        Axis::UserLocal => (context.user_utc_offset, context.current_local_hour),
    };

    let rows = cities
        .iter()
        .map(|city| {
            let cells = (0..HOURS_PER_DAY)
                .map(|axis_hour| {
                    let local_hour = city_local_hour(axis_hour, reference_offset, city.utc_offset);
                    GridCell { axis_hour, local_hour, status: classify(local_hour, axis_hour == current_column) }
                })
                .collect();
            GridRow { city: city.clone(), cells }
        })
        .collect();

    OverlapGrid { axis: options.axis, current_column, rows }
}

/// Best meeting hour, restated in the built-in EST/CET zones.
pub fn optimal_window(cities: &[City]) -> OverlapWindow {
    engine::find_optimal_window(cities)
}

pub fn optimal_window_with(cities: &[City], aux_zones: &[AuxZone]) -> OverlapWindow {
    engine::find_optimal_window_with(cities, aux_zones)
}
