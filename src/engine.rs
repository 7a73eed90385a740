//! Overlap engine.
//!
//! Pure hour arithmetic over a table of fixed-offset cities. Nothing in here
//! reads the clock, the config or any shared state; callers pass everything in.
//!
//! ## How the parts work together
//!
//! ```text
//! axis hour + reference offset + city offset
//!        │
//!        v
//!  city_local_hour (hours.rs)  ── normalize_hour: wrap mod 24, floor
//!        │
//!        ├──▶ classify (classify.rs)        per grid cell
//!        │      current column? working? shoulder? off?
//!        │
//!        └──▶ overlap_counts (sweep.rs)     per UTC hour 0..24
//!               │  argmax, first index wins
//!               v
//!         find_optimal_window ──▶ OverlapWindow ──▶ Display (format.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `hours.rs`: modular hour normalization and frame translation.
//! - `classify.rs`: the working / shoulder / off decision table and the live
//!   column override.
//! - `sweep.rs`: per-hour working counts and the best-hour selection, plus the
//!   auxiliary zone translation of the winner.
//! - `format.rs`: the textual window summary.
//!
//! ## Invariants
//!
//! - Every normalized hour lies in `0..24`, for any finite input.
//! - Ties in the sweep resolve to the lowest UTC hour. An empty city table has
//!   all counts at zero and therefore selects hour 0.
//!
//! Set `MERIDIAN_LOG=meridian::engine=debug` to trace the sweep.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/format.rs"]
mod format;
#[path = "engine/hours.rs"]
mod hours;
#[path = "engine/sweep.rs"]
mod sweep;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use classify::{SHOULDER_AFTER, SHOULDER_BEFORE, WORKING_END, WORKING_START, classify, is_working_hour};
pub use hours::{HOURS_PER_DAY, city_local_hour, normalize_hour};
pub use sweep::{find_optimal_window, find_optimal_window_with, overlap_counts};
