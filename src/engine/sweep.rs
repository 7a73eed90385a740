//! Best-overlap sweep over the 24 UTC hours.

use tracing::{debug, trace};

use super::classify::is_working_hour;
use super::hours::{HOURS_PER_DAY, city_local_hour, normalize_hour};
use crate::cities::{AuxZone, City, DEFAULT_AUX_ZONES};
use crate::{AuxWindow, OverlapWindow};

/// Number of cities inside working hours at each UTC hour.
pub fn overlap_counts(cities: &[City]) -> [usize; HOURS_PER_DAY as usize] {
    let mut counts = [0; HOURS_PER_DAY as usize];
    for (utc_hour, count) in counts.iter_mut().enumerate() {
        *count = cities
            .iter()
            .filter(|city| is_working_hour(city_local_hour(utc_hour as u32, 0.0, city.utc_offset)))
            .count();
    }
    counts
}

/// Find the UTC hour with the most cities at work, translated into the
/// built-in auxiliary zones (EST and CET).
pub fn find_optimal_window(cities: &[City]) -> OverlapWindow {
    find_optimal_window_with(cities, &DEFAULT_AUX_ZONES)
}

/// Like [`find_optimal_window`] with an explicit list of auxiliary zones.
///
/// The winner is the first hour holding the maximum count, so output is
/// reproducible across runs and callers.
pub fn find_optimal_window_with(cities: &[City], aux_zones: &[AuxZone]) -> OverlapWindow {
    let counts = overlap_counts(cities);
    debug!(target: "meridian::engine", cities = cities.len(), ?counts, "overlap sweep");

    let (start, overlap) = first_max(&counts);
    let aux = aux_zones.iter().map(|zone| translate(zone, start)).collect();

    debug!(target: "meridian::engine", start, overlap, "optimal window");
    OverlapWindow { start_hour_utc: start, end_hour_utc: start + 1, overlap, aux }
}

/// Index and value of the first maximum. Later equal counts never replace it.
fn first_max(counts: &[usize]) -> (u32, usize) {
    let mut best_hour = 0;
    let mut best_count = 0;
    for (hour, &count) in counts.iter().enumerate() {
        if count > best_count {
            best_hour = hour as u32;
            best_count = count;
        }
    }
    (best_hour, best_count)
}

// Start and end are normalized independently: the end is the translation of
// `start + 1`, not the normalized start plus one.
fn translate(zone: &AuxZone, start_utc: u32) -> AuxWindow {
    let start_local = normalize_hour(start_utc as f64 + zone.utc_offset);
    let end_local = normalize_hour((start_utc + 1) as f64 + zone.utc_offset);
    trace!(target: "meridian::engine", zone = %zone.label, start_local, end_local, "aux zone");
    AuxWindow { label: zone.label.clone(), start_local, end_local }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_max_keeps_the_earliest_hour() {
        assert_eq!(first_max(&[1, 3, 2, 3]), (1, 3));
        assert_eq!(first_max(&[0, 0, 0]), (0, 0));
        assert_eq!(first_max(&[2]), (0, 2));
    }

    #[test]
    fn translate_wraps_each_end_on_its_own() {
        let est = AuxZone::new("EST", -5.0);
        assert_eq!(translate(&est, 2), AuxWindow { label: "EST".into(), start_local: 21, end_local: 22 });
        assert_eq!(translate(&est, 4), AuxWindow { label: "EST".into(), start_local: 23, end_local: 0 });

        let cet = AuxZone::new("CET", 1.0);
        assert_eq!(translate(&cet, 22), AuxWindow { label: "CET".into(), start_local: 23, end_local: 0 });
        assert_eq!(translate(&cet, 23), AuxWindow { label: "CET".into(), start_local: 0, end_local: 1 });
    }
}
