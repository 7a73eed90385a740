//! Modular hour arithmetic.

pub const HOURS_PER_DAY: u32 = 24;

/// Wrap `hour` into `0..24` and floor it.
///
/// Wrapping is a Euclidean remainder, so inputs several days away in either
/// direction land in range without repeated single-step corrections.
/// Fractional hours (from offsets like UTC+5:30) floor to the containing hour.
///
/// NaN and infinities have no meaningful hour; they map to 0.
pub fn normalize_hour(hour: f64) -> u32 {
    if !hour.is_finite() {
        return 0;
    }

    let wrapped = hour.rem_euclid(HOURS_PER_DAY as f64).floor();
    // rem_euclid can round a tiny negative up to exactly 24.0.
    if wrapped >= HOURS_PER_DAY as f64 { 0 } else { wrapped as u32 }
}

/// Translate an hour on a grid axis into a city's local hour.
///
/// The axis is expressed in a reference frame at `reference_offset` hours from
/// UTC: pass 0 for a UTC axis or the viewer's own offset for a local axis.
pub fn city_local_hour(axis_hour: u32, reference_offset: f64, city_offset: f64) -> u32 {
    normalize_hour(axis_hour as f64 - reference_offset + city_offset)
}
