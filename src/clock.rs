//! City clock faces.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::api::Context;
use crate::cities::City;

const SECONDS_PER_DAY: i32 = 86_400;

/// What a city card shows under its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    /// `HH:MM:SS`
    pub time: String,
    /// `MON, OCT 19`
    pub date: String,
}

/// The city's wall clock at `now`.
pub fn clock_face(city: &City, now: DateTime<Utc>) -> ClockFace {
    let local = now.with_timezone(&fixed_offset(city.utc_offset));
    ClockFace { time: local.format("%H:%M:%S").to_string(), date: local.format("%a, %b %d").to_string().to_uppercase() }
}

/// Whether `city` sits on the viewer's own offset.
pub fn is_user_city(city: &City, context: &Context) -> bool {
    (city.utc_offset - context.user_utc_offset).abs() < 1e-9
}

// Offsets of a day or more have no chrono representation; fold them into one
// day so the wall time stays right.
fn fixed_offset(hours: f64) -> FixedOffset {
    let seconds = ((hours * 3600.0).round() as i64).rem_euclid(SECONDS_PER_DAY as i64) as i32;
    let seconds = if seconds > SECONDS_PER_DAY / 2 { seconds - SECONDS_PER_DAY } else { seconds };
    FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities::{DEFAULT_CITIES, find_by_code};
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, h, m, s).single().unwrap()
    }

    #[test]
    fn formats_time_and_date_at_city_offset() {
        let lax = find_by_code(&DEFAULT_CITIES, "LAX").unwrap();
        assert_eq!(clock_face(lax, at(14, 5, 9)), ClockFace { time: "06:05:09".into(), date: "MON, OCT 19".into() });

        let lvi = find_by_code(&DEFAULT_CITIES, "LVI").unwrap();
        assert_eq!(clock_face(lvi, at(14, 5, 9)).time, "16:05:09");
    }

    #[test]
    fn crosses_the_date_line() {
        let sydney = City::new("SYD (AEST)", "SYD", 10.0);
        assert_eq!(
            clock_face(&sydney, at(20, 0, 0)),
            ClockFace { time: "06:00:00".into(), date: "TUE, OCT 20".into() }
        );

        let lax = find_by_code(&DEFAULT_CITIES, "LAX").unwrap();
        assert_eq!(clock_face(lax, at(3, 0, 0)).date, "SUN, OCT 18");
    }

    #[test]
    fn fractional_and_oversized_offsets() {
        let india = City::new("BLR (IST)", "BLR", 5.5);
        assert_eq!(clock_face(&india, at(0, 0, 0)).time, "05:30:00");

        let odd = City::new("ODD", "ODD", 25.0);
        assert_eq!(clock_face(&odd, at(0, 0, 0)).time, "01:00:00");
    }

    #[test]
    fn user_city_matches_on_offset() {
        let ctx = Context::new(1.0, 9).unwrap();
        let flags: Vec<bool> = DEFAULT_CITIES.iter().map(|c| is_user_city(c, &ctx)).collect();
        assert_eq!(flags, vec![false, false, true, false]);
    }
}
