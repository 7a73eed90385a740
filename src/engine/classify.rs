//! Working-hours decision table.

use crate::HourStatus;

/// First working hour (inclusive).
pub const WORKING_START: u32 = 9;
/// End of the working day (exclusive).
pub const WORKING_END: u32 = 18;
pub const SHOULDER_BEFORE: u32 = WORKING_START - 1;
pub const SHOULDER_AFTER: u32 = WORKING_END;

/// Whether `local_hour` falls inside the half-open `[9, 18)` business day.
pub fn is_working_hour(local_hour: u32) -> bool {
    (WORKING_START..WORKING_END).contains(&local_hour)
}

/// Classify a city's local hour for one grid cell.
///
/// Precedence:
///
/// ```text
/// current column ──┬─ 08..=18 ─▶ Current
///                  └─ else    ─▶ CurrentLight
/// 09..18           ─────────────▶ Working
/// 08 | 18          ─────────────▶ Shoulder
/// else             ─────────────▶ Off
/// ```
///
/// The live column uses the wider inclusive band so the indicator lights up
/// over the shoulder hours too.
pub fn classify(local_hour: u32, is_current_column: bool) -> HourStatus {
    if is_current_column {
        return if (SHOULDER_BEFORE..=SHOULDER_AFTER).contains(&local_hour) {
            HourStatus::Current
        } else {
            HourStatus::CurrentLight
        };
    }

    if is_working_hour(local_hour) {
        HourStatus::Working
    } else if local_hour == SHOULDER_BEFORE || local_hour == SHOULDER_AFTER {
        HourStatus::Shoulder
    } else {
        HourStatus::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_of_the_business_day() {
        assert_eq!(classify(9, false), HourStatus::Working);
        assert_eq!(classify(17, false), HourStatus::Working);
        assert_eq!(classify(8, false), HourStatus::Shoulder);
        assert_eq!(classify(18, false), HourStatus::Shoulder);
        assert_eq!(classify(19, false), HourStatus::Off);
        assert_eq!(classify(0, false), HourStatus::Off);
        assert_eq!(classify(7, false), HourStatus::Off);
    }

    #[test]
    fn current_column_overrides_static_status() {
        for hour in 0..24 {
            let expected = if (8..=18).contains(&hour) { HourStatus::Current } else { HourStatus::CurrentLight };
            assert_eq!(classify(hour, true), expected, "hour {hour}");
        }
    }

    #[test]
    fn classification_is_repeatable() {
        for hour in 0..24 {
            for current in [false, true] {
                assert_eq!(classify(hour, current), classify(hour, current));
            }
        }
    }

    #[test]
    fn working_hours_are_half_open() {
        let working: Vec<u32> = (0..24).filter(|h| is_working_hour(*h)).collect();
        assert_eq!(working, (9..18).collect::<Vec<_>>());
    }
}
