//! Window summary text.
//!
//! ```text
//! 14:00 - 15:00 UTC (9:00 - 10:00 EST / 15:00 - 16:00 CET)
//! ```
//!
//! Hours are not zero-padded. The UTC end is `start + 1` as is (so `24:00`
//! can appear); auxiliary hours are already normalized.

use std::fmt;

use crate::{AuxWindow, OverlapWindow};

impl fmt::Display for OverlapWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00 - {}:00 UTC", self.start_hour_utc, self.end_hour_utc)?;

        if self.aux.is_empty() {
            return Ok(());
        }

        f.write_str(" (")?;
        for (idx, zone) in self.aux.iter().enumerate() {
            if idx > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{zone}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for AuxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00 - {}:00 {}", self.start_local, self.end_local, self.label)
    }
}
