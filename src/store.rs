//! Shared display unit for temperatures.
//!
//! One writer (the unit toggle), any number of readers (weather cards). The
//! value flows one way through a watch channel; readers hold a receiver and
//! either read the latest unit or wait for the next change.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TempUnit {
    #[default]
    #[serde(alias = "C", alias = "c")]
    Celsius,
    #[serde(alias = "F", alias = "f")]
    Fahrenheit,
}

impl TempUnit {
    pub fn toggled(self) -> Self {
        match self {
            TempUnit::Celsius => TempUnit::Fahrenheit,
            TempUnit::Fahrenheit => TempUnit::Celsius,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TempUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C" | "CELSIUS" => Ok(TempUnit::Celsius),
            "F" | "FAHRENHEIT" => Ok(TempUnit::Fahrenheit),
            other => Err(format!("unknown temperature unit '{other}' (expected C or F)")),
        }
    }
}

/// Owner of the current [`TempUnit`].
#[derive(Debug)]
pub struct UnitStore {
    tx: watch::Sender<TempUnit>,
}

impl UnitStore {
    pub fn new(initial: TempUnit) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn get(&self) -> TempUnit {
        *self.tx.borrow()
    }

    pub fn set(&self, unit: TempUnit) {
        let previous = self.tx.send_replace(unit);
        debug!(target: "meridian::store", %previous, current = %unit, "display unit set");
    }

    /// Flip between Celsius and Fahrenheit and return the new unit.
    pub fn toggle(&self) -> TempUnit {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    /// A reader that sees the current unit and every later change.
    pub fn subscribe(&self) -> watch::Receiver<TempUnit> {
        self.tx.subscribe()
    }

    pub fn subscribers(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for UnitStore {
    fn default() -> Self {
        Self::new(TempUnit::default())
    }
}
