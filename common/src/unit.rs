//! Conversion of raw readings into temperatures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sensor::RawReading;

/// A temperature scale a raw reading can be converted into.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Kelvin,
    Celsius,
}

impl UnitKind {
    /// All supported units, in declaration order.
    pub const ALL: [UnitKind; 2] = [UnitKind::Kelvin, UnitKind::Celsius];

    pub fn iter() -> impl Iterator<Item = UnitKind> {
        Self::ALL.into_iter()
    }

    /// Offset added to a raw reading before scaling it down by 100.
    pub const fn offset(self) -> i32 {
        match self {
            UnitKind::Kelvin => 0,
            UnitKind::Celsius => -27315,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            UnitKind::Kelvin => "K",
            UnitKind::Celsius => "C",
        }
    }

    /// Converts `reading` into a temperature in this unit.
    pub fn convert(self, reading: RawReading) -> f64 {
        f64::from(i32::from(reading.value()) + self.offset()) / 100.0
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts `reading` into a temperature in `unit`.
pub fn convert(reading: RawReading, unit: UnitKind) -> f64 {
    unit.convert(reading)
}

/// Converts `reading` into every supported unit.
pub fn convert_all(reading: RawReading) -> [(UnitKind, f64); UnitKind::ALL.len()] {
    UnitKind::ALL.map(|unit| (unit, unit.convert(reading)))
}
