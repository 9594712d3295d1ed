// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};

/// A raw sensor reading in hundredths of a Kelvin degree.
///
/// `0` is absolute zero, `27315` is the freezing point of water.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct RawReading(u16);

impl RawReading {
    /// Lowest reading a sensor reports (-40 °C).
    pub const MIN: RawReading = RawReading(23315);

    /// Highest reading a sensor reports (110 °C).
    pub const MAX: RawReading = RawReading(38315);

    /// Reading a sensor starts from (20 °C).
    pub const DEFAULT: RawReading = RawReading(29315);

    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl Default for RawReading {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u16> for RawReading {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Direction the temperature is currently drifting in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trend {
    #[default]
    Increasing,
    Decreasing,
}

impl Trend {
    /// The opposite direction.
    pub const fn flip(self) -> Self {
        match self {
            Trend::Increasing => Trend::Decreasing,
            Trend::Decreasing => Trend::Increasing,
        }
    }

    /// `1` when increasing, `-1` when decreasing.
    pub const fn sign(self) -> i32 {
        match self {
            Trend::Increasing => 1,
            Trend::Decreasing => -1,
        }
    }
}

pub type TemperatureSensorPointer = Box<dyn TemperatureSensor + Send>;

/// A sensor shared between threads. Sensors carry no lock of their own.
pub type TemperatureSensorSharedPointer = Arc<Mutex<TemperatureSensorPointer>>;

/// The temperature sensor trait that provides raw readings.
pub trait TemperatureSensor {
    /// Takes the next reading.
    fn read(&mut self) -> RawReading;

    /// The most recent reading, or the initial one if nothing was read yet.
    fn current(&self) -> RawReading;
}

#[test]
fn test_trend_flip() {
    assert_eq!(Trend::default(), Trend::Increasing);
    assert_eq!(Trend::Increasing.flip(), Trend::Decreasing);
    assert_eq!(Trend::Decreasing.flip().flip(), Trend::Decreasing);
    assert_eq!(Trend::Increasing.sign(), 1);
    assert_eq!(Trend::Decreasing.sign(), -1);
}

#[test]
fn test_raw_reading_serializes_as_plain_integer() {
    let json = serde_json::to_string(&RawReading::DEFAULT).unwrap();
    assert_eq!(json, "29315");

    let reading: RawReading = serde_json::from_str("23315").unwrap();
    assert_eq!(reading, RawReading::MIN);
}
