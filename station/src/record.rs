use serde::Serialize;
use std::fmt;

use weather_station_common::{convert_all, RawReading, UnitKind};

/// One sample of the station, converted into every unit it reports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeatherRecord {
    pub reading: RawReading,
    pub temperature_celsius: f64,
    pub temperature_kelvin: f64,
    pub timestamp: String,
}

/// Convert a raw reading into a weather record.
impl From<RawReading> for WeatherRecord {
    fn from(reading: RawReading) -> Self {
        let mut record = Self {
            reading,
            temperature_celsius: 0.0,
            temperature_kelvin: 0.0,
            // Set current system time as the timestamp
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        for (unit, temperature) in convert_all(reading) {
            match unit {
                UnitKind::Celsius => record.temperature_celsius = temperature,
                UnitKind::Kelvin => record.temperature_kelvin = temperature,
            }
        }

        record
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading is {:6.2} degrees {} and {:6.2} degrees {}",
            self.temperature_celsius,
            UnitKind::Celsius,
            self.temperature_kelvin,
            UnitKind::Kelvin
        )
    }
}
