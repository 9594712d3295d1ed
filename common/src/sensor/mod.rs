// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod temperaturesensor;
mod simulatedsensor;

pub use temperaturesensor::RawReading;
pub use temperaturesensor::TemperatureSensor;
pub use temperaturesensor::TemperatureSensorPointer;
pub use temperaturesensor::TemperatureSensorSharedPointer;
pub use temperaturesensor::Trend;

pub use simulatedsensor::SimulatedSensor;
pub use simulatedsensor::{MAX_CHANGE, MIN_CHANGE, TREND_CUTOFF};
