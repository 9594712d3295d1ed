//! Building blocks of the weather station: a simulated temperature sensor and the
//! conversion of its raw readings into physical temperatures.
//!
//! Nothing in here sleeps, spawns threads or touches the console. The host decides when
//! to ask the sensor for its next reading.

pub mod sensor;
pub mod unit;

pub use sensor::{
    RawReading, SimulatedSensor, TemperatureSensor, TemperatureSensorPointer,
    TemperatureSensorSharedPointer, Trend,
};
pub use unit::{convert, convert_all, UnitKind};
