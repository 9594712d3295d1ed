mod record;

use anyhow::Context;
use log::Level;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use record::WeatherRecord;
use weather_station_common::{
    SimulatedSensor, TemperatureSensor, TemperatureSensorPointer, TemperatureSensorSharedPointer,
};

/// The station reads its sensor once per period and prints the temperature in Celsius and
/// Kelvin.
///
/// `sample` and `report` take a single reading on demand, `run` paces them in a loop.
struct WeatherStation {
    sensor: TemperatureSensorSharedPointer,
}

impl WeatherStation {
    const PERIOD: std::time::Duration = std::time::Duration::from_millis(1000);

    /// Create a station attached to a simulated sensor.
    fn new() -> Self {
        Self::with_sensor(Box::new(SimulatedSensor::new()))
    }

    fn with_sensor(sensor: TemperatureSensorPointer) -> Self {
        // The sensor is shared with the thread running the loop, so we wrap it in an Arc<Mutex>.
        Self {
            sensor: Arc::new(Mutex::new(sensor)),
        }
    }

    /// Take one reading and convert it into a record.
    fn sample(&self) -> WeatherRecord {
        // A panic elsewhere cannot leave the sensor half-updated, so a poisoned lock is fine.
        let reading = self
            .sensor
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .read();

        let record = WeatherRecord::from(reading);

        if log::log_enabled!(Level::Debug) {
            match serde_json::to_string(&record) {
                Ok(json) => log::debug!("{json}"),
                Err(e) => log::warn!("Cannot serialize record: {e}"),
            }
        }

        record
    }

    /// Take one reading and write it as a line to `out`.
    fn report(&self, out: &mut impl Write) -> std::io::Result<WeatherRecord> {
        let record = self.sample();
        writeln!(out, "{record}")?;
        Ok(record)
    }

    /// Report to stdout once per period, forever.
    fn run(&self) {
        log::info!("Weather station started, reporting every {:?}", Self::PERIOD);

        loop {
            std::thread::sleep(Self::PERIOD);

            if let Err(e) = self.report(&mut std::io::stdout().lock()) {
                log::warn!("Cannot write reading: {e}");
            }
        }
    }

    /// Run the station on its own thread.
    fn start(self) -> anyhow::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name("weather-station".into())
            .spawn(move || self.run())
            .context("Failed to spawn the weather station thread")
    }
}

/// A minimal main function that starts the station and waits for it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let station = WeatherStation::new();

    station
        .start()?
        .join()
        .map_err(|_| anyhow::anyhow!("The weather station thread panicked"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_station_common::RawReading;

    struct FixedSensor(RawReading);

    impl TemperatureSensor for FixedSensor {
        fn read(&mut self) -> RawReading {
            self.0
        }

        fn current(&self) -> RawReading {
            self.0
        }
    }

    #[test]
    fn report_writes_one_line() {
        let station = WeatherStation::with_sensor(Box::new(FixedSensor(RawReading::DEFAULT)));
        let mut out = Vec::new();

        let record = station.report(&mut out).unwrap();

        assert_eq!(record.reading, RawReading::DEFAULT);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Reading is  20.00 degrees C and 293.15 degrees K\n"
        );
    }

    #[test]
    fn samples_follow_the_sensor() {
        let station = WeatherStation::with_sensor(Box::new(SimulatedSensor::seeded(3)));
        let mut expected = SimulatedSensor::seeded(3);

        for _ in 0..50 {
            let record = station.sample();
            assert_eq!(record.reading, expected.next_reading());
            assert!(record.reading >= RawReading::MIN && record.reading <= RawReading::MAX);
        }

        let current = station.sensor.lock().unwrap().current();
        assert_eq!(current, expected.reading());
    }

    #[test]
    fn shared_sensor_across_threads() {
        let station = Arc::new(WeatherStation::with_sensor(Box::new(SimulatedSensor::seeded(11))));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let station = station.clone();
                std::thread::spawn(move || {
                    let mut out = Vec::new();
                    for _ in 0..25 {
                        station.report(&mut out).unwrap();
                    }
                    String::from_utf8(out).unwrap()
                })
            })
            .collect();

        let lines: usize = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().lines().count())
            .sum();
        assert_eq!(lines, 100);

        // 100 reads in any interleaving land on the 100th reading of the same seed.
        let mut expected = SimulatedSensor::seeded(11);
        for _ in 0..99 {
            expected.next_reading();
        }
        let current = station.sensor.lock().unwrap().current();
        assert_eq!(current, expected.next_reading());
    }
}
