// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sensor::temperaturesensor::{RawReading, TemperatureSensor, Trend};

/// Random fractions above this value reverse the trend.
pub const TREND_CUTOFF: f64 = 0.8;

/// Smallest change between two readings, in hundredths of a degree.
pub const MIN_CHANGE: u16 = 100;

/// Largest change between two readings, in hundredths of a degree.
pub const MAX_CHANGE: u16 = 200;

/// A sensor that makes up its readings.
///
/// Each reading moves the previous one by [`MIN_CHANGE`] to [`MAX_CHANGE`] hundredths of a
/// degree in the direction of the current [`Trend`]. The trend keeps its direction with a
/// probability of 80%. Readings never leave [`RawReading::MIN`]..=[`RawReading::MAX`]; hitting
/// either end turns the trend back towards the middle.
///
/// The sensor is plain owned state. Wrap it in a
/// [`TemperatureSensorSharedPointer`](crate::TemperatureSensorSharedPointer) to share it.
#[derive(Debug, Clone)]
pub struct SimulatedSensor<R = StdRng> {
    reading: RawReading,
    trend: Trend,
    rng: R,
}

impl SimulatedSensor<StdRng> {
    /// Creates a sensor with a random source seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a sensor whose readings are reproducible for a given `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for SimulatedSensor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SimulatedSensor<R> {
    /// Creates a sensor drawing from `rng`, starting at [`RawReading::DEFAULT`] and increasing.
    pub fn with_rng(rng: R) -> Self {
        Self {
            reading: RawReading::DEFAULT,
            trend: Trend::Increasing,
            rng,
        }
    }

    #[cfg(test)]
    fn with_state(reading: RawReading, trend: Trend, rng: R) -> Self {
        Self { reading, trend, rng }
    }

    pub fn reading(&self) -> RawReading {
        self.reading
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Simulates the next reading and stores it as the current one.
    pub fn next_reading(&mut self) -> RawReading {
        if self.rng.gen::<f64>() > TREND_CUTOFF {
            self.trend = self.trend.flip();
            log::trace!("Trend reversed to {:?}", self.trend);
        }

        let change = i32::from(self.rng.gen_range(MIN_CHANGE..=MAX_CHANGE));
        let next = i32::from(self.reading.value()) + change * self.trend.sign();

        self.reading = if next >= i32::from(RawReading::MAX.value()) {
            log::trace!("Reading {next} clamped to {}", RawReading::MAX);
            self.trend = Trend::Decreasing;
            RawReading::MAX
        } else if next <= i32::from(RawReading::MIN.value()) {
            log::trace!("Reading {next} clamped to {}", RawReading::MIN);
            self.trend = Trend::Increasing;
            RawReading::MIN
        } else {
            // Strictly between MIN and MAX, so it fits.
            RawReading::new(next as u16)
        };

        self.reading
    }
}

impl<R: Rng> TemperatureSensor for SimulatedSensor<R> {
    fn read(&mut self) -> RawReading {
        self.next_reading()
    }

    fn current(&self) -> RawReading {
        self.reading
    }
}
