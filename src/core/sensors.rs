//! Sensor snapshot: the six boolean readings of one evaluation cycle.
//!
//! A snapshot is an immutable value owned by the caller. Every combination
//! of the six readings is a valid input, so the type carries no invariants
//! beyond the independence of its fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of sensor channels in a snapshot.
pub const SENSOR_COUNT: usize = 6;

/// Number of distinct sensor snapshots (`2^6`).
pub const SENSOR_STATES: u8 = 1 << SENSOR_COUNT;

/// Errors raised when packing or unpacking sensor bits.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SensorError {
    #[error("Sensor bits {0:#04x} out of range (expected < {max:#04x})", max = SENSOR_STATES)]
    OutOfRange(u8),
}

/// Readings of the six pump sensors, S1 through S6.
///
/// A `true` reading on `current`, `pressure`, `level` and `flow` means the
/// quantity is nominal. A `true` reading on `temperature` and `vibration`
/// means the quantity is abnormal.
///
/// # Example
///
/// ```rust
/// use pump_monitor::core::{SensorSnapshot, SystemState};
///
/// let sensors = SensorSnapshot {
///     current: true,
///     pressure: true,
///     level: true,
///     flow: true,
///     temperature: false,
///     vibration: false,
/// };
///
/// assert_eq!(sensors.bits(), 0b111100);
/// assert_eq!(sensors.evaluate().state(), SystemState::Normal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// S1: supply current present.
    pub current: bool,
    /// S2: line pressure within range.
    pub pressure: bool,
    /// S3: reservoir level sufficient.
    pub level: bool,
    /// S4: flow detected.
    pub flow: bool,
    /// S5: motor overheat.
    pub temperature: bool,
    /// S6: abnormal vibration.
    pub vibration: bool,
}

impl SensorSnapshot {
    /// All sensors nominal: the only snapshot that yields `Normal`.
    pub const NOMINAL: Self = Self {
        current: true,
        pressure: true,
        level: true,
        flow: true,
        temperature: false,
        vibration: false,
    };

    /// Build a snapshot from readings in S1..S6 order.
    pub const fn new(
        current: bool,
        pressure: bool,
        level: bool,
        flow: bool,
        temperature: bool,
        vibration: bool,
    ) -> Self {
        Self {
            current,
            pressure,
            level,
            flow,
            temperature,
            vibration,
        }
    }

    /// Readings in S1..S6 order.
    pub const fn to_array(self) -> [bool; SENSOR_COUNT] {
        [
            self.current,
            self.pressure,
            self.level,
            self.flow,
            self.temperature,
            self.vibration,
        ]
    }

    /// Build a snapshot from readings in S1..S6 order.
    pub const fn from_array(bits: [bool; SENSOR_COUNT]) -> Self {
        Self::new(bits[0], bits[1], bits[2], bits[3], bits[4], bits[5])
    }

    /// Pack the readings into a `u8`, S1 in bit 5 down to S6 in bit 0.
    pub fn bits(self) -> u8 {
        self.to_array()
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
    }

    /// Inverse of [`bits`](Self::bits).
    pub fn from_bits(bits: u8) -> Result<Self, SensorError> {
        if bits >= SENSOR_STATES {
            return Err(SensorError::OutOfRange(bits));
        }
        let mut readings = [false; SENSOR_COUNT];
        for (i, reading) in readings.iter_mut().enumerate() {
            *reading = bits & (1 << (SENSOR_COUNT - 1 - i)) != 0;
        }
        Ok(Self::from_array(readings))
    }

    /// Every possible snapshot, in ascending bit order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SENSOR_STATES).filter_map(|bits| Self::from_bits(bits).ok())
    }
}
