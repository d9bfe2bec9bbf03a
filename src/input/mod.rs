//! Parsing of textual sensor vectors.
//!
//! Accepts six `0`/`1` characters in S1..S6 order, optionally separated by
//! commas or ASCII whitespace: `"111100"`, `"1,1,1,1,0,0"`, `"1 1 1 1 0 0"`.
//! Every reading is validated in one pass, so an input with several bad
//! characters reports all of them.

use crate::core::{SensorSnapshot, SENSOR_COUNT};
use std::str::FromStr;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{InputError, InvalidBit};

fn reading(position: usize, found: char) -> Validation<bool, NonEmptyVec<InvalidBit>> {
    match found {
        '1' => Validation::success(true),
        '0' => Validation::success(false),
        _ => Validation::fail(InvalidBit { position, found }),
    }
}

/// Parse a sensor vector.
///
/// # Example
///
/// ```rust
/// use pump_monitor::input::{parse_sensors, InputError};
/// use pump_monitor::core::SensorSnapshot;
///
/// assert_eq!(parse_sensors("1,1,1,1,0,0").unwrap(), SensorSnapshot::NOMINAL);
/// assert_eq!(
///     parse_sensors("1111"),
///     Err(InputError::WrongLength { expected: 6, found: 4 })
/// );
/// ```
pub fn parse_sensors(input: &str) -> Result<SensorSnapshot, InputError> {
    let chars: Vec<char> = input
        .chars()
        .filter(|c| *c != ',' && !c.is_ascii_whitespace())
        .collect();

    if chars.len() != SENSOR_COUNT {
        return Err(InputError::WrongLength {
            expected: SENSOR_COUNT,
            found: chars.len(),
        });
    }

    let readings: Vec<_> = chars
        .iter()
        .enumerate()
        .map(|(position, &found)| reading(position, found))
        .collect();

    match Validation::all_vec(readings) {
        Validation::Success(bits) => {
            let mut array = [false; SENSOR_COUNT];
            array.copy_from_slice(&bits);
            Ok(SensorSnapshot::from_array(array))
        }
        Validation::Failure(invalid) => Err(InputError::InvalidBits(
            invalid.iter().copied().collect(),
        )),
    }
}

impl FromStr for SensorSnapshot {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sensors(s)
    }
}
