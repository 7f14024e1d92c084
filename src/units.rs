// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversions between wire scalars and domain values.
//!
//! The controller transports every value as a decimal string. Temperatures
//! are fixed-point integers holding hundredths of a degree; programs and
//! modes are small integers.
//!
//! # Examples
//!
//! ```
//! use touchline_lib::units;
//!
//! assert_eq!(units::wire_to_temperature("2086").unwrap(), 20.86);
//! assert_eq!(units::temperature_to_wire(21.456), "2145");
//! ```

use crate::error::{ParseError, ValueError};

/// Number of wire units per degree.
pub const TEMPERATURE_SCALE: f64 = 100.0;

/// Slack absorbed before truncating so that values such as `0.29 * 100`
/// (`28.999...` in binary) still encode to their intended hundredths.
const TRUNCATION_EPSILON: f64 = 1e-6;

/// Parses a wire integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInteger`] if the value is not a decimal
/// integer.
pub fn wire_to_int(value: &str) -> Result<i64, ParseError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| ParseError::InvalidInteger {
            value: value.to_string(),
            source,
        })
}

/// Converts a scaled wire integer to degrees.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInteger`] if the value is not a decimal
/// integer.
#[allow(clippy::cast_precision_loss)]
pub fn wire_to_temperature(value: &str) -> Result<f64, ParseError> {
    // Wire temperatures stay far below 2^52, so the cast is exact.
    wire_to_int(value).map(|hundredths| hundredths as f64 / TEMPERATURE_SCALE)
}

/// Converts degrees to a scaled wire integer.
///
/// The scaled value is truncated toward zero, matching the controller's
/// fixed-point convention: `21.456` becomes `"2145"`, not `"2146"`.
///
/// This is not strict truncation at the boundary. The scaled value is moved
/// `1e-6` hundredths away from zero first, so an input within `1e-8` degrees
/// below the next hundredth is rounded up to it: `21.459_999_99` becomes
/// `"2146"`. Values such as `0.29`, whose product with 100 lands just under an
/// integer in binary, therefore encode as `"29"` and not `"28"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn temperature_to_wire(degrees: f64) -> String {
    let scaled = degrees * TEMPERATURE_SCALE;
    let hundredths = (scaled + scaled.signum() * TRUNCATION_EPSILON).trunc() as i64;
    hundredths.to_string()
}

/// Parses a wire integer into a closed enum.
///
/// # Errors
///
/// Returns [`ParseError::InvalidInteger`] if the value is not an integer
/// in `0..=255`, or [`ParseError::InvalidEnum`] if no variant matches.
pub fn wire_to_enum<T>(value: &str) -> Result<T, ParseError>
where
    T: TryFrom<u8, Error = ValueError>,
{
    let raw = value
        .trim()
        .parse::<u8>()
        .map_err(|source| ParseError::InvalidInteger {
            value: value.to_string(),
            source,
        })?;
    Ok(T::try_from(raw)?)
}

/// Formats a closed enum as its wire integer.
#[must_use]
pub fn enum_to_wire<T: Into<u8>>(value: T) -> String {
    value.into().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mode, Program};

    #[test]
    fn decode_temperature() {
        assert!((wire_to_temperature("2086").unwrap() - 20.86).abs() < f64::EPSILON);
        assert!((wire_to_temperature("-150").unwrap() + 1.5).abs() < f64::EPSILON);
        assert!((wire_to_temperature(" 2100 ").unwrap() - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn decode_temperature_rejects_garbage() {
        assert!(matches!(
            wire_to_temperature("21.5"),
            Err(ParseError::InvalidInteger { .. })
        ));
        assert!(wire_to_temperature("").is_err());
    }

    #[test]
    fn encode_temperature_truncates() {
        assert_eq!(temperature_to_wire(21.456), "2145");
        assert_eq!(temperature_to_wire(21.459), "2145");
        assert_eq!(temperature_to_wire(21.0), "2100");
        assert_eq!(temperature_to_wire(-1.234), "-123");
        assert_eq!(temperature_to_wire(0.0), "0");
    }

    #[test]
    fn encode_temperature_survives_binary_representation() {
        assert_eq!(temperature_to_wire(0.29), "29");
        assert_eq!(temperature_to_wire(20.86), "2086");
        assert_eq!(temperature_to_wire(19.03), "1903");
    }

    #[test]
    fn encode_temperature_near_next_hundredth() {
        assert_eq!(temperature_to_wire(21.459_99), "2145");
        assert_eq!(temperature_to_wire(21.459_999_99), "2146");
        assert_eq!(temperature_to_wire(-21.459_999_99), "-2146");
    }

    #[test]
    fn wire_temperatures_reencode_unchanged() {
        for raw in ["0", "5", "29", "1903", "2086", "2100", "2999", "-250"] {
            let degrees = wire_to_temperature(raw).unwrap();
            assert_eq!(temperature_to_wire(degrees), raw);
        }
    }

    #[test]
    fn decode_enums() {
        assert_eq!(wire_to_enum::<Program>("2").unwrap(), Program::Program2);
        assert_eq!(wire_to_enum::<Mode>("1").unwrap(), Mode::Night);
    }

    #[test]
    fn decode_enum_out_of_range() {
        assert_eq!(
            wire_to_enum::<Mode>("3"),
            Err(ParseError::InvalidEnum(ValueError::InvalidMode(3)))
        );
        assert!(matches!(
            wire_to_enum::<Program>("-1"),
            Err(ParseError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn encode_enums() {
        assert_eq!(enum_to_wire(Program::Constant), "0");
        assert_eq!(enum_to_wire(Mode::Holiday), "2");
    }
}
