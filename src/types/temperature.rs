// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature type for room and target readings.

use std::fmt;

use serde::Serialize;

use crate::error::{ParseError, ValueError};
use crate::units;

/// A temperature in degrees Celsius.
///
/// The controller resolves temperatures to 1/100 of a degree. Values are
/// always finite.
///
/// # Examples
///
/// ```
/// use touchline_lib::types::Temperature;
///
/// let target = Temperature::new(21.5).unwrap();
/// assert_eq!(target.to_wire(), "2150");
///
/// let room = Temperature::from_wire("2086").unwrap();
/// assert_eq!(room.to_string(), "20.86°C");
///
/// assert!(Temperature::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Zero degrees, the value of an unset field.
    pub const ZERO: Self = Self(0.0);

    /// Creates a temperature from degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteTemperature` for NaN or infinite input.
    pub fn new(celsius: f64) -> Result<Self, ValueError> {
        if celsius.is_finite() {
            Ok(Self(celsius))
        } else {
            Err(ValueError::NonFiniteTemperature)
        }
    }

    /// Returns the value in degrees Celsius.
    #[must_use]
    pub const fn celsius(&self) -> f64 {
        self.0
    }

    /// Decodes a scaled wire integer.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the value is not a decimal integer.
    pub fn from_wire(value: &str) -> Result<Self, ParseError> {
        units::wire_to_temperature(value).map(Self)
    }

    /// Encodes as a scaled wire integer, truncating below 1/100 degree.
    #[must_use]
    pub fn to_wire(&self) -> String {
        units::temperature_to_wire(self.0)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.0)
    }
}

impl TryFrom<f64> for Temperature {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
