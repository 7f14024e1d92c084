// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor records and identifiers.

use std::fmt;

use serde::Serialize;

use crate::error::FieldError;
use crate::types::{Mode, Program, Temperature};

/// Controller-assigned index of a sensor.
///
/// The controller numbers its sensors contiguously from 0 to `count - 1`.
///
/// # Examples
///
/// ```
/// use touchline_lib::types::SensorId;
///
/// let id = SensorId::checked(2, 3).unwrap();
/// assert_eq!(id.value(), 2);
/// assert!(SensorId::checked(3, 3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct SensorId(usize);

impl SensorId {
    /// Creates an id without bounds checking.
    ///
    /// Use this when addressing a sensor for a write, where the controller
    /// is the authority on which ids exist.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Creates an id that is known to be below `count`.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::IndexOutOfRange` if `index >= count`.
    pub const fn checked(index: usize, count: usize) -> Result<Self, FieldError> {
        if index < count {
            Ok(Self(index))
        } else {
            Err(FieldError::IndexOutOfRange { index, count })
        }
    }

    /// Returns the numeric index.
    #[must_use]
    pub const fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for SensorId {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Derived state of the heating valve behind a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValveState {
    /// Room is below target, the valve is assumed open.
    Open,
    /// Room is at or above target, the valve is assumed closed.
    Closed,
}

impl ValveState {
    /// Returns `"open"` or `"closed"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns `1` for open and `0` for closed.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Open => 1,
            Self::Closed => 0,
        }
    }
}

impl fmt::Display for ValveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one thermostat zone.
///
/// A fresh collection of sensors is produced by every read; fields the
/// controller did not report keep their zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Sensor {
    /// Controller-assigned index.
    pub id: SensorId,
    /// Display name, empty when unset on the device.
    pub name: String,
    /// Measured room temperature.
    pub room_temperature: Temperature,
    /// Configured target temperature.
    pub target_temperature: Temperature,
    /// Active week program.
    pub program: Program,
    /// Active operating mode.
    pub mode: Mode,
}

impl Sensor {
    /// Creates an empty record for the given id.
    #[must_use]
    pub fn new(id: SensorId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Approximates the valve state from room and target temperature.
    ///
    /// The controller does not report valve positions. This is a plain
    /// comparison (`room < target` means open) without hysteresis and may
    /// disagree with the actual actuator.
    ///
    /// # Examples
    ///
    /// ```
    /// use touchline_lib::types::{Sensor, SensorId, Temperature, ValveState};
    ///
    /// let mut sensor = Sensor::new(SensorId::new(0));
    /// sensor.room_temperature = Temperature::new(20.86).unwrap();
    /// sensor.target_temperature = Temperature::new(21.0).unwrap();
    /// assert_eq!(sensor.valve_state(), ValveState::Open);
    /// ```
    #[must_use]
    pub fn valve_state(&self) -> ValveState {
        if self.room_temperature < self.target_temperature {
            ValveState::Open
        } else {
            ValveState::Closed
        }
    }

    /// Numeric form of [`valve_state`](Self::valve_state): `1` open, `0` closed.
    ///
    /// Same approximation, same caveats.
    #[must_use]
    pub fn valve_value(&self) -> u8 {
        self.valve_state().as_num()
    }
}
