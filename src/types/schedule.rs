// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Week program and operating mode of a thermostat.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Active week program of a thermostat.
///
/// # Examples
///
/// ```
/// use touchline_lib::types::Program;
///
/// assert_eq!(u8::from(Program::Program2), 2);
/// assert_eq!(Program::try_from(0).unwrap(), Program::Constant);
/// assert!(Program::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    /// No schedule: the same target temperature all day and all week.
    #[default]
    Constant,
    /// First programmable schedule.
    Program1,
    /// Second programmable schedule.
    Program2,
    /// Third programmable schedule.
    Program3,
}

impl Program {
    /// Returns a human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Program1 => "program 1",
            Self::Program2 => "program 2",
            Self::Program3 => "program 3",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Program> for u8 {
    fn from(value: Program) -> Self {
        match value {
            Program::Constant => 0,
            Program::Program1 => 1,
            Program::Program2 => 2,
            Program::Program3 => 3,
        }
    }
}

impl TryFrom<u8> for Program {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Constant),
            1 => Ok(Self::Program1),
            2 => Ok(Self::Program2),
            3 => Ok(Self::Program3),
            other => Err(ValueError::InvalidProgram(other)),
        }
    }
}

/// Operating mode of a thermostat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Normal operation.
    #[default]
    Day,
    /// Night setback.
    Night,
    /// Holiday, i.e. frost protection only.
    Holiday,
}

impl Mode {
    /// Returns a human-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
            Self::Holiday => "holiday",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Mode> for u8 {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Day => 0,
            Mode::Night => 1,
            Mode::Holiday => 2,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Day),
            1 => Ok(Self::Night),
            2 => Ok(Self::Holiday),
            other => Err(ValueError::InvalidMode(other)),
        }
    }
}
