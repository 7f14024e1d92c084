// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read requests and write commands for Touchline controllers.
//!
//! # Reads
//!
//! [`build_full_read_request`] and [`build_count_request`] produce the item
//! names to pass to [`encode_request`](crate::protocol::encode_request).
//!
//! # Writes
//!
//! | Command | Wire field | Value |
//! |---------|-----------|-------|
//! | [`WriteCommand::TargetTemperature`] | `SollTemp` | degrees × 100, truncated |
//! | [`WriteCommand::Program`] | `WeekProg` | 0-3 |
//! | [`WriteCommand::Mode`] | `OPMode` | 0-2 |
//!
//! The mode is written as `OPMode` but read back as `OPmode`. The controller
//! firmware expects exactly these spellings.
//!
//! # Examples
//!
//! ```
//! use touchline_lib::command::{Command, WriteCommand};
//! use touchline_lib::types::{Mode, SensorId, Temperature};
//!
//! let cmd = WriteCommand::TargetTemperature {
//!     sensor: SensorId::new(0),
//!     temperature: Temperature::new(21.5).unwrap(),
//! };
//! assert_eq!(cmd.name(), "G0.SollTemp");
//! assert_eq!(cmd.value(), "2150");
//! assert_eq!(cmd.to_query(), "G0.SollTemp=2150");
//!
//! let cmd = WriteCommand::Mode { sensor: SensorId::new(2), mode: Mode::Night };
//! assert_eq!(cmd.to_query(), "G2.OPMode=1");
//! ```

mod read;

pub use read::{build_count_request, build_full_read_request};

use std::fmt;

use crate::types::{Mode, Program, SensorId, Temperature};
use crate::units;

/// A value that can be written to the controller.
pub trait Command {
    /// Returns the full item name, e.g. `G0.SollTemp`.
    fn name(&self) -> String;

    /// Returns the wire value.
    fn value(&self) -> String;

    /// Returns the `name=value` query for the write endpoint.
    fn to_query(&self) -> String {
        format!(
            "{}={}",
            urlencoding::encode(&self.name()),
            urlencoding::encode(&self.value())
        )
    }
}

/// Writable per-sensor fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteField {
    /// `SollTemp`: target temperature.
    TargetTemperature,
    /// `WeekProg`: week program.
    Program,
    /// `OPMode`: operating mode.
    Mode,
}

impl WriteField {
    /// Returns the identifier used by the write endpoint.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::TargetTemperature => "SollTemp",
            Self::Program => "WeekProg",
            Self::Mode => "OPMode",
        }
    }
}

impl fmt::Display for WriteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A single write to one sensor.
///
/// Writes are fire-and-forget and idempotent: sending the same command
/// twice leaves the controller in the same state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WriteCommand {
    /// Set the target temperature.
    TargetTemperature {
        /// Sensor to address.
        sensor: SensorId,
        /// New target.
        temperature: Temperature,
    },
    /// Select the week program.
    Program {
        /// Sensor to address.
        sensor: SensorId,
        /// New program.
        program: Program,
    },
    /// Select the operating mode.
    Mode {
        /// Sensor to address.
        sensor: SensorId,
        /// New mode.
        mode: Mode,
    },
}

impl WriteCommand {
    /// Returns the addressed sensor.
    #[must_use]
    pub const fn sensor(&self) -> SensorId {
        match self {
            Self::TargetTemperature { sensor, .. }
            | Self::Program { sensor, .. }
            | Self::Mode { sensor, .. } => *sensor,
        }
    }

    /// Returns the written field.
    #[must_use]
    pub const fn field(&self) -> WriteField {
        match self {
            Self::TargetTemperature { .. } => WriteField::TargetTemperature,
            Self::Program { .. } => WriteField::Program,
            Self::Mode { .. } => WriteField::Mode,
        }
    }
}

impl Command for WriteCommand {
    fn name(&self) -> String {
        format!("G{}.{}", self.sensor(), self.field().wire_name())
    }

    fn value(&self) -> String {
        match self {
            Self::TargetTemperature { temperature, .. } => temperature.to_wire(),
            Self::Program { program, .. } => units::enum_to_wire(*program),
            Self::Mode { mode, .. } => units::enum_to_wire(*mode),
        }
    }
}
