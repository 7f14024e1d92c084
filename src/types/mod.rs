// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain types for Touchline thermostats.
//!
//! # Types
//!
//! - [`Temperature`] - Finite temperature in degrees Celsius
//! - [`Program`] - Week program (constant, 1, 2, 3)
//! - [`Mode`] - Operating mode (day, night, holiday)
//! - [`SensorId`] - Controller-assigned sensor index
//! - [`Sensor`] - One thermostat zone as read from the controller
//! - [`ValveState`] - Derived, approximate valve state

mod schedule;
mod sensor;
mod temperature;

pub use schedule::{Mode, Program};
pub use sensor::{Sensor, SensorId, ValveState};
pub use temperature::Temperature;
