// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Touchline Lib - A Rust library to read and control Roth Touchline
//! floor-heating thermostats.
//!
//! The controller has no structured API. Every value is addressed by a flat
//! key such as `G0.RaumTemp` (room temperature of sensor 0) and returned as
//! a string; temperatures are integers in hundredths of a degree. This crate
//! translates between that wire format and typed [`Sensor`] records.
//!
//! # Layers
//!
//! - [`protocol`]: XML read envelope, field catalogue, [`Transport`] trait
//!   and the HTTP transport (feature `http`, enabled by default)
//! - [`command`]: read request lists and [`WriteCommand`]s
//! - [`response`]: count and sensor decoding
//! - [`units`]: fixed-point and enum conversions
//! - [`Controller`]: the two combined behind async methods
//!
//! # Quick Start
//!
//! ```no_run
//! use touchline_lib::{Controller, HttpConfig};
//! use touchline_lib::types::{Mode, SensorId, Temperature};
//!
//! #[tokio::main]
//! async fn main() -> touchline_lib::Result<()> {
//!     let controller = Controller::http(HttpConfig::new("ROTH-10A6D5"))?;
//!
//!     let sensors = controller.read_all().await?;
//!     for sensor in &sensors {
//!         println!("{} {} -> {}", sensor.id, sensor.room_temperature, sensor.target_temperature);
//!     }
//!
//!     controller.set_mode(SensorId::new(0), Mode::Night).await?;
//!     controller
//!         .set_target_temperature(SensorId::new(0), Temperature::new(19.0)?)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Codec Only
//!
//! The codec does not need the network and can be driven by any transport:
//!
//! ```
//! use touchline_lib::command::build_full_read_request;
//! use touchline_lib::protocol::encode_request;
//! use touchline_lib::response::decode_sensors;
//!
//! let request = encode_request(&build_full_read_request(1)).unwrap();
//! assert!(request.contains("<n>G0.SollTemp</n>"));
//!
//! let reply = "<body><item_list><i><n>G0.name</n><v>Hall</v></i></item_list></body>";
//! let sensors = decode_sensors(reply, 1).unwrap();
//! assert_eq!(sensors[0].name, "Hall");
//! ```

pub mod command;
mod controller;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;
pub mod units;

pub use command::{Command, WriteCommand, WriteField};
pub use controller::Controller;
pub use error::{
    DecodeError, EncodeError, Error, FieldError, ParseError, ProtocolError, Result,
    TransportError, ValueError,
};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{Transport, WireItem};
pub use types::{Mode, Program, Sensor, SensorId, Temperature, ValveState};
