// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level access to one Touchline controller.
//!
//! [`Controller`] ties the codec to a [`Transport`]. It holds no state
//! besides the transport: every read builds a fresh sensor collection and
//! every write is a single fire-and-forget call. The protocol has no
//! versioning, so concurrent writers to the same controller race with
//! last-write-wins semantics; serialize access if that matters.
//!
//! ```no_run
//! use touchline_lib::Controller;
//! use touchline_lib::protocol::HttpConfig;
//! use touchline_lib::types::{SensorId, Temperature};
//!
//! # async fn example() -> touchline_lib::Result<()> {
//! let controller = Controller::http(HttpConfig::new("ROTH-10A6D5"))?;
//!
//! for sensor in controller.read_all().await? {
//!     println!("{}: {} (valve {})", sensor.name, sensor.room_temperature, sensor.valve_state());
//! }
//!
//! controller
//!     .set_target_temperature(SensorId::new(0), Temperature::new(21.5)?)
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::command::{Command, WriteCommand, build_count_request, build_full_read_request};
use crate::error::Result;
use crate::protocol::{Transport, encode_request};
use crate::response::{decode_count, decode_sensors};
use crate::types::{Mode, Program, Sensor, SensorId, Temperature};

#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};

/// A Touchline controller reachable through a transport.
#[derive(Debug, Clone)]
pub struct Controller<T: Transport> {
    transport: T,
}

#[cfg(feature = "http")]
impl Controller<HttpClient> {
    /// Creates a controller backed by HTTP.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self> {
        Ok(Self::new(config.into_client()?))
    }
}

impl<T: Transport> Controller<T> {
    /// Creates a controller on top of an existing transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Queries how many sensors the controller has.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the response cannot be decoded,
    /// or it contains no usable count.
    pub async fn sensor_count(&self) -> Result<usize> {
        let body = encode_request(&build_count_request())?;
        let response = self.transport.read_values(body).await?;
        let count = decode_count(&response)?;

        tracing::debug!(count, "Read sensor count");

        Ok(count)
    }

    /// Reads all fields of `count` sensors.
    ///
    /// Items that cannot be applied are skipped; see
    /// [`parse_sensors`](crate::response::parse_sensors).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response envelope cannot
    /// be decoded.
    pub async fn sensors(&self, count: usize) -> Result<Vec<Sensor>> {
        let body = encode_request(&build_full_read_request(count))?;
        let response = self.transport.read_values(body).await?;
        Ok(decode_sensors(&response, count)?)
    }

    /// Queries the sensor count, then reads every sensor.
    ///
    /// # Errors
    ///
    /// Returns error if either read fails.
    pub async fn read_all(&self) -> Result<Vec<Sensor>> {
        let count = self.sensor_count().await?;
        self.sensors(count).await
    }

    /// Sends a write command.
    ///
    /// # Errors
    ///
    /// Returns error if the transport call fails.
    pub async fn send(&self, command: &WriteCommand) -> Result<()> {
        let query = command.to_query();

        tracing::debug!(query = %query, "Writing value");

        self.transport.write_value(&query).await?;
        Ok(())
    }

    /// Sets the target temperature of a sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the transport call fails.
    pub async fn set_target_temperature(
        &self,
        sensor: SensorId,
        temperature: Temperature,
    ) -> Result<()> {
        self.send(&WriteCommand::TargetTemperature {
            sensor,
            temperature,
        })
        .await
    }

    /// Selects the week program of a sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the transport call fails.
    pub async fn set_program(&self, sensor: SensorId, program: Program) -> Result<()> {
        self.send(&WriteCommand::Program { sensor, program }).await
    }

    /// Selects the operating mode of a sensor.
    ///
    /// # Errors
    ///
    /// Returns error if the transport call fails.
    pub async fn set_mode(&self, sensor: SensorId, mode: Mode) -> Result<()> {
        self.send(&WriteCommand::Mode { sensor, mode }).await
    }
}
