// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire envelope and transport for talking to a Touchline controller.
//!
//! The controller exposes two CGI endpoints:
//!
//! - `POST /cgi-bin/ILRReadValues.cgi` with an XML body listing item names
//!   (see [`encode_request`] and [`decode_response`])
//! - `GET /cgi-bin/writeVal.cgi?G<id>.<field>=<value>` to write one value
//!
//! [`Transport`] abstracts the network call so the codec can be driven by
//! any client. [`HttpClient`] is the reqwest-backed implementation.

mod field;
#[cfg(feature = "http")]
mod http;
mod wire;

pub use field::{IndexedName, SensorField, TOTAL_DEVICES_FIELD};
#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};
pub use wire::{WireItem, decode_response, encode_request};

use crate::error::TransportError;

/// Path of the read endpoint.
pub const READ_PATH: &str = "/cgi-bin/ILRReadValues.cgi";

/// Path of the write endpoint.
pub const WRITE_PATH: &str = "/cgi-bin/writeVal.cgi";

/// A request/response channel to one controller.
///
/// Implementations own timeouts and retries. The codec never retries.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Posts an encoded read request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails or the controller
    /// answers with a non-success status.
    async fn read_values(&self, body: String) -> Result<String, TransportError>;

    /// Sends one write command, given as a `G<id>.<field>=<value>` query.
    ///
    /// No response body is interpreted; success means the call went through.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails.
    async fn write_value(&self, query: &str) -> Result<(), TransportError>;
}
