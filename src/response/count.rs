// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of the sensor count query.

use crate::error::{Error, ProtocolError};
use crate::protocol::{TOTAL_DEVICES_FIELD, WireItem, decode_response};

/// Extracts the sensor count from a count-query response.
///
/// The controller answers with a single item; its value is used. Unlike
/// sensor items, failures here are fatal: without a count nothing else can
/// be decoded.
///
/// # Errors
///
/// Returns `ProtocolError::NoValues` if `items` is empty, or
/// `ProtocolError::UnexpectedValue` if the value is not a non-negative
/// integer.
///
/// # Examples
///
/// ```
/// use touchline_lib::protocol::WireItem;
/// use touchline_lib::response::parse_count;
///
/// let items = [WireItem::new("totalNumberOfDevices", "4")];
/// assert_eq!(parse_count(&items).unwrap(), 4);
/// assert!(parse_count(&[]).is_err());
/// ```
pub fn parse_count(items: &[WireItem]) -> Result<usize, ProtocolError> {
    let first = items.first().ok_or(ProtocolError::NoValues)?;

    if first.name != TOTAL_DEVICES_FIELD {
        tracing::debug!(name = %first.name, "Count response carries an unexpected item name");
    }

    first
        .value
        .trim()
        .parse::<usize>()
        .map_err(|_| ProtocolError::UnexpectedValue {
            name: first.name.clone(),
            value: first.value.clone(),
        })
}

/// Decodes a count-query response body.
///
/// # Errors
///
/// Returns `Error::Decode` for a broken envelope and `Error::Protocol` if
/// the envelope holds no usable count.
pub fn decode_count(body: &str) -> Result<usize, Error> {
    let items = decode_response(body)?;
    Ok(parse_count(&items)?)
}
