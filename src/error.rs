// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Touchline library.
//!
//! Failures fall into two groups:
//!
//! - **Fatal** errors abort the whole operation and are reported through
//!   [`Error`]: the transport call failed, the response envelope could not be
//!   decoded, or the controller answered with something semantically empty.
//! - **Per-item** errors ([`FieldError`]) describe a single wire item that
//!   could not be applied to a sensor. The decoder logs and skips these so
//!   that one corrupt field never blanks the rest of the sensor set.

use std::num::ParseIntError;

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying transport call failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The read request could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// The response body is not a well-formed wire envelope.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The envelope was well-formed but its content is unusable.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A domain value was rejected.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors raised by the external transport (HTTP).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The controller answered with a non-success status code.
    #[error("unexpected HTTP status {code}: {reason}")]
    Status {
        /// Numeric status code.
        code: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Error raised while serializing a read request envelope.
#[derive(Debug, Error)]
#[error("failed to serialize request: {0}")]
pub struct EncodeError(#[from] pub quick_xml::SeError);

/// Errors raised while decoding a response envelope.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not well-formed XML.
    #[error("malformed response XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The envelope has no `item_list` element.
    #[error("response has no item_list element")]
    MissingItemList,
}

/// Errors for well-formed responses whose content is unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The controller returned an empty item list.
    #[error("no values returned")]
    NoValues,

    /// A value required to continue could not be interpreted.
    #[error("unexpected value {value:?} for {name}")]
    UnexpectedValue {
        /// Wire name of the item.
        name: String,
        /// Raw wire value.
        value: String,
    },
}

/// Errors converting a single wire scalar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The value is not a decimal integer.
    #[error("invalid integer {value:?}: {source}")]
    InvalidInteger {
        /// The raw wire value.
        value: String,
        /// Underlying parse failure.
        source: ParseIntError,
    },

    /// The integer does not map to a known enum variant.
    #[error("invalid enum value: {0}")]
    InvalidEnum(#[from] ValueError),
}

/// Errors raised by domain value constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Temperature is NaN or infinite.
    #[error("temperature must be a finite number")]
    NonFiniteTemperature,

    /// Unknown week program number.
    #[error("invalid week program {0}, expected 0-3")]
    InvalidProgram(u8),

    /// Unknown operating mode number.
    #[error("invalid operating mode {0}, expected 0-2")]
    InvalidMode(u8),
}

/// Per-item failures while decoding sensor values.
///
/// These never abort a read; the offending item is skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name does not follow the `G<index>.<field>` pattern.
    #[error("{0:?} is not an indexed field name")]
    NotIndexed(String),

    /// The index part is not a decimal number.
    #[error("invalid sensor index {0:?}")]
    InvalidIndex(String),

    /// The index is not below the expected sensor count.
    #[error("sensor index {index} is out of range [0, {count})")]
    IndexOutOfRange {
        /// Parsed index.
        index: usize,
        /// Expected sensor count.
        count: usize,
    },

    /// The field identifier is not part of the catalogue.
    #[error("unrecognized field {0:?}")]
    UnknownField(String),

    /// The value could not be converted for its field.
    #[error("invalid value for {field}: {source}")]
    InvalidValue {
        /// Wire field identifier.
        field: &'static str,
        /// Underlying conversion failure.
        source: ParseError,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
