// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interpretation of read responses.
//!
//! The envelope decoder in [`protocol`](crate::protocol) yields flat
//! name/value pairs. This module turns them into typed values:
//!
//! - [`parse_count`] reads the global sensor count (fatal on failure)
//! - [`parse_sensors`] distributes `G<index>.<field>` items over sensor
//!   records (per-item failures are logged and skipped)

mod count;
mod sensors;

pub use count::{decode_count, parse_count};
pub use sensors::{apply_item, decode_sensors, parse_sensors};
