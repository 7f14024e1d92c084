// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Item name lists for read requests.

use crate::protocol::{SensorField, TOTAL_DEVICES_FIELD};

/// Lists every item needed to describe `sensor_count` sensors.
///
/// For each index the five fields are emitted in the fixed order
/// `RaumTemp`, `SollTemp`, `name`, `WeekProg`, `OPmode`.
///
/// # Examples
///
/// ```
/// use touchline_lib::command::build_full_read_request;
///
/// let names = build_full_read_request(1);
/// assert_eq!(
///     names,
///     ["G0.RaumTemp", "G0.SollTemp", "G0.name", "G0.WeekProg", "G0.OPmode"]
/// );
/// ```
#[must_use]
pub fn build_full_read_request(sensor_count: usize) -> Vec<String> {
    (0..sensor_count)
        .flat_map(|index| SensorField::ALL.map(|field| field.item_name(index)))
        .collect()
}

/// Lists the single global item that reports the sensor count.
#[must_use]
pub fn build_count_request() -> Vec<String> {
    vec![TOTAL_DEVICES_FIELD.to_string()]
}
