// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of full sensor reads.

use crate::error::{DecodeError, FieldError, ParseError};
use crate::protocol::{IndexedName, SensorField, WireItem, decode_response};
use crate::types::{Sensor, SensorId, Temperature};
use crate::units;

/// Builds the sensor set for `expected_count` sensors from response items.
///
/// The result always holds exactly `expected_count` records, ordered by id.
/// Items that cannot be applied (non-indexed names, indices outside
/// `0..expected_count`, unknown fields, unparsable values) are logged and
/// skipped; the remaining items are still applied. Fields that received no
/// valid item keep their zero value.
///
/// # Examples
///
/// ```
/// use touchline_lib::protocol::WireItem;
/// use touchline_lib::response::parse_sensors;
/// use touchline_lib::types::ValveState;
///
/// let items = [
///     WireItem::new("G0.RaumTemp", "2086"),
///     WireItem::new("G0.SollTemp", "2100"),
///     WireItem::new("G0.name", "Kitchen"),
/// ];
/// let sensors = parse_sensors(&items, 1);
/// assert_eq!(sensors[0].name, "Kitchen");
/// assert_eq!(sensors[0].room_temperature.celsius(), 20.86);
/// assert_eq!(sensors[0].valve_state(), ValveState::Open);
/// ```
#[must_use]
pub fn parse_sensors(items: &[WireItem], expected_count: usize) -> Vec<Sensor> {
    let mut sensors: Vec<Sensor> = (0..expected_count)
        .map(|index| Sensor::new(SensorId::new(index)))
        .collect();

    for item in items {
        if let Err(error) = apply_item(&mut sensors, item) {
            tracing::warn!(
                name = %item.name,
                value = %item.value,
                %error,
                "Skipping sensor item"
            );
        }
    }

    sensors
}

/// Applies one response item to the matching sensor record.
///
/// `sensors` must hold one record per id, at the position equal to its id;
/// its length is the expected sensor count.
///
/// # Errors
///
/// Returns the reason the item was not applied. The sensor set is left
/// unchanged in that case.
pub fn apply_item(sensors: &mut [Sensor], item: &WireItem) -> Result<(), FieldError> {
    let indexed = IndexedName::parse(&item.name)?;
    let id = SensorId::checked(indexed.index, sensors.len())?;
    let field: SensorField = indexed.field.parse()?;

    let invalid = |source: ParseError| FieldError::InvalidValue {
        field: field.wire_name(),
        source,
    };

    let Some(sensor) = sensors.get_mut(id.value()) else {
        return Err(FieldError::IndexOutOfRange {
            index: id.value(),
            count: sensors.len(),
        });
    };

    match field {
        SensorField::RoomTemperature => {
            sensor.room_temperature = Temperature::from_wire(&item.value).map_err(invalid)?;
        }
        SensorField::TargetTemperature => {
            sensor.target_temperature = Temperature::from_wire(&item.value).map_err(invalid)?;
        }
        SensorField::Name => sensor.name.clone_from(&item.value),
        SensorField::Program => {
            sensor.program = units::wire_to_enum(&item.value).map_err(invalid)?;
        }
        SensorField::Mode => {
            sensor.mode = units::wire_to_enum(&item.value).map_err(invalid)?;
        }
    }
    sensor.id = id;

    Ok(())
}

/// Decodes a full-read response body into `expected_count` sensors.
///
/// # Errors
///
/// Returns `DecodeError` if the body is not a valid envelope. Per-item
/// problems are not errors; see [`parse_sensors`].
pub fn decode_sensors(body: &str, expected_count: usize) -> Result<Vec<Sensor>, DecodeError> {
    let items = decode_response(body)?;
    Ok(parse_sensors(&items, expected_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mode, Program, ValveState};

    fn item(name: &str, value: &str) -> WireItem {
        WireItem::new(name, value)
    }

    fn celsius(value: f64) -> Temperature {
        Temperature::new(value).unwrap()
    }

    #[test]
    fn kitchen_scenario() {
        let items = [
            item("G0.RaumTemp", "2086"),
            item("G0.SollTemp", "2100"),
            item("G0.name", "Kitchen"),
        ];
        let sensors = parse_sensors(&items, 1);

        assert_eq!(sensors.len(), 1);
        let kitchen = &sensors[0];
        assert_eq!(kitchen.id, SensorId::new(0));
        assert_eq!(kitchen.room_temperature, celsius(20.86));
        assert_eq!(kitchen.target_temperature, celsius(21.0));
        assert_eq!(kitchen.name, "Kitchen");
        assert_eq!(kitchen.valve_state(), ValveState::Open);
    }

    #[test]
    fn all_fields_of_two_sensors() {
        let items = [
            item("G0.RaumTemp", "2086"),
            item("G0.SollTemp", "2100"),
            item("G0.name", "Kitchen"),
            item("G0.WeekProg", "1"),
            item("G0.OPmode", "0"),
            item("G1.RaumTemp", "1903"),
            item("G1.SollTemp", "1800"),
            item("G1.name", "Bedroom"),
            item("G1.WeekProg", "3"),
            item("G1.OPmode", "2"),
        ];
        let sensors = parse_sensors(&items, 2);

        assert_eq!(sensors[1].id, SensorId::new(1));
        assert_eq!(sensors[1].name, "Bedroom");
        assert_eq!(sensors[1].room_temperature, celsius(19.03));
        assert_eq!(sensors[1].target_temperature, celsius(18.0));
        assert_eq!(sensors[1].program, Program::Program3);
        assert_eq!(sensors[1].mode, Mode::Holiday);
        assert_eq!(sensors[0].program, Program::Program1);
    }

    #[test]
    fn item_order_does_not_matter() {
        let items = [
            item("G1.name", "Bath"),
            item("G0.SollTemp", "2200"),
            item("G1.RaumTemp", "2300"),
        ];
        let mut reversed = items.clone();
        reversed.reverse();
        assert_eq!(parse_sensors(&items, 2), parse_sensors(&reversed, 2));
    }

    #[test]
    fn index_equal_to_count_is_skipped() {
        let mut sensors = vec![Sensor::new(SensorId::new(0))];
        let result = apply_item(&mut sensors, &item("G1.RaumTemp", "2000"));
        assert_eq!(
            result,
            Err(FieldError::IndexOutOfRange { index: 1, count: 1 })
        );
        assert_eq!(sensors, vec![Sensor::new(SensorId::new(0))]);
    }

    #[test]
    fn out_of_range_does_not_affect_others() {
        let items = [item("G2.RaumTemp", "2000"), item("G0.RaumTemp", "1950")];
        let sensors = parse_sensors(&items, 2);
        assert_eq!(sensors.len(), 2);
        assert_eq!(sensors[0].room_temperature, celsius(19.5));
        assert_eq!(sensors[1].room_temperature, Temperature::ZERO);
    }

    #[test]
    fn unknown_field_is_ignored() {
        let items = [
            item("G0.Foo", "1"),
            item("G0.RaumTemp", "2086"),
            item("G0.name", "Kitchen"),
        ];
        let sensors = parse_sensors(&items, 1);
        assert_eq!(sensors[0].room_temperature, celsius(20.86));
        assert_eq!(sensors[0].name, "Kitchen");

        let mut scratch = vec![Sensor::default()];
        assert_eq!(
            apply_item(&mut scratch, &item("G0.Foo", "1")),
            Err(FieldError::UnknownField("Foo".to_string()))
        );
    }

    #[test]
    fn malformed_index_is_skipped() {
        let items = [item("Gxx.RaumTemp", "9999"), item("G0.SollTemp", "2100")];
        let sensors = parse_sensors(&items, 1);
        assert_eq!(sensors[0].room_temperature, Temperature::ZERO);
        assert_eq!(sensors[0].target_temperature, celsius(21.0));
    }

    #[test]
    fn global_items_are_skipped() {
        let items = [item("totalNumberOfDevices", "3"), item("G0.name", "Hall")];
        let sensors = parse_sensors(&items, 1);
        assert_eq!(sensors[0].name, "Hall");
    }

    #[test]
    fn invalid_value_is_skipped_not_zeroed() {
        let mut sensors = vec![Sensor::new(SensorId::new(0))];
        apply_item(&mut sensors, &item("G0.SollTemp", "2100")).unwrap();

        let result = apply_item(&mut sensors, &item("G0.SollTemp", "n/a"));
        assert!(matches!(
            result,
            Err(FieldError::InvalidValue {
                field: "SollTemp",
                source: ParseError::InvalidInteger { .. }
            })
        ));
        assert_eq!(sensors[0].target_temperature, celsius(21.0));
    }

    #[test]
    fn unknown_mode_is_skipped() {
        let mut sensors = vec![Sensor::default()];
        let result = apply_item(&mut sensors, &item("G0.OPmode", "5"));
        assert!(matches!(
            result,
            Err(FieldError::InvalidValue {
                field: "OPmode",
                source: ParseError::InvalidEnum(_)
            })
        ));
        assert_eq!(sensors[0].mode, Mode::Day);
    }

    #[test]
    fn empty_name_is_kept() {
        let sensors = parse_sensors(&[item("G0.name", "")], 1);
        assert_eq!(sensors[0].name, "");
    }

    #[test]
    fn untouched_sensors_keep_their_id() {
        let sensors = parse_sensors(&[item("G0.name", "Hall")], 3);
        let ids: Vec<usize> = sensors.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn zero_expected_sensors() {
        let sensors = parse_sensors(&[item("G0.name", "Hall")], 0);
        assert!(sensors.is_empty());
    }

    #[test]
    fn decode_is_idempotent() {
        let body = "<body><item_list>\
            <i><n>G0.RaumTemp</n><v>2086</v></i>\
            <i><n>G0.name</n><v>Kitchen</v></i>\
            <i><n>G5.name</n><v>Ghost</v></i>\
            </item_list></body>";
        let first = decode_sensors(body, 1).unwrap();
        let second = decode_sensors(body, 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].name, "Kitchen");
    }

    #[test]
    fn decode_keeps_padded_name() {
        let body = "<body><item_list>\
            <i><n>G0.name</n><v>  Living Room  </v></i>\
            <i><n>G0.RaumTemp</n><v> 2086 </v></i>\
            </item_list></body>";
        let sensors = decode_sensors(body, 1).unwrap();
        assert_eq!(sensors[0].name, "  Living Room  ");
        assert_eq!(sensors[0].room_temperature, celsius(20.86));
    }

    #[test]
    fn decode_rejects_broken_envelope() {
        assert!(decode_sensors("not xml at all <", 1).is_err());
    }
}
