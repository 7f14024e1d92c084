// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Catalogue of per-sensor wire fields and the `G<index>.<field>` naming
//! scheme.

use std::fmt;
use std::str::FromStr;

use crate::error::FieldError;

/// Global item holding the number of sensors attached to the controller.
pub const TOTAL_DEVICES_FIELD: &str = "totalNumberOfDevices";

/// Readable per-sensor fields.
///
/// The set is closed: any other identifier is unrecognized.
///
/// # Examples
///
/// ```
/// use touchline_lib::protocol::SensorField;
///
/// assert_eq!(SensorField::RoomTemperature.wire_name(), "RaumTemp");
/// assert_eq!("OPmode".parse::<SensorField>().unwrap(), SensorField::Mode);
/// assert!("OPMode".parse::<SensorField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorField {
    /// `RaumTemp`: room temperature, scaled integer.
    RoomTemperature,
    /// `SollTemp`: target temperature, scaled integer.
    TargetTemperature,
    /// `name`: display name.
    Name,
    /// `WeekProg`: week program number.
    Program,
    /// `OPmode`: operating mode number.
    Mode,
}

impl SensorField {
    /// All fields in request order.
    pub const ALL: [Self; 5] = [
        Self::RoomTemperature,
        Self::TargetTemperature,
        Self::Name,
        Self::Program,
        Self::Mode,
    ];

    /// Returns the identifier used in read requests and responses.
    #[must_use]
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::RoomTemperature => "RaumTemp",
            Self::TargetTemperature => "SollTemp",
            Self::Name => "name",
            Self::Program => "WeekProg",
            Self::Mode => "OPmode",
        }
    }

    /// Returns the full item name for a sensor, e.g. `G3.SollTemp`.
    #[must_use]
    pub fn item_name(&self, index: usize) -> String {
        format!("G{index}.{}", self.wire_name())
    }
}

impl fmt::Display for SensorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for SensorField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// A wire name split into its sensor index and field identifier.
///
/// Matches `G` followed by one or more decimal digits, a dot, and a
/// non-empty field identifier. The field is not checked against the
/// catalogue here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedName<'a> {
    /// Sensor index.
    pub index: usize,
    /// Raw field identifier.
    pub field: &'a str,
}

impl<'a> IndexedName<'a> {
    /// Splits a wire name.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::NotIndexed` if the name does not have the
    /// `G<digits>.<field>` shape, or `FieldError::InvalidIndex` if the digits
    /// do not fit a `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use touchline_lib::protocol::IndexedName;
    ///
    /// let parsed = IndexedName::parse("G12.RaumTemp").unwrap();
    /// assert_eq!(parsed.index, 12);
    /// assert_eq!(parsed.field, "RaumTemp");
    ///
    /// assert!(IndexedName::parse("totalNumberOfDevices").is_err());
    /// assert!(IndexedName::parse("Gxx.RaumTemp").is_err());
    /// ```
    pub fn parse(name: &'a str) -> Result<Self, FieldError> {
        let not_indexed = || FieldError::NotIndexed(name.to_string());

        let rest = name.strip_prefix('G').ok_or_else(not_indexed)?;
        let (digits, field) = rest.split_once('.').ok_or_else(not_indexed)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || field.is_empty() {
            return Err(not_indexed());
        }

        let index = digits
            .parse::<usize>()
            .map_err(|_| FieldError::InvalidIndex(digits.to_string()))?;

        Ok(Self { index, field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in SensorField::ALL {
            assert_eq!(field.wire_name().parse::<SensorField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field() {
        assert_eq!(
            "Foo".parse::<SensorField>(),
            Err(FieldError::UnknownField("Foo".to_string()))
        );
    }

    #[test]
    fn item_name() {
        assert_eq!(SensorField::Name.item_name(7), "G7.name");
    }

    #[test]
    fn parse_indexed_name() {
        let parsed = IndexedName::parse("G0.OPmode").unwrap();
        assert_eq!(parsed, IndexedName { index: 0, field: "OPmode" });
    }

    #[test]
    fn field_may_contain_dots() {
        let parsed = IndexedName::parse("G1.a.b").unwrap();
        assert_eq!(parsed.field, "a.b");
    }

    #[test]
    fn rejects_non_indexed_names() {
        for name in ["", "G", "G.", "G0", "G0.", "G.RaumTemp", "Gxx.RaumTemp", "H0.RaumTemp", "g0.name", "G-1.name", "G+1.name"] {
            assert_eq!(
                IndexedName::parse(name),
                Err(FieldError::NotIndexed(name.to_string())),
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_oversized_index() {
        let name = "G99999999999999999999999.RaumTemp";
        assert!(matches!(
            IndexedName::parse(name),
            Err(FieldError::InvalidIndex(_))
        ));
    }
}
