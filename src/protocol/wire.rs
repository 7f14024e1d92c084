// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! XML envelope used by the read endpoint.
//!
//! A request lists the item names to read:
//!
//! ```text
//! <body>
//!   <item_list>
//!     <i><n>G0.RaumTemp</n></i>
//!     <i><n>G1.RaumTemp</n></i>
//!   </item_list>
//! </body>
//! ```
//!
//! The response repeats each name together with its value:
//!
//! ```text
//! <body>
//!   <item_list>
//!     <i><n>G0.RaumTemp</n><v>2086</v></i>
//!     <i><n>G1.RaumTemp</n><v>1903</v></i>
//!   </item_list>
//! </body>
//! ```
//!
//! This module only moves names and values in and out of the envelope; it
//! has no knowledge of what the fields mean. Text inside `<n>` and `<v>` is
//! kept exactly as sent, surrounding whitespace included, and elements the
//! envelope does not define are skipped.

use quick_xml::Reader;
use quick_xml::errors::IllFormedError;
use quick_xml::events::Event;
use serde::Serialize;

use crate::error::{DecodeError, EncodeError};

/// A flat name/value pair as returned by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WireItem {
    /// Item name, e.g. `G0.RaumTemp` or `totalNumberOfDevices`.
    pub name: String,
    /// Raw scalar value.
    pub value: String,
}

impl WireItem {
    /// Creates a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename = "body")]
struct RequestEnvelope<'a> {
    item_list: RequestList<'a>,
}

#[derive(Serialize)]
struct RequestList<'a> {
    #[serde(rename = "i")]
    items: Vec<RequestItem<'a>>,
}

#[derive(Serialize)]
struct RequestItem<'a> {
    n: &'a str,
}

/// Serializes item names into a read request body.
///
/// Names are written in iteration order. The output depends only on
/// `names`.
///
/// # Errors
///
/// Returns `EncodeError` if the XML serializer fails.
///
/// # Examples
///
/// ```
/// use touchline_lib::protocol::encode_request;
///
/// let xml = encode_request(&["totalNumberOfDevices"]).unwrap();
/// assert_eq!(
///     xml,
///     "<body><item_list><i><n>totalNumberOfDevices</n></i></item_list></body>"
/// );
/// ```
pub fn encode_request<I, S>(names: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    let envelope = RequestEnvelope {
        item_list: RequestList {
            items: names.iter().map(|n| RequestItem { n: n.as_ref() }).collect(),
        },
    };
    Ok(quick_xml::se::to_string(&envelope)?)
}

/// Parses a read response body into name/value pairs.
///
/// Items keep the order in which the controller returned them. Items from
/// every `item_list` under the root element are collected.
///
/// # Errors
///
/// Returns `DecodeError::Xml` if the body is not well-formed, or
/// `DecodeError::MissingItemList` if there is no `item_list` element.
pub fn decode_response(body: &str) -> Result<Vec<WireItem>, DecodeError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(false);

    let mut items = Vec::new();
    let mut found_list = false;

    loop {
        match reader.read_event()? {
            Event::Start(root) => {
                loop {
                    match reader.read_event()? {
                        Event::Start(child) if child.local_name().as_ref() == b"item_list" => {
                            found_list = true;
                            read_list(&mut reader, &mut items)?;
                        }
                        Event::Empty(child) if child.local_name().as_ref() == b"item_list" => {
                            found_list = true;
                        }
                        Event::Start(child) => {
                            reader.read_to_end(child.name())?;
                        }
                        Event::End(_) => break,
                        Event::Eof => return Err(missing_end(root.name().as_ref()).into()),
                        _ => {}
                    }
                }
                break;
            }
            Event::Empty(_) | Event::Eof => break,
            _ => {}
        }
    }

    if found_list {
        Ok(items)
    } else {
        Err(DecodeError::MissingItemList)
    }
}

fn read_list(
    reader: &mut Reader<&[u8]>,
    items: &mut Vec<WireItem>,
) -> Result<(), quick_xml::Error> {
    loop {
        match reader.read_event()? {
            Event::Start(start) if start.local_name().as_ref() == b"i" => {
                items.push(read_item(reader)?);
            }
            Event::Empty(start) if start.local_name().as_ref() == b"i" => {
                items.push(WireItem::new("", ""));
            }
            Event::Start(start) => {
                reader.read_to_end(start.name())?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(missing_end(b"item_list")),
            _ => {}
        }
    }
}

fn read_item(reader: &mut Reader<&[u8]>) -> Result<WireItem, quick_xml::Error> {
    let mut item = WireItem::new("", "");
    loop {
        match reader.read_event()? {
            Event::Start(start) => match start.local_name().as_ref() {
                b"n" => item.name = read_text(reader, b"n")?,
                b"v" => item.value = read_text(reader, b"v")?,
                _ => {
                    reader.read_to_end(start.name())?;
                }
            },
            Event::Empty(start) => match start.local_name().as_ref() {
                b"n" => item.name.clear(),
                b"v" => item.value.clear(),
                _ => {}
            },
            Event::End(_) => return Ok(item),
            Event::Eof => return Err(missing_end(b"i")),
            _ => {}
        }
    }
}

/// Collects the character data directly inside an element, unescaped but
/// otherwise untouched. Nested elements are skipped.
fn read_text(reader: &mut Reader<&[u8]>, element: &[u8]) -> Result<String, quick_xml::Error> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(chunk) => text.push_str(&chunk.unescape()?),
            Event::CData(chunk) => text.push_str(&chunk.decode()?),
            Event::Start(start) => {
                reader.read_to_end(start.name())?;
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(missing_end(element)),
            _ => {}
        }
    }
}

fn missing_end(element: &[u8]) -> quick_xml::Error {
    IllFormedError::MissingEndTag(String::from_utf8_lossy(element).into_owned()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_multiple_names() {
        let xml = encode_request(&["G0.RaumTemp", "G1.RaumTemp"]).unwrap();
        assert_eq!(
            xml,
            "<body><item_list><i><n>G0.RaumTemp</n></i><i><n>G1.RaumTemp</n></i></item_list></body>"
        );
    }

    #[test]
    fn encode_is_deterministic() {
        let names = vec!["G0.name".to_string(), "G0.OPmode".to_string()];
        assert_eq!(
            encode_request(&names).unwrap(),
            encode_request(&names).unwrap()
        );
    }

    #[test]
    fn encode_escapes_markup() {
        let xml = encode_request(&["a<b"]).unwrap();
        assert!(xml.contains("a&lt;b"));
    }

    #[test]
    fn decode_pairs_in_order() {
        let body = r"
            <body>
                <item_list>
                    <i><n>G0.RaumTemp</n><v>2086</v></i>
                    <i><n>G1.RaumTemp</n><v>1903</v></i>
                </item_list>
            </body>";
        let items = decode_response(body).unwrap();
        assert_eq!(
            items,
            vec![
                WireItem::new("G0.RaumTemp", "2086"),
                WireItem::new("G1.RaumTemp", "1903"),
            ]
        );
    }

    #[test]
    fn decode_missing_value_is_empty() {
        let body = "<body><item_list><i><n>G0.name</n><v></v></i><i><n>G1.name</n></i></item_list></body>";
        let items = decode_response(body).unwrap();
        assert_eq!(items[0], WireItem::new("G0.name", ""));
        assert_eq!(items[1], WireItem::new("G1.name", ""));
    }

    #[test]
    fn decode_keeps_surrounding_whitespace() {
        let body = "<body><item_list>\
            <i><n>G0.name</n><v>  Living Room  </v></i>\
            <i><n>G1.name</n><v><![CDATA[ Attic ]]></v></i>\
            </item_list></body>";
        let items = decode_response(body).unwrap();
        assert_eq!(items[0], WireItem::new("G0.name", "  Living Room  "));
        assert_eq!(items[1], WireItem::new("G1.name", " Attic "));
    }

    #[test]
    fn decode_unescapes_entities() {
        let body = "<body><item_list><i><n>G0.name</n><v>Bed &amp; Bath</v></i></item_list></body>";
        let items = decode_response(body).unwrap();
        assert_eq!(items[0].value, "Bed & Bath");
    }

    #[test]
    fn decode_skips_unknown_elements() {
        let body = "<body>\
            <status>ok</status>\
            <item_list>\
            <i><n>G0.RaumTemp</n><v>2086</v></i>\
            <x/>\
            <extra><i><n>G9.name</n><v>nested</v></i></extra>\
            <i><n>G1.RaumTemp</n><unit>cC</unit><v>1903</v></i>\
            </item_list>\
            </body>";
        let items = decode_response(body).unwrap();
        assert_eq!(
            items,
            vec![
                WireItem::new("G0.RaumTemp", "2086"),
                WireItem::new("G1.RaumTemp", "1903"),
            ]
        );
    }

    #[test]
    fn decode_collects_every_item_list() {
        let body = "<body>\
            <item_list><i><n>G0.name</n><v>Hall</v></i></item_list>\
            <item_list><i><n>G1.name</n><v>Bath</v></i></item_list>\
            </body>";
        let items = decode_response(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], WireItem::new("G1.name", "Bath"));
    }

    #[test]
    fn decode_self_closing_list() {
        assert!(decode_response("<body><item_list/></body>").unwrap().is_empty());
    }

    #[test]
    fn decode_empty_list() {
        let items = decode_response("<body><item_list></item_list></body>").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn decode_missing_item_list() {
        let result = decode_response("<body><other/></body>");
        assert!(matches!(result, Err(DecodeError::MissingItemList)));
    }

    #[test]
    fn decode_malformed_xml() {
        let result = decode_response("<body><item_list><i><n>G0");
        assert!(matches!(result, Err(DecodeError::Xml(_))));

        let result = decode_response("<body><item_list><i><n>G0</v></i></item_list></body>");
        assert!(matches!(result, Err(DecodeError::Xml(_))));
    }

    #[test]
    fn decode_request_output_as_response() {
        let xml = encode_request(&["totalNumberOfDevices"]).unwrap();
        let items = decode_response(&xml).unwrap();
        assert_eq!(items, vec![WireItem::new("totalNumberOfDevices", "")]);
    }
}
