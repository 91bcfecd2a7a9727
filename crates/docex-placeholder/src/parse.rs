//! Strict parsing of a matched pseudo-tag.
//!
//! The coarse regex scan only guarantees that a substring looks like
//! `<Placeholder .../>`. This module parses that substring alone with a
//! lenient markup reader and enforces element-level strictness on top:
//! exactly one self-closing element, named `Placeholder`, with
//! well-formed attribute names. Anything else is a fatal
//! [`PlaceholderError::InvalidElement`].

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::PlaceholderError;

/// Tag name recognized by the substitution engine (case-sensitive).
const TAG_NAME: &[u8] = b"Placeholder";

/// Parse a matched pseudo-tag substring into its attribute mapping.
///
/// # Errors
///
/// Returns [`PlaceholderError::InvalidElement`] when the fragment does
/// not consist of exactly one self-closing `Placeholder` element, or
/// when its attributes cannot be parsed.
pub(crate) fn parse_placeholder_element(
    fragment: &str,
) -> Result<HashMap<String, String>, PlaceholderError> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().trim_text(false);

    let mut attrs = None;

    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) => {
                if attrs.is_some() || e.name().as_ref() != TAG_NAME {
                    return Err(PlaceholderError::InvalidElement);
                }
                attrs = Some(decode_attrs(&reader, &e)?);
            }
            Ok(Event::Eof) => break,
            // A second node, an unclosed start tag, stray text or any
            // reader error all invalidate the whole fragment.
            Ok(_) | Err(_) => return Err(PlaceholderError::InvalidElement),
        }
    }

    attrs.ok_or(PlaceholderError::InvalidElement)
}

/// Decode the attributes of the matched element into owned strings.
///
/// Uses the lenient HTML attribute iterator so that bare (valueless)
/// attributes are tolerated, but rejects attribute names that are not
/// plain identifiers. That catches garbage like a nested `<` inside the
/// tag, which the lenient iterator would otherwise accept as part of an
/// attribute name.
fn decode_attrs(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<HashMap<String, String>, PlaceholderError> {
    let mut attrs = HashMap::new();

    for attr in e.html_attributes() {
        let attr = attr.map_err(|_| PlaceholderError::InvalidElement)?;

        let key = reader
            .decoder()
            .decode(attr.key.as_ref())
            .map_err(|_| PlaceholderError::InvalidElement)?
            .into_owned();
        if !is_valid_attr_name(&key) {
            return Err(PlaceholderError::InvalidElement);
        }

        let value = attr
            .unescape_value()
            .map_err(|_| PlaceholderError::InvalidElement)?
            .into_owned();

        attrs.insert(key, value);
    }

    Ok(attrs)
}

/// Check that an attribute name contains only identifier characters.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
