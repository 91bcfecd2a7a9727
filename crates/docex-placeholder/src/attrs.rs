//! Attribute sanitization.
//!
//! When a placeholder is written in component markup, boolean attribute
//! expressions reach the text layer as the literal strings `"{true}"`
//! and `"{false}"`. This module converts that closed set of sentinel
//! strings into real booleans in one dedicated pass, before any domain
//! logic sees the attributes.

use std::collections::HashMap;

use crate::options::{Markup, Toggle, UserOptions};

/// A sanitized attribute value: either a real boolean recovered from a
/// sentinel string, or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Recovered from a `"{true}"` / `"{false}"` sentinel.
    Bool(bool),
    /// Any other attribute text, passed through unchanged.
    Text(String),
}

impl AttrValue {
    /// The value as text, coercing booleans to `"true"` / `"false"`.
    fn into_text(self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }

    /// The value as a [`Toggle`]: boolean `false` switches the option
    /// off, everything else is text (boolean `true` shows as the
    /// literal text `true`).
    fn into_toggle(self) -> Toggle {
        match self {
            Self::Bool(false) => Toggle::Off,
            other => Toggle::Value(other.into_text()),
        }
    }
}

/// Convert sentinel boolean strings into real booleans.
///
/// Every other value passes through unchanged; parsed attributes always
/// carry a value (a bare attribute surfaces as empty text), so there is
/// nothing to drop here.
#[must_use]
pub fn sanitize_attrs(attrs: HashMap<String, String>) -> HashMap<String, AttrValue> {
    attrs
        .into_iter()
        .map(|(key, value)| {
            let value = if value == "{false}" {
                AttrValue::Bool(false)
            } else if value == "{true}" {
                AttrValue::Bool(true)
            } else {
                AttrValue::Text(value)
            };
            (key, value)
        })
        .collect()
}

impl UserOptions {
    /// Build partial options from a sanitized attribute mapping.
    ///
    /// Unknown attribute names are ignored.
    #[must_use]
    pub fn from_attrs(attrs: HashMap<String, AttrValue>) -> Self {
        let mut user = Self::default();

        for (key, value) in attrs {
            match key.as_str() {
                "background" => user.background = Some(value.into_text()),
                "class" => user.class = Some(value.into_text()),
                "color" => user.color = Some(value.into_text()),
                "height" => user.height = Some(value.into_text()),
                "markup" => user.markup = Some(Markup::parse(&value.into_text())),
                "text" => user.text = Some(value.into_toggle()),
                "title" => user.title = Some(value.into_toggle()),
                "width" => user.width = Some(value.into_text()),
                _ => {}
            }
        }

        user
    }
}
