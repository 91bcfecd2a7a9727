//! Placeholder substitution over raw HTML text.
//!
//! Scans rendered page text for `<Placeholder .../>` pseudo-tags,
//! parses and resolves each match, and splices the rendered markup back
//! in place. Text outside the matches is copied through byte for byte.
//! Substitution is all or nothing: one malformed match fails the whole
//! document.

use std::sync::LazyLock;

use regex::Regex;

use crate::attrs::sanitize_attrs;
use crate::error::PlaceholderError;
use crate::options::{PlaceholderDefaults, UserOptions, resolve};
use crate::parse::parse_placeholder_element;
use crate::render::Placeholder;

/// Coarse scan for placeholder pseudo-tags. Case-sensitive, and
/// requires at least one attribute; a bare `<Placeholder/>` is left in
/// the text untouched. Strict validation of each candidate happens in
/// the parse step.
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Placeholder\s+[^>]+/>").unwrap());

/// Replace every placeholder pseudo-tag in `html` with its rendered
/// markup.
///
/// # Errors
///
/// Returns [`PlaceholderError::InvalidElement`] if any matched
/// pseudo-tag fails strict parsing. Nothing is substituted in that
/// case.
pub fn substitute(html: &str, defaults: &PlaceholderDefaults) -> Result<String, PlaceholderError> {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    let mut count = 0usize;

    for m in PLACEHOLDER_PATTERN.find_iter(html) {
        let attrs = parse_placeholder_element(m.as_str())?;
        let user = UserOptions::from_attrs(sanitize_attrs(attrs));
        let rendered = Placeholder::from_options(resolve(user, defaults)).to_html();

        out.push_str(&html[last..m.start()]);
        out.push_str(&rendered);
        last = m.end();
        count += 1;
    }

    if count == 0 {
        return Ok(html.to_owned());
    }

    out.push_str(&html[last..]);
    tracing::debug!(count, "substituted placeholders");
    Ok(out)
}
