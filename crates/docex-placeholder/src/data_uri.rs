//! Inline SVG data URI for the image variant.
//!
//! The image variant folds the whole placeholder drawing into its `src`
//! attribute as a `data:image/svg+xml,` URI. The template is fixed (a
//! styled 200x200 canvas) and its structural characters are
//! percent-encoded through one static encode set; interpolated title,
//! text and color values are spliced in verbatim. The output is part of
//! the byte-exact contract, so the template must not be reformatted.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::options::ResolvedOptions;

/// Structural characters encoded in the SVG template: spaces, quotes,
/// angle brackets, plus `%` and `#` which would otherwise corrupt the
/// URI.
const SRC_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>');

/// Fixed SVG opening tag: inline font styling and a 200x200 canvas.
const SVG_PREAMBLE: &str = "<svg style='font-size: 1.125rem; \
    font-family:system-ui,-apple-system,\"Segoe UI\",Roboto,\"Helvetica Neue\",\
    \"Noto Sans\",\"Liberation Sans\",Arial,sans-serif,\"Apple Color Emoji\",\
    \"Segoe UI Emoji\",\"Segoe UI Symbol\",\"Noto Color Emoji\"; \
    -webkit-user-select: none; -moz-user-select: none; user-select: none; \
    text-anchor: middle;' width='200' height='200' \
    xmlns='http://www.w3.org/2000/svg'>";

/// Build the `data:` URI used as the image variant's `src`.
///
/// The `<title>` and `<text>` elements follow the same visibility rules
/// as the inline SVG variant. Leading `#` characters are stripped from
/// the hex colors; the template's `%23` prefix re-encodes them.
#[must_use]
pub fn placeholder_src(show_title: bool, show_text: bool, options: &ResolvedOptions) -> String {
    let background = options
        .background
        .strip_prefix('#')
        .unwrap_or(&options.background);
    let color = options.color.strip_prefix('#').unwrap_or(&options.color);

    let mut src = String::from("data:image/svg+xml,");
    push_encoded(&mut src, SVG_PREAMBLE);

    if show_title && let Some(title) = options.title.as_str() {
        push_encoded(&mut src, "<title>");
        src.push_str(title);
        push_encoded(&mut src, "</title>");
    }

    push_encoded(&mut src, "<rect width='100%' height='100%' fill='#");
    src.push_str(background);
    src.push('\'');
    push_encoded(&mut src, "></rect>");

    if show_text && let Some(text) = options.text.as_str() {
        push_encoded(&mut src, "<text x='50%' y='50%' fill='#");
        src.push_str(color);
        push_encoded(&mut src, "' dy='.3em'>");
        src.push_str(text);
        push_encoded(&mut src, "</text>");
    }

    push_encoded(&mut src, "</svg>");

    src
}

/// Percent-encode a template segment into the output buffer.
fn push_encoded(out: &mut String, segment: &str) {
    for part in utf8_percent_encode(segment, SRC_ENCODE_SET) {
        out.push_str(part);
    }
}
