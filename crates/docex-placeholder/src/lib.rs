//! Placeholder image substitution for documentation example HTML.
//!
//! Documentation examples embed raw HTML fragments that must stay
//! byte-exact: the same source is rendered on the page and exported to
//! an external code sandbox, so even whitespace and unclosed void
//! elements like `<img>` have to survive untouched. Such fragments are
//! not valid component markup, which rules out running them through a
//! templating compiler. Instead, this crate rewrites one specific
//! pseudo-tag, `<Placeholder .../>`, into literal `<svg>` or `<img>`
//! markup as a plain-text pre-processing step, leaving every other byte
//! of the fragment alone.
//!
//! The work happens in two phases:
//!
//! 1. a coarse regex scan finds candidate pseudo-tags in the raw text
//!    (the surrounding document is not parseable as structured markup);
//! 2. each matched substring alone is parsed strictly, its attributes
//!    are sanitized and resolved against injected defaults, and the
//!    resulting [`Placeholder`] variant is serialized back into the
//!    text.
//!
//! Entry point: [`substitute`]. Default colors come from the gray
//! palette in `docex-data`, wired in through [`PlaceholderDefaults`].
//!
//! ```
//! use docex_placeholder::{PlaceholderDefaults, substitute};
//!
//! let defaults = PlaceholderDefaults {
//!     background: "#868e96".to_owned(),
//!     color: "#dee2e6".to_owned(),
//! };
//!
//! let html = substitute(r#"<div><Placeholder width="64" height="64"/></div>"#, &defaults)?;
//! assert!(html.starts_with("<div><svg"));
//! # Ok::<(), docex_placeholder::PlaceholderError>(())
//! ```

mod attrs;
mod data_uri;
mod error;
mod options;
mod parse;
mod render;
mod substitute;

pub use attrs::{AttrValue, sanitize_attrs};
pub use data_uri::placeholder_src;
pub use error::PlaceholderError;
pub use options::{
    BASE_CLASS, Markup, PlaceholderDefaults, ResolvedOptions, Toggle, UserOptions, resolve,
};
pub use render::{ImgProps, Placeholder, SvgProps};
pub use substitute::substitute;
