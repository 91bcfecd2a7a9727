//! Placeholder variant construction and serialization.
//!
//! A resolved option set becomes one of two renderable variants,
//! selected by the `markup` option, and is serialized straight back to
//! text. Property order and child-tag order are fixed: consumers diff
//! and snapshot the exact output, and the same bytes are shipped to the
//! code sandbox export.

use std::fmt::Write;

use crate::data_uri::placeholder_src;
use crate::options::{BASE_CLASS, Markup, ResolvedOptions, Toggle};

/// A renderable placeholder, constructed per pseudo-tag match and
/// consumed immediately by [`Placeholder::to_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// A self-closed `<img>` whose `src` is an inline SVG data URI.
    Img {
        /// The resolved options the variant was built from.
        options: ResolvedOptions,
        /// Serializable element properties.
        props: ImgProps,
    },
    /// Inline `<svg>` markup with `<title>`/`<rect>`/`<text>` children.
    Svg {
        /// The resolved options the variant was built from.
        options: ResolvedOptions,
        /// Serializable element properties.
        props: SvgProps,
    },
}

/// Properties of the image variant. `None` values are omitted from the
/// serialized element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImgProps {
    /// Accessible label; absent when both title and text are hidden.
    pub alt: Option<String>,
    /// Inline SVG data URI.
    pub src: String,
    /// Class list, [`BASE_CLASS`] plus any extra classes.
    pub class: String,
    /// Element height.
    pub height: String,
    /// Element width.
    pub width: String,
}

/// Properties of the vector variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgProps {
    /// `"true"` exactly when both title and text are hidden.
    pub aria_hidden: Option<&'static str>,
    /// Accessible label; absent when both title and text are hidden.
    pub aria_label: Option<String>,
    /// `"img"` exactly when the title or the text is shown.
    pub role: Option<&'static str>,
    /// Always `"false"`: decorative SVGs are not focus targets.
    pub focusable: &'static str,
    /// Always `"xMidYMid slice"`.
    pub preserve_aspect_ratio: &'static str,
    /// Element height.
    pub height: String,
    /// Element width.
    pub width: String,
    /// SVG namespace.
    pub xmlns: &'static str,
    /// Class list, [`BASE_CLASS`] plus any extra classes.
    pub class: String,
}

impl Placeholder {
    /// Build the renderable variant selected by the resolved `markup`.
    #[must_use]
    pub fn from_options(options: ResolvedOptions) -> Self {
        let class = match &options.class {
            Some(extra) => format!("{BASE_CLASS} {extra}"),
            None => BASE_CLASS.to_owned(),
        };
        let label = accessible_label(&options);

        match options.markup {
            Markup::Img => {
                let props = ImgProps {
                    alt: label,
                    src: placeholder_src(options.show_title, options.show_text, &options),
                    class,
                    height: options.height.clone(),
                    width: options.width.clone(),
                };
                Self::Img { options, props }
            }
            Markup::Svg => {
                let props = SvgProps {
                    aria_hidden: (!options.show_text && !options.show_title).then_some("true"),
                    aria_label: label,
                    role: (options.show_title || options.show_text).then_some("img"),
                    focusable: "false",
                    preserve_aspect_ratio: "xMidYMid slice",
                    height: options.height.clone(),
                    width: options.width.clone(),
                    xmlns: "http://www.w3.org/2000/svg",
                    class,
                };
                Self::Svg { options, props }
            }
        }
    }

    /// Serialize the placeholder to its literal markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Img { props, .. } => {
                let mut out = String::from("<img");
                push_opt_attr(&mut out, "alt", props.alt.as_deref());
                push_attr(&mut out, "src", &props.src);
                push_attr(&mut out, "class", &props.class);
                push_attr(&mut out, "height", &props.height);
                push_attr(&mut out, "width", &props.width);
                out.push_str(" />");
                out
            }
            Self::Svg { options, props } => {
                let mut out = String::from("<svg");
                push_opt_attr(&mut out, "aria-hidden", props.aria_hidden);
                push_opt_attr(&mut out, "aria-label", props.aria_label.as_deref());
                push_opt_attr(&mut out, "role", props.role);
                push_attr(&mut out, "focusable", props.focusable);
                push_attr(&mut out, "preserveAspectRatio", props.preserve_aspect_ratio);
                push_attr(&mut out, "height", &props.height);
                push_attr(&mut out, "width", &props.width);
                push_attr(&mut out, "xmlns", props.xmlns);
                push_attr(&mut out, "class", &props.class);
                out.push('>');

                if let Toggle::Value(title) = &options.title {
                    write!(out, "<title>{title}</title>").unwrap();
                }
                write!(
                    out,
                    r#"<rect width="100%" height="100%" fill="{}" />"#,
                    options.background
                )
                .unwrap();
                if let Toggle::Value(text) = &options.text {
                    write!(
                        out,
                        r#"<text x="50%" y="50%" fill="{}" dy=".3em">{text}</text>"#,
                        options.color
                    )
                    .unwrap();
                }

                out.push_str("</svg>");
                out
            }
        }
    }
}

/// The accessible label shared by `alt` and `aria-label`: title, text,
/// or `"title: text"` when both are shown; absent when neither is.
fn accessible_label(options: &ResolvedOptions) -> Option<String> {
    if !options.show_title && !options.show_text {
        return None;
    }

    let mut label = String::new();
    if let Toggle::Value(title) = &options.title {
        label.push_str(title);
    }
    if options.show_title && options.show_text {
        label.push_str(": ");
    }
    if let Toggle::Value(text) = &options.text {
        label.push_str(text);
    }
    Some(label)
}

fn push_attr(out: &mut String, key: &str, value: &str) {
    write!(out, r#" {key}="{value}""#).unwrap();
}

fn push_opt_attr(out: &mut String, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_attr(out, key, value);
    }
}
