//! Placeholder option resolution.
//!
//! Turns a partial, user-supplied option set into a fully specified
//! configuration with derived defaults and visibility flags. Resolution
//! is total: any combination of inputs produces a usable result.

use docex_data::Grays;

use crate::error::PlaceholderError;

/// Base CSS class carried by every rendered placeholder.
pub const BASE_CLASS: &str = "bd-placeholder-img";

const DEFAULT_HEIGHT: &str = "180";
const DEFAULT_WIDTH: &str = "100%";
const DEFAULT_TITLE: &str = "Placeholder";

/// Palette shade used for the default background color.
const BACKGROUND_SHADE: u16 = 600;
/// Palette shade used for the default text color.
const COLOR_SHADE: u16 = 300;

/// Which element the placeholder renders as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Markup {
    /// A self-closed `<img>` with an inline SVG data URI source.
    Img,
    /// Inline `<svg>` markup.
    #[default]
    Svg,
}

impl Markup {
    /// Parse a `markup` attribute value.
    ///
    /// Anything other than `"img"` selects the SVG variant.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "img" { Self::Img } else { Self::Svg }
    }
}

/// A string option that can be explicitly switched off.
///
/// The `text` and `title` options accept either a string or the boolean
/// `false`. `Off` records that explicit `false`; an option that was
/// simply not provided is an absent [`Option<Toggle>`] at the
/// [`UserOptions`] layer and still receives its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// Explicitly disabled with a boolean `false`.
    Off,
    /// Present with the given text.
    Value(String),
}

impl Toggle {
    /// The text value, or `None` when switched off.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Off => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// Default colors injected from the gray palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderDefaults {
    /// Default background hex color.
    pub background: String,
    /// Default text (foreground) hex color.
    pub color: String,
}

impl PlaceholderDefaults {
    /// Build defaults from a loaded gray palette.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceholderError::MissingShade`] if the palette lacks
    /// one of the required shades. There is no hardcoded fallback: a
    /// palette that cannot supply defaults fails the build.
    pub fn from_grays(grays: &Grays) -> Result<Self, PlaceholderError> {
        let background = grays
            .shade(BACKGROUND_SHADE)
            .ok_or(PlaceholderError::MissingShade(BACKGROUND_SHADE))?;
        let color = grays
            .shade(COLOR_SHADE)
            .ok_or(PlaceholderError::MissingShade(COLOR_SHADE))?;
        Ok(Self {
            background: background.to_owned(),
            color: color.to_owned(),
        })
    }
}

/// Partial, user-supplied placeholder options.
///
/// `None` means "not provided"; the field takes its default during
/// [`resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOptions {
    /// Background color (hex string).
    pub background: Option<String>,
    /// Extra class names appended to [`BASE_CLASS`].
    pub class: Option<String>,
    /// Text (foreground) color (hex string).
    pub color: Option<String>,
    /// Height, treated as opaque text (may carry units or `%`).
    pub height: Option<String>,
    /// Which element to render.
    pub markup: Option<Markup>,
    /// Text shown in the image, or [`Toggle::Off`] to hide it.
    pub text: Option<Toggle>,
    /// Title of the image, or [`Toggle::Off`] to hide it.
    pub title: Option<Toggle>,
    /// Width, treated as opaque text.
    pub width: Option<String>,
}

/// Fully resolved placeholder options with derived visibility flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Background color (hex string).
    pub background: String,
    /// Extra class names appended to [`BASE_CLASS`], if any.
    pub class: Option<String>,
    /// Text (foreground) color (hex string).
    pub color: String,
    /// Height as opaque text.
    pub height: String,
    /// Which element to render.
    pub markup: Markup,
    /// Text shown in the image.
    pub text: Toggle,
    /// Title of the image.
    pub title: Toggle,
    /// Width as opaque text.
    pub width: String,
    /// Whether the text element is rendered. Always consistent with
    /// `text`: false exactly when `text` is [`Toggle::Off`].
    pub show_text: bool,
    /// Whether the title element is rendered. Always consistent with
    /// `title`: false exactly when `title` is [`Toggle::Off`].
    pub show_title: bool,
}

/// Resolve partial options against defaults.
///
/// Built-in defaults (background/color from the injected palette
/// defaults, `height` `"180"`, `width` `"100%"`, `markup` svg, `title`
/// `"Placeholder"`) are overridden by any provided user value. The
/// `text` default is derived last, as `"{width}x{height}"` from the
/// already-resolved width and height.
#[must_use]
pub fn resolve(user: UserOptions, defaults: &PlaceholderDefaults) -> ResolvedOptions {
    let background = user
        .background
        .unwrap_or_else(|| defaults.background.clone());
    let color = user.color.unwrap_or_else(|| defaults.color.clone());
    let height = user.height.unwrap_or_else(|| DEFAULT_HEIGHT.to_owned());
    let width = user.width.unwrap_or_else(|| DEFAULT_WIDTH.to_owned());
    let markup = user.markup.unwrap_or_default();
    let title = user
        .title
        .unwrap_or_else(|| Toggle::Value(DEFAULT_TITLE.to_owned()));
    let text = user
        .text
        .unwrap_or_else(|| Toggle::Value(format!("{width}x{height}")));

    let show_text = text != Toggle::Off;
    let show_title = title != Toggle::Off;

    ResolvedOptions {
        background,
        class: user.class,
        color,
        height,
        markup,
        text,
        title,
        width,
        show_text,
        show_title,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn defaults() -> PlaceholderDefaults {
        PlaceholderDefaults {
            background: "#868e96".to_owned(),
            color: "#dee2e6".to_owned(),
        }
    }

    fn user_options_from(resolved: &ResolvedOptions) -> UserOptions {
        UserOptions {
            background: Some(resolved.background.clone()),
            class: resolved.class.clone(),
            color: Some(resolved.color.clone()),
            height: Some(resolved.height.clone()),
            markup: Some(resolved.markup),
            text: Some(resolved.text.clone()),
            title: Some(resolved.title.clone()),
            width: Some(resolved.width.clone()),
        }
    }

    #[test]
    fn test_resolve_all_defaults() {
        let resolved = resolve(UserOptions::default(), &defaults());

        assert_eq!(resolved.background, "#868e96");
        assert_eq!(resolved.color, "#dee2e6");
        assert_eq!(resolved.class, None);
        assert_eq!(resolved.height, "180");
        assert_eq!(resolved.width, "100%");
        assert_eq!(resolved.markup, Markup::Svg);
        assert_eq!(resolved.title, Toggle::Value("Placeholder".to_owned()));
        assert_eq!(resolved.text, Toggle::Value("100%x180".to_owned()));
        assert!(resolved.show_text);
        assert!(resolved.show_title);
    }

    #[test]
    fn test_resolve_user_overrides() {
        let user = UserOptions {
            background: Some("#000".to_owned()),
            color: Some("#fff".to_owned()),
            class: Some("rounded".to_owned()),
            markup: Some(Markup::Img),
            ..Default::default()
        };
        let resolved = resolve(user, &defaults());

        assert_eq!(resolved.background, "#000");
        assert_eq!(resolved.color, "#fff");
        assert_eq!(resolved.class, Some("rounded".to_owned()));
        assert_eq!(resolved.markup, Markup::Img);
    }

    #[test]
    fn test_resolve_derived_text_uses_resolved_dimensions() {
        let user = UserOptions {
            width: Some("200".to_owned()),
            height: Some("150".to_owned()),
            ..Default::default()
        };
        let resolved = resolve(user, &defaults());

        assert_eq!(resolved.text, Toggle::Value("200x150".to_owned()));
    }

    #[test]
    fn test_resolve_explicit_text_kept() {
        let user = UserOptions {
            text: Some(Toggle::Value("Hello".to_owned())),
            ..Default::default()
        };
        let resolved = resolve(user, &defaults());

        assert_eq!(resolved.text, Toggle::Value("Hello".to_owned()));
        assert!(resolved.show_text);
    }

    #[test]
    fn test_resolve_text_off() {
        let user = UserOptions {
            text: Some(Toggle::Off),
            ..Default::default()
        };
        let resolved = resolve(user, &defaults());

        assert!(!resolved.show_text);
        assert!(resolved.show_title);
    }

    #[test]
    fn test_resolve_title_off() {
        let user = UserOptions {
            title: Some(Toggle::Off),
            ..Default::default()
        };
        let resolved = resolve(user, &defaults());

        assert!(resolved.show_text);
        assert!(!resolved.show_title);
    }

    #[test]
    fn test_resolve_idempotent_on_own_output() {
        let inputs = [
            UserOptions::default(),
            UserOptions {
                width: Some("200".to_owned()),
                height: Some("150".to_owned()),
                ..Default::default()
            },
            UserOptions {
                markup: Some(Markup::Img),
                text: Some(Toggle::Off),
                title: Some(Toggle::Off),
                ..Default::default()
            },
        ];

        for user in inputs {
            let once = resolve(user, &defaults());
            let twice = resolve(user_options_from(&once), &defaults());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_markup_parse() {
        assert_eq!(Markup::parse("img"), Markup::Img);
        assert_eq!(Markup::parse("svg"), Markup::Svg);
        assert_eq!(Markup::parse("anything-else"), Markup::Svg);
    }

    #[test]
    fn test_defaults_from_grays() {
        let grays = docex_data::Grays::from_yaml(
            r##"
- name: 100
  hex: "#f8f9fa"
- name: 200
  hex: "#e9ecef"
- name: 300
  hex: "#dee2e6"
- name: 400
  hex: "#ced4da"
- name: 500
  hex: "#adb5bd"
- name: 600
  hex: "#868e96"
- name: 700
  hex: "#495057"
- name: 800
  hex: "#343a40"
- name: 900
  hex: "#212529"
"##,
        )
        .unwrap();

        let defaults = PlaceholderDefaults::from_grays(&grays).unwrap();
        assert_eq!(defaults.background, "#868e96");
        assert_eq!(defaults.color, "#dee2e6");
    }
}
