//! Cover page configuration: merge over defaults, then cascade resolution.
//!
//! The cover configuration has top-level scalars (background fill,
//! decorations toggle, padding, spacing) and four styled-element
//! sub-configs: `title`, `subtitle`, `date`, `author`. Merging is a
//! shallow-deep hybrid: top-level keys overlay directly, while each of the
//! four sub-configs merges field-by-field over its own defaults — exactly
//! one level deep, realized through per-field serde defaults. Unknown keys
//! inside a sub-config are kept, not rejected, so future styling fields
//! pass through to the engine untouched.
//!
//! ## Placeholder cascade
//!
//! Any styled field may hold the placeholder `"auto"`, meaning "inherit".
//! Resolution replaces placeholders in a hardcoded nine-step order where
//! every step reads only values resolved by an earlier step:
//!
//! 1. `title.color`    ← primary theme color
//! 2. `title.font`     ← title font name
//! 3. `subtitle.color` ← resolved `title.color`
//! 4. `subtitle.font`  ← title font name
//! 5. `date.color`     ← resolved `title.color`
//! 6. `date.weight`    ← body font weight
//! 7. `date.font`      ← body font name
//! 8. `author.color`   ← resolved `title.color`
//! 9. `author.font`    ← body font name
//!
//! Fields outside this list are never placeholders by default; an explicit
//! `"auto"` in one of them passes through unresolved and the engine applies
//! its own default. That is defined behavior, not a fault.

use crate::fonts::{FontWeight, ResolvedFonts};
use crate::theme::{Color, Theme};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A value that may be the `"auto"` placeholder instead of a concrete `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auto<T> {
    Auto,
    Value(T),
}

impl<T> Auto<T> {
    pub fn is_auto(&self) -> bool {
        matches!(self, Auto::Auto)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Auto::Auto => None,
            Auto::Value(value) => Some(value),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Auto::Auto => default,
            Auto::Value(value) => value,
        }
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, default: F) -> T {
        match self {
            Auto::Auto => default(),
            Auto::Value(value) => value,
        }
    }
}

impl<T: Serialize> Serialize for Auto<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Auto::Auto => serializer.serialize_str("auto"),
            Auto::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Auto<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        enum Keyword {
            #[serde(rename = "auto")]
            Auto,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Keyword(Keyword),
            Value(T),
        }

        Ok(match Repr::<T>::deserialize(deserializer)? {
            Repr::Keyword(Keyword::Auto) => Auto::Auto,
            Repr::Value(value) => Auto::Value(value),
        })
    }
}

/// The cover background: transparent (`"none"`) or a solid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    None,
    Color(Color),
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::None => write!(f, "none"),
            Fill::Color(color) => write!(f, "{color}"),
        }
    }
}

impl FromStr for Fill {
    type Err = crate::theme::ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" || s == "transparent" {
            Ok(Fill::None)
        } else {
            s.parse().map(Fill::Color)
        }
    }
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fill {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Unrecognized sub-config keys, carried through verbatim.
pub type ExtraKeys = BTreeMap<String, toml::Value>;

fn auto<T>() -> Auto<T> {
    Auto::Auto
}

fn default_title_weight() -> Auto<FontWeight> {
    Auto::Value(FontWeight::named("bold"))
}

fn default_title_size() -> Auto<String> {
    Auto::Value("3em".to_string())
}

fn default_subtitle_weight() -> Auto<FontWeight> {
    Auto::Value(FontWeight::named("semibold"))
}

fn default_subtitle_size() -> Auto<String> {
    Auto::Value("1.5em".to_string())
}

fn default_date_size() -> Auto<String> {
    Auto::Value("1.1em".to_string())
}

fn default_date_range() -> bool {
    true
}

fn default_author_weight() -> Auto<FontWeight> {
    Auto::Value(FontWeight::named("medium"))
}

fn default_author_size() -> Auto<String> {
    Auto::Value("1.2em".to_string())
}

fn default_decorations() -> bool {
    true
}

fn default_padding() -> String {
    "15%".to_string()
}

fn default_spacing() -> String {
    "1.2em".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    #[serde(default = "auto")]
    pub color: Auto<Color>,
    #[serde(default = "default_title_weight")]
    pub weight: Auto<FontWeight>,
    #[serde(default = "default_title_size")]
    pub size: Auto<String>,
    #[serde(default = "auto")]
    pub font: Auto<String>,
    #[serde(flatten)]
    pub extra: ExtraKeys,
}

impl Default for TitleStyle {
    fn default() -> Self {
        TitleStyle {
            color: Auto::Auto,
            weight: default_title_weight(),
            size: default_title_size(),
            font: Auto::Auto,
            extra: ExtraKeys::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleStyle {
    #[serde(default = "auto")]
    pub color: Auto<Color>,
    #[serde(default = "default_subtitle_weight")]
    pub weight: Auto<FontWeight>,
    #[serde(default = "default_subtitle_size")]
    pub size: Auto<String>,
    #[serde(default = "auto")]
    pub font: Auto<String>,
    #[serde(flatten)]
    pub extra: ExtraKeys,
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        SubtitleStyle {
            color: Auto::Auto,
            weight: default_subtitle_weight(),
            size: default_subtitle_size(),
            font: Auto::Auto,
            extra: ExtraKeys::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateStyle {
    #[serde(default = "auto")]
    pub color: Auto<Color>,
    #[serde(default = "auto")]
    pub weight: Auto<FontWeight>,
    #[serde(default = "default_date_size")]
    pub size: Auto<String>,
    #[serde(default = "auto")]
    pub font: Auto<String>,
    /// Display the date as a start–updated range instead of a single date.
    #[serde(default = "default_date_range")]
    pub range: bool,
    #[serde(flatten)]
    pub extra: ExtraKeys,
}

impl Default for DateStyle {
    fn default() -> Self {
        DateStyle {
            color: Auto::Auto,
            weight: Auto::Auto,
            size: default_date_size(),
            font: Auto::Auto,
            range: default_date_range(),
            extra: ExtraKeys::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStyle {
    #[serde(default = "auto")]
    pub color: Auto<Color>,
    #[serde(default = "default_author_weight")]
    pub weight: Auto<FontWeight>,
    #[serde(default = "default_author_size")]
    pub size: Auto<String>,
    #[serde(default = "auto")]
    pub font: Auto<String>,
    #[serde(flatten)]
    pub extra: ExtraKeys,
}

impl Default for AuthorStyle {
    fn default() -> Self {
        AuthorStyle {
            color: Auto::Auto,
            weight: default_author_weight(),
            size: default_author_size(),
            font: Auto::Auto,
            extra: ExtraKeys::default(),
        }
    }
}

/// Cover configuration as merged over the built-in defaults.
///
/// Deserializing a partial table performs the structural merge: a user who
/// supplies only `[title] size = "3em"` still gets default color, weight,
/// and font for the title, and untouched defaults for every other
/// sub-config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverConfig {
    /// Background fill; `"none"` leaves the page transparent.
    #[serde(default)]
    pub bg: Fill,
    /// Whether decorative shapes are drawn on the cover.
    #[serde(default = "default_decorations")]
    pub decorations: bool,
    /// Padding around the cover content, as an engine length.
    #[serde(default = "default_padding")]
    pub padding: String,
    /// Vertical spacing between cover elements, as an engine length.
    #[serde(default = "default_spacing")]
    pub spacing: String,
    #[serde(default)]
    pub title: TitleStyle,
    #[serde(default)]
    pub subtitle: SubtitleStyle,
    #[serde(default)]
    pub date: DateStyle,
    #[serde(default)]
    pub author: AuthorStyle,
}

impl Default for CoverConfig {
    fn default() -> Self {
        CoverConfig {
            bg: Fill::None,
            decorations: default_decorations(),
            padding: default_padding(),
            spacing: default_spacing(),
            title: TitleStyle::default(),
            subtitle: SubtitleStyle::default(),
            date: DateStyle::default(),
            author: AuthorStyle::default(),
        }
    }
}

impl CoverConfig {
    /// Resolve the placeholder cascade against the theme and fonts.
    ///
    /// The order below is the fixed dependency chain: every step reads only
    /// values already resolved by a prior step, so results never depend on
    /// key iteration order. Explicit user values always win.
    pub fn resolve(&self, theme: &Theme, fonts: &ResolvedFonts) -> ResolvedCover {
        let title_color = self.title.color.unwrap_or(theme.primary);
        let title_font = self
            .title
            .font
            .clone()
            .unwrap_or_else(|| fonts.title.name.clone());

        let subtitle_color = self.subtitle.color.unwrap_or(title_color);
        let subtitle_font = self
            .subtitle
            .font
            .clone()
            .unwrap_or_else(|| fonts.title.name.clone());

        let date_color = self.date.color.unwrap_or(title_color);
        let date_weight = self
            .date
            .weight
            .clone()
            .unwrap_or_else(|| fonts.body.weight.clone());
        let date_font = self
            .date
            .font
            .clone()
            .unwrap_or_else(|| fonts.body.name.clone());

        let author_color = self.author.color.unwrap_or(title_color);
        let author_font = self
            .author
            .font
            .clone()
            .unwrap_or_else(|| fonts.body.name.clone());

        log::debug!(
            "cover cascade resolved: title={title_color}/{title_font} subtitle={subtitle_color} \
             date={date_color} author={author_color}"
        );

        ResolvedCover {
            bg: self.bg,
            decorations: self.decorations,
            padding: self.padding.clone(),
            spacing: self.spacing.clone(),
            title: ResolvedElement {
                color: title_color,
                weight: self.title.weight.clone(),
                size: self.title.size.clone(),
                font: title_font,
                extra: self.title.extra.clone(),
            },
            subtitle: ResolvedElement {
                color: subtitle_color,
                weight: self.subtitle.weight.clone(),
                size: self.subtitle.size.clone(),
                font: subtitle_font,
                extra: self.subtitle.extra.clone(),
            },
            date: ResolvedDate {
                color: date_color,
                weight: date_weight,
                size: self.date.size.clone(),
                font: date_font,
                range: self.date.range,
                extra: self.date.extra.clone(),
            },
            author: ResolvedElement {
                color: author_color,
                weight: self.author.weight.clone(),
                size: self.author.size.clone(),
                font: author_font,
                extra: self.author.extra.clone(),
            },
        }
    }
}

/// A styled element after cascade resolution. Color and font are always
/// concrete; weight and size stay as configured and may legally remain
/// `auto` for the engine to default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedElement {
    pub color: Color,
    pub weight: Auto<FontWeight>,
    pub size: Auto<String>,
    pub font: String,
    pub extra: ExtraKeys,
}

/// The date element after resolution; its weight is cascade-covered and
/// therefore concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDate {
    pub color: Color,
    pub weight: FontWeight,
    pub size: Auto<String>,
    pub font: String,
    pub range: bool,
    pub extra: ExtraKeys,
}

/// The fully resolved cover configuration handed to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCover {
    pub bg: Fill,
    pub decorations: bool,
    pub padding: String,
    pub spacing: String,
    pub title: ResolvedElement,
    pub subtitle: ResolvedElement,
    pub date: ResolvedDate,
    pub author: ResolvedElement,
}
