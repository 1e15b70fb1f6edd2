//! Font configuration.
//!
//! Four font roles: `default`, `body`, `title`, and `code`. The body and
//! title fonts are optional and fall back to the default font when unset;
//! the code font is independent. Weights are either numeric (`400`) or
//! named (`"semibold"`) and are passed to the typesetting engine without
//! validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A font weight: numeric or named. Whatever the engine accepts goes
/// through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Number(u16),
    Named(String),
}

impl FontWeight {
    pub fn named<S: ToString>(name: S) -> FontWeight {
        FontWeight::Named(name.to_string())
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Number(n) => write!(f, "{n}"),
            FontWeight::Named(name) => write!(f, "{name}"),
        }
    }
}

/// A font by family name and weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new<S: ToString>(name: S, weight: FontWeight) -> FontSpec {
        FontSpec {
            name: name.to_string(),
            weight,
        }
    }
}

fn default_weight() -> FontWeight {
    FontWeight::named("regular")
}

fn default_font() -> FontSpec {
    FontSpec::new("Libertinus Serif", default_weight())
}

fn default_code_font() -> FontSpec {
    FontSpec::new("DejaVu Sans Mono", default_weight())
}

/// The configured font roles, before fallback resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_font")]
    pub default: FontSpec,
    /// Body text font; falls back to `default` when unset.
    #[serde(default)]
    pub body: Option<FontSpec>,
    /// Title/headings font; falls back to `default` when unset.
    #[serde(default)]
    pub title: Option<FontSpec>,
    #[serde(default = "default_code_font")]
    pub code: FontSpec,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            default: default_font(),
            body: None,
            title: None,
            code: default_code_font(),
        }
    }
}

impl FontConfig {
    /// Resolve the optional roles through the default font.
    pub fn resolve(&self) -> ResolvedFonts {
        ResolvedFonts {
            body: self.body.clone().unwrap_or_else(|| self.default.clone()),
            title: self.title.clone().unwrap_or_else(|| self.default.clone()),
            code: self.code.clone(),
        }
    }
}

/// The font roles after fallback resolution, all concrete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFonts {
    pub body: FontSpec,
    pub title: FontSpec,
    pub code: FontSpec,
}
