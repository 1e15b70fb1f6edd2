//! The `maquette.toml` configuration.
//!
//! A configuration has document metadata and theme inputs under
//! `[document]`, the cover overrides under `[cover]`, and the input/output
//! paths. Every field beyond the title carries a built-in default, so a
//! minimal file is just:
//!
//! ```toml
//! [document]
//! title = "Rapport de stage"
//! ```

use crate::author::AuthorList;
use crate::cover::CoverConfig;
use crate::fonts::FontConfig;
use crate::theme::Color;
use chrono::Datelike;
use serde::{Deserialize, Serialize, Serializer};
use std::path::PathBuf;

/// Table-of-contents handling: the engine's default rendering, suppressed
/// entirely (`false`), or custom content substituted in (any string).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outline {
    #[default]
    Default,
    Suppressed,
    Custom(String),
}

impl Outline {
    pub fn is_default(&self) -> bool {
        matches!(self, Outline::Default)
    }
}

impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outline::Default => serializer.serialize_bool(true),
            Outline::Suppressed => serializer.serialize_bool(false),
            Outline::Custom(content) => serializer.serialize_str(content),
        }
    }
}

impl<'de> Deserialize<'de> for Outline {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Toggle(bool),
            Custom(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Toggle(true) => Outline::Default,
            Repr::Toggle(false) => Outline::Suppressed,
            Repr::Custom(content) => Outline::Custom(content),
        })
    }
}

fn default_year() -> i32 {
    chrono::Local::now().year()
}

fn default_main_color() -> Color {
    // the template's signature red
    "E94845".parse().expect("default color parses")
}

fn default_lang() -> String {
    "fr".to_string()
}

/// Document metadata and theme inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// A single author string or a list of author strings.
    #[serde(default)]
    pub author: AuthorList,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default = "default_year")]
    pub year: i32,
    /// Class or course label, shown with the year on the cover.
    #[serde(default)]
    pub class: Option<String>,
    /// Start date (`YYYY-MM-DD`); unset suppresses the range display.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last-updated date (`YYYY-MM-DD`).
    #[serde(default)]
    pub updated_date: Option<String>,
    /// Logo image shown at the top of the cover.
    #[serde(default)]
    pub logo: Option<PathBuf>,
    /// Primary theme color as a 6-digit hex string.
    #[serde(default = "default_main_color")]
    pub main_color: Color,
    /// Literal strings to highlight wherever they occur in the body.
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub fonts: FontConfig,
    /// Show a secondary running header with the title and class label.
    #[serde(default)]
    pub running_header: bool,
    /// Two-letter language code.
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default, skip_serializing_if = "Outline::is_default")]
    pub outline: Outline,
}

fn default_body() -> PathBuf {
    PathBuf::from("body.typ")
}

fn default_outfile() -> PathBuf {
    PathBuf::from("report.typ")
}

/// Complete configuration for a maquette project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub document: Document,
    #[serde(default)]
    pub cover: CoverConfig,
    /// Path to the body markup file.
    #[serde(default = "default_body")]
    pub body: PathBuf,
    /// Path the assembled document is written to.
    #[serde(default = "default_outfile")]
    pub outfile: PathBuf,
}
