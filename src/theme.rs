//! Theme colors.
//!
//! A theme is a single primary color plus a secondary color that is always
//! derived from it by lightening. The secondary color is never configured
//! directly: two documents with the same primary color always get the same
//! secondary color.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fraction of the distance toward white used to derive the secondary color.
const SECONDARY_LIGHTEN: f32 = 0.3;

/// An sRGB color parsed from a 6-digit hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Mix each channel toward white by `amount` (0.0 = unchanged, 1.0 = white).
    pub fn lighten(self, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 {
            let c = f32::from(c);
            (c + (255.0 - c) * amount).round() as u8
        };
        Color {
            r: mix(self.r),
            g: mix(self.g),
            b: mix(self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a 6-digit hex color", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }

        // length and digits are checked above
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
        Ok(Color {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The document theme: a primary color and its derived secondary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
}

impl Theme {
    pub fn new(primary: Color) -> Theme {
        Theme {
            primary,
            secondary: primary.lighten(SECONDARY_LIGHTEN),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let plain: Color = "E94845".parse().expect("can parse plain hex");
        let hashed: Color = "#E94845".parse().expect("can parse hashed hex");
        assert_eq!(plain, Color::new(0xE9, 0x48, 0x45));
        assert_eq!(plain, hashed);
    }

    #[test]
    fn parses_lowercase_hex() {
        let color: Color = "00ff00".parse().expect("can parse lowercase hex");
        assert_eq!(color, Color::new(0, 255, 0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("E9484".parse::<Color>().is_err());
        assert!("E948455".parse::<Color>().is_err());
        assert!("GGGGGG".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn displays_uppercase_hex() {
        let color = Color::new(0xE9, 0x48, 0x45);
        assert_eq!(color.to_string(), "E94845");
    }

    #[test]
    fn lighten_moves_toward_white() {
        assert_eq!(Color::new(0, 0, 0).lighten(1.0), Color::new(255, 255, 255));
        assert_eq!(Color::new(10, 20, 30).lighten(0.0), Color::new(10, 20, 30));

        let lighter = Color::new(100, 100, 100).lighten(0.5);
        assert!(lighter.r > 100 && lighter.g > 100 && lighter.b > 100);
    }

    #[test]
    fn secondary_is_deterministic() {
        let primary: Color = "E94845".parse().unwrap();
        let a = Theme::new(primary);
        let b = Theme::new(primary);
        assert_eq!(a.secondary, b.secondary);
        assert_eq!(a.secondary, primary.lighten(0.3));
        assert_ne!(a.secondary, a.primary);
    }

    #[test]
    fn serde_round_trips_as_string() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            color: Color,
        }

        let wrapper: Wrapper = toml::from_str(r#"color = "0000FF""#).expect("can deserialize");
        assert_eq!(wrapper.color, Color::new(0, 0, 255));

        let toml = toml::to_string(&wrapper).expect("can serialize");
        assert!(toml.contains("0000FF"));
    }
}
