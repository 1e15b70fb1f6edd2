//! Typst markup building blocks.
//!
//! Resolved configuration values become literals in the emitted source:
//! strings are quoted and escaped, colors become `rgb("#RRGGBB")` calls,
//! weights stay numeric or become quoted names. Newlines inside a quoted
//! string are emitted as `\n`, which the engine lays out as line breaks
//! (this is how the author block stacks one name per line).

use crate::cover::{ResolvedDate, ResolvedElement};
use crate::fonts::FontWeight;
use crate::theme::Color;

/// Quote and escape a string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// An `rgb("#RRGGBB")` color literal.
pub fn rgb(color: Color) -> String {
    format!("rgb(\"#{color}\")")
}

/// A weight literal: bare number or quoted name.
pub fn weight(weight: &FontWeight) -> String {
    match weight {
        FontWeight::Number(n) => n.to_string(),
        FontWeight::Named(name) => quote(name),
    }
}

/// A `text(...)` call for a resolved styled element. Color and font are
/// always present; weight and size are emitted only when concrete, so an
/// explicit `auto` leaves the engine's own default in force.
pub fn element_text(element: &ResolvedElement, content: &str) -> String {
    let mut args = vec![
        format!("fill: {}", rgb(element.color)),
        format!("font: {}", quote(&element.font)),
    ];
    if let Some(w) = element.weight.value() {
        args.push(format!("weight: {}", weight(w)));
    }
    if let Some(size) = element.size.value() {
        args.push(format!("size: {size}"));
    }
    format!("text({}, {})", args.join(", "), quote(content))
}

/// A `text(...)` call for the resolved date element (concrete weight).
pub fn date_text(date: &ResolvedDate, content: &str) -> String {
    let mut args = vec![
        format!("fill: {}", rgb(date.color)),
        format!("font: {}", quote(&date.font)),
        format!("weight: {}", weight(&date.weight)),
    ];
    if let Some(size) = date.size.value() {
        args.push(format!("size: {size}"));
    }
    format!("text({}, {})", args.join(", "), quote(content))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cover::{Auto, ExtraKeys};

    #[test]
    fn quote_escapes_specials() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("Alice\nBob"), "\"Alice\\nBob\"");
    }

    #[test]
    fn rgb_formats_hex() {
        let color: Color = "E94845".parse().unwrap();
        assert_eq!(rgb(color), "rgb(\"#E94845\")");
    }

    #[test]
    fn weight_literal_forms() {
        assert_eq!(weight(&FontWeight::Number(600)), "600");
        assert_eq!(weight(&FontWeight::named("bold")), "\"bold\"");
    }

    #[test]
    fn element_text_omits_auto_fields() {
        let element = ResolvedElement {
            color: "0000FF".parse().unwrap(),
            weight: Auto::Auto,
            size: Auto::Value("3em".to_string()),
            font: "Archivo".to_string(),
            extra: ExtraKeys::default(),
        };

        let text = element_text(&element, "Title");
        assert!(text.contains("fill: rgb(\"#0000FF\")"));
        assert!(text.contains("font: \"Archivo\""));
        assert!(text.contains("size: 3em"));
        assert!(!text.contains("weight"));
        assert!(text.ends_with(", \"Title\")"));
    }
}
