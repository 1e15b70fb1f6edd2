//! Title page rendering.
//!
//! The cover is a single self-contained `#page(...)` block: the resolved
//! cover padding becomes the page margin, the background fill and the
//! decorative shapes become page arguments, and the content is a vertically
//! and horizontally centred stack of styled elements separated by the
//! configured spacing.
//!
//! Element order, top to bottom: logo, title, subtitle, class/year line,
//! author block, affiliation, date line. Absent metadata simply drops its
//! element; the stack closes up around it.

use super::decorations;
use crate::config::Document;
use crate::cover::{Fill, ResolvedCover};
use crate::sinks::typst::markup::{date_text, element_text, quote, rgb};
use crate::theme::Theme;

pub fn render(out: &mut String, document: &Document, theme: &Theme, cover: &ResolvedCover) {
    let mut page_args = vec![format!("margin: {}", cover.padding)];
    if let Fill::Color(color) = cover.bg {
        page_args.push(format!("fill: {}", rgb(color)));
    }
    if cover.decorations {
        page_args.push(format!("background: [\n{}]", decorations::render(theme)));
    }

    let mut elements: Vec<String> = Vec::default();

    if let Some(logo) = &document.logo {
        elements.push(format!(
            "#image({}, width: 30%)",
            quote(&logo.to_string_lossy())
        ));
    }

    elements.push(format!("#{}", element_text(&cover.title, &document.title)));

    if let Some(subtitle) = &document.subtitle {
        elements.push(format!("#{}", element_text(&cover.subtitle, subtitle)));
    }

    let class_line = match &document.class {
        Some(class) => format!("{} · {}", class, document.year),
        None => document.year.to_string(),
    };
    elements.push(format!("#{}", date_text(&cover.date, &class_line)));

    if !document.author.is_empty() {
        elements.push(format!(
            "#{}",
            element_text(&cover.author, &document.author.display())
        ));
    }

    if let Some(affiliation) = &document.affiliation {
        elements.push(format!("#{}", element_text(&cover.author, affiliation)));
    }

    if let Some(line) = date_line(document, cover.date.range) {
        elements.push(format!("#{}", date_text(&cover.date, &line)));
    }

    let spacer = format!("\n    #v({})\n    ", cover.spacing);
    out.push_str(&format!("#page(\n  {},\n)[\n", page_args.join(",\n  ")));
    out.push_str("  #align(center + horizon)[\n    ");
    out.push_str(&elements.join(&spacer));
    out.push_str("\n  ]\n]\n");
}

/// The date display: a start–updated range when enabled and both dates are
/// set, otherwise the single most recent date. A missing start date
/// suppresses the range.
fn date_line(document: &Document, range: bool) -> Option<String> {
    match (&document.start_date, &document.updated_date) {
        (Some(start), Some(updated)) if range => Some(format!("{start} – {updated}")),
        (_, Some(updated)) => Some(updated.clone()),
        (Some(start), None) => Some(start.clone()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Configuration;
    use crate::fonts::FontConfig;
    use crate::theme::Theme;

    fn setup(document_toml: &str, cover_toml: &str) -> String {
        let config: Configuration = toml::from_str(&format!(
            "[document]\n{document_toml}\n[cover]\n{cover_toml}"
        ))
        .expect("can parse test config");
        let theme = Theme::new(config.document.main_color);
        let fonts = FontConfig::default().resolve();
        let cover = config.cover.resolve(&theme, &fonts);

        let mut out = String::new();
        render(&mut out, &config.document, &theme, &cover);
        out
    }

    #[test]
    fn cover_carries_resolved_title_style() {
        let out = setup("title = \"Rapport\"\nmain_color = \"0000FF\"", "");
        assert!(out.contains("fill: rgb(\"#0000FF\")"));
        assert!(out.contains("\"Rapport\""));
        assert!(out.contains("size: 3em"));
    }

    #[test]
    fn decorations_toggle_suppresses_background() {
        let with = setup("title = \"T\"", "");
        assert!(with.contains("background: ["));
        assert!(with.contains("#place"));

        let without = setup("title = \"T\"", "decorations = false");
        assert!(!without.contains("background:"));
        assert!(!without.contains("#place"));
    }

    #[test]
    fn bg_fill_is_emitted_when_set() {
        let out = setup("title = \"T\"", "bg = \"1A1A2E\"");
        assert!(out.contains("fill: rgb(\"#1A1A2E\")"));

        let transparent = setup("title = \"T\"", "bg = \"none\"");
        assert!(!transparent.contains("fill: rgb(\"#1A1A2E\")"));
    }

    #[test]
    fn padding_becomes_page_margin() {
        let out = setup("title = \"T\"", "padding = \"2cm\"");
        assert!(out.contains("margin: 2cm"));
    }

    #[test]
    fn date_range_and_single_forms() {
        let out = setup(
            "title = \"T\"\nstart_date = \"2026-02-01\"\nupdated_date = \"2026-08-07\"",
            "",
        );
        assert!(out.contains("2026-02-01 – 2026-08-07"));

        // range disabled: only the updated date
        let out = setup(
            "title = \"T\"\nstart_date = \"2026-02-01\"\nupdated_date = \"2026-08-07\"",
            "[cover.date]\nrange = false",
        );
        assert!(!out.contains("2026-02-01 –"));
        assert!(out.contains("2026-08-07"));

        // missing start date suppresses the range
        let out = setup("title = \"T\"\nupdated_date = \"2026-08-07\"", "");
        assert!(!out.contains("–"));
        assert!(out.contains("2026-08-07"));
    }

    #[test]
    fn authors_stack_on_separate_lines() {
        let out = setup("title = \"T\"\nauthor = [\"Alice\", \"Bob\"]", "");
        assert!(out.contains("\"Alice\\nBob\""));
    }

    #[test]
    fn class_line_joins_class_and_year() {
        let out = setup("title = \"T\"\nclass = \"M1 Informatique\"\nyear = 2026", "");
        assert!(out.contains("M1 Informatique · 2026"));

        let out = setup("title = \"T\"\nyear = 2026", "");
        assert!(out.contains("\"2026\""));
    }

    #[test]
    fn logo_is_emitted_when_set() {
        let out = setup("title = \"T\"\nlogo = \"assets/logo.png\"", "");
        assert!(out.contains("#image(\"assets/logo.png\", width: 30%)"));
    }
}
