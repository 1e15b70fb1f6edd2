//! Body styling.
//!
//! Everything after the cover: the language rule, heading coloring,
//! highlight rules for configured literal terms, the optional running
//! header, outline handling, and finally the body content verbatim. The
//! body itself is host-engine markup and is not inspected.

use crate::config::{Document, Outline};
use crate::sinks::typst::markup::{quote, rgb};
use crate::theme::Theme;

pub fn render(out: &mut String, document: &Document, theme: &Theme, body: &str) {
    out.push_str(&format!("#set text(lang: {})\n", quote(&document.lang)));
    out.push_str(&format!(
        "#show heading: set text(fill: {})\n",
        rgb(theme.primary)
    ));

    for term in &document.highlights {
        out.push_str(&format!(
            "#show {}: it => text(fill: {}, weight: \"bold\", it)\n",
            quote(term),
            rgb(theme.primary)
        ));
    }

    if document.running_header {
        let label = match &document.class {
            Some(class) => format!("{} · {}", document.title, class),
            None => document.title.clone(),
        };
        out.push_str(&format!(
            "#set page(header: align(right, text(size: 0.85em, fill: {}, {})))\n",
            rgb(theme.secondary),
            quote(&label)
        ));
    }

    match &document.outline {
        Outline::Default => out.push_str("#outline()\n"),
        Outline::Suppressed => {}
        Outline::Custom(content) => {
            out.push_str(content);
            if !content.ends_with('\n') {
                out.push('\n');
            }
        }
    }

    out.push('\n');
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
}
