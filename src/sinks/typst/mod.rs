//! Typst source assembly.
//!
//! This sink turns a configuration plus a body into one complete Typst
//! document. The sequence is linear and synchronous: resolve the theme,
//! fonts, and cover, set the document metadata, then emit font setup, the
//! cover page (decorations included), and the styled body. Each invocation
//! builds everything from scratch; nothing is retained between calls.

mod markup;
mod rendering;

use crate::config::{Configuration, Document};
use crate::cover::ResolvedCover;
use crate::fonts::ResolvedFonts;
use crate::theme::Theme;
use markup::quote;

/// Render the full document source for the host engine.
pub fn render(config: &Configuration, body: &str) -> String {
    let document = &config.document;
    let theme = Theme::new(document.main_color);
    let fonts: ResolvedFonts = document.fonts.resolve();
    let cover: ResolvedCover = config.cover.resolve(&theme, &fonts);

    log::info!(
        "rendering '{}' ({} body bytes)",
        document.title,
        body.len()
    );

    let mut out = String::with_capacity(body.len() + 4096);
    metadata(&mut out, document);
    rendering::fonts::render(&mut out, &fonts);
    rendering::title_page::render(&mut out, document, &theme, &cover);
    rendering::body::render(&mut out, document, &theme, body);
    out
}

/// The `#set document(...)` metadata rule. A single author is passed as a
/// string, several as an array; no authors omits the argument.
fn metadata(out: &mut String, document: &Document) {
    let mut args = vec![format!("title: {}", quote(&document.title))];

    let authors = document.author.normalize();
    match authors.len() {
        0 => {}
        1 => args.push(format!("author: {}", quote(&authors[0]))),
        _ => args.push(format!(
            "author: ({})",
            authors
                .iter()
                .map(|author| quote(author))
                .collect::<Vec<String>>()
                .join(", ")
        )),
    }

    out.push_str(&format!("#set document({})\n", args.join(", ")));
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(toml: &str) -> Configuration {
        toml::from_str(toml).expect("can parse test configuration")
    }

    #[test]
    fn assembles_sections_in_order() {
        let config = config(
            "[document]\ntitle = \"Rapport\"\nauthor = \"Alice\"\nmain_color = \"0000FF\"",
        );
        let out = render(&config, "= Intro\n\nBonjour.");

        let metadata = out.find("#set document").expect("has metadata");
        let fonts = out.find("#set text(font:").expect("has font setup");
        let cover = out.find("#page(").expect("has cover page");
        let body = out.find("= Intro").expect("has body");
        assert!(metadata < fonts && fonts < cover && cover < body);
    }

    #[test]
    fn metadata_single_author_is_a_string() {
        let mut out = String::new();
        metadata(
            &mut out,
            &config("[document]\ntitle = \"T\"\nauthor = \"Alice\"").document,
        );
        assert_eq!(out, "#set document(title: \"T\", author: \"Alice\")\n");
    }

    #[test]
    fn metadata_several_authors_are_an_array() {
        let mut out = String::new();
        metadata(
            &mut out,
            &config("[document]\ntitle = \"T\"\nauthor = [\"Alice\", \"Bob\"]").document,
        );
        assert!(out.contains("author: (\"Alice\", \"Bob\")"));
    }

    #[test]
    fn metadata_escapes_title() {
        let mut out = String::new();
        metadata(
            &mut out,
            &config("[document]\ntitle = 'Guillemets \" et \\'").document,
        );
        assert!(out.contains("title: \"Guillemets \\\" et \\\\\""));
    }

    #[test]
    fn end_to_end_cascade_reaches_the_markup() {
        // main color 0000FF with no cover override: the title, subtitle,
        // and author styles all carry blue in the emitted source
        let config = config(
            "[document]\ntitle = \"Rapport\"\nsubtitle = \"V1\"\nauthor = \"Alice\"\nmain_color = \"0000FF\"",
        );
        let out = render(&config, "corps");

        assert!(out.matches("rgb(\"#0000FF\")").count() >= 4);
    }
}
