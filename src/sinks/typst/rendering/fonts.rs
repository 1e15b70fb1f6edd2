//! Font setup rules.

use crate::fonts::ResolvedFonts;
use crate::sinks::typst::markup::{quote, weight};

/// Emit the base text font and the raw-text (code) font rules.
pub fn render(out: &mut String, fonts: &ResolvedFonts) {
    out.push_str(&format!(
        "#set text(font: {}, weight: {})\n",
        quote(&fonts.body.name),
        weight(&fonts.body.weight)
    ));
    out.push_str(&format!(
        "#show raw: set text(font: {}, weight: {})\n",
        quote(&fonts.code.name),
        weight(&fonts.code.weight)
    ));
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fonts::{FontConfig, FontSpec, FontWeight};

    #[test]
    fn emits_body_and_code_rules() {
        let fonts = FontConfig {
            body: Some(FontSpec::new("Inter", FontWeight::Number(450))),
            ..FontConfig::default()
        }
        .resolve();

        let mut out = String::new();
        render(&mut out, &fonts);

        assert!(out.contains("#set text(font: \"Inter\", weight: 450)"));
        assert!(out.contains("#show raw: set text(font: \"DejaVu Sans Mono\", weight: \"regular\")"));
    }
}
