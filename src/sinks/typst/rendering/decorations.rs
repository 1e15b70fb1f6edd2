//! Decorative cover shapes.
//!
//! Two stacked corner wedges in each of the top-left and bottom-right
//! corners: the wider wedge in the secondary color, the narrower one in
//! the primary color on top. Emitted as the cover page's `background`
//! content so they sit behind the title block.

use crate::sinks::typst::markup::rgb;
use crate::theme::Theme;

pub fn render(theme: &Theme) -> String {
    let primary = rgb(theme.primary);
    let secondary = rgb(theme.secondary);

    let mut out = String::with_capacity(512);
    out.push_str(&format!(
        "#place(top + left, polygon(fill: {secondary}, (0%, 0%), (42%, 0%), (0%, 26%)))\n"
    ));
    out.push_str(&format!(
        "#place(top + left, polygon(fill: {primary}, (0%, 0%), (30%, 0%), (0%, 18%)))\n"
    ));
    out.push_str(&format!(
        "#place(bottom + right, polygon(fill: {secondary}, (100%, 100%), (58%, 100%), (100%, 74%)))\n"
    ));
    out.push_str(&format!(
        "#place(bottom + right, polygon(fill: {primary}, (100%, 100%), (70%, 100%), (100%, 82%)))\n"
    ));
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uses_primary_and_derived_secondary() {
        let theme = Theme::new("E94845".parse().unwrap());
        let shapes = render(&theme);

        assert!(shapes.contains(&rgb(theme.primary)));
        assert!(shapes.contains(&rgb(theme.secondary)));
        assert_eq!(shapes.matches("#place").count(), 4);
    }
}
