//! Author normalization.
//!
//! Authors may be configured as a single string or a list of strings; both
//! normalize to an ordered list. The display form joins the list with
//! newlines so the cover page can stack one author per line. Entries are
//! taken as given: no deduplication, no trimming, no emptiness checks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorList {
    One(String),
    Many(Vec<String>),
}

impl Default for AuthorList {
    fn default() -> Self {
        AuthorList::Many(Vec::default())
    }
}

impl AuthorList {
    /// Normalize to an ordered list, wrapping a single author as one entry.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            AuthorList::One(author) => vec![author.clone()],
            AuthorList::Many(authors) => authors.clone(),
        }
    }

    /// Newline-joined display form, preserving input order.
    pub fn display(&self) -> String {
        self.normalize().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AuthorList::One(_) => false,
            AuthorList::Many(authors) => authors.is_empty(),
        }
    }
}

impl<S: Into<String>> From<S> for AuthorList {
    fn from(s: S) -> Self {
        AuthorList::One(s.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn single_author_wraps_to_one_element() {
        let authors = AuthorList::from("Alice");
        assert_eq!(authors.normalize(), vec!["Alice".to_string()]);
        assert_eq!(authors.display(), "Alice");
    }

    #[test]
    fn list_preserves_order_in_display() {
        let authors = AuthorList::Many(vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(authors.display(), "Alice\nBob");
    }

    #[test]
    fn no_trimming_or_dedup() {
        let authors = AuthorList::Many(vec![" Alice ".to_string(), " Alice ".to_string()]);
        assert_eq!(authors.display(), " Alice \n Alice ");
    }

    #[test]
    fn deserializes_string_or_list() {
        #[derive(Deserialize)]
        struct Wrapper {
            author: AuthorList,
        }

        let single: Wrapper = toml::from_str(r#"author = "Alice""#).expect("can parse string");
        assert_eq!(single.author, AuthorList::One("Alice".to_string()));

        let many: Wrapper =
            toml::from_str(r#"author = ["Alice", "Bob"]"#).expect("can parse list");
        assert_eq!(many.author.normalize().len(), 2);
    }

    #[test]
    fn empty_list_is_empty() {
        assert!(AuthorList::default().is_empty());
        assert!(!AuthorList::from("Alice").is_empty());
    }
}
