//! Case-insensitive identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// A variable or parameter name.
///
/// Newspeak identifiers are case-insensitive: `Count`, `count` and `COUNT`
/// name the same variable. A `Name` keeps the spelling it was written with
/// for messages, and compares and hashes by its ASCII-lowercased key.
#[derive(Clone)]
pub struct Name {
    text: Rc<str>,
    key: Rc<str>,
}

impl Name {
    pub fn new(text: &str) -> Self {
        let key: Rc<str> = if text.bytes().any(|b| b.is_ascii_uppercase()) {
            Rc::from(text.to_ascii_lowercase())
        } else {
            Rc::from(text)
        };
        Name {
            text: Rc::from(text),
            key,
        }
    }

    /// Spelling as written in the source.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lowercased lookup key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive comparison against a raw word.
    #[inline]
    pub fn matches(&self, word: &str) -> bool {
        self.key.eq_ignore_ascii_case(word)
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.text)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Name {
    fn from(text: &str) -> Self {
        Name::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Name;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_case() {
        assert_eq!(Name::new("Total"), Name::new("TOTAL"));
        assert_ne!(Name::new("total"), Name::new("totals"));
    }

    #[test]
    fn hashing_agrees_with_equality() {
        let mut seen = HashSet::new();
        seen.insert(Name::new("Width"));
        assert!(seen.contains(&Name::new("width")));
    }

    #[test]
    fn keeps_original_spelling() {
        let name = Name::new("myList");
        assert_eq!(name.as_str(), "myList");
        assert_eq!(name.key(), "mylist");
        assert!(name.matches("MYLIST"));
    }
}
