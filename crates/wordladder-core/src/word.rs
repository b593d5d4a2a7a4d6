// Word: validated, immutable vocabulary entry

use std::borrow::Borrow;
use std::fmt;

use crate::alphabet::POSSESSIVE_SUFFIX;
use crate::{LadderError, Result};

/// An immutable lowercase word, optionally ending in the possessive marker.
///
/// Words compare, hash and order by their character content only, and
/// borrow as `str` so hashed collections keyed by `Word` can be queried
/// with plain string slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Validate and wrap a string.
    ///
    /// Rejects the empty string, whitespace and control characters, and
    /// uppercase letters. Callers that accept free-form input should
    /// lowercase it first.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if let Some(reason) = validate(&text) {
            return Err(LadderError::InvalidWord(text, reason));
        }
        Ok(Self(text))
    }

    /// The word's characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns `true` if the word ends with the possessive marker and has a
    /// non-empty stem before it.
    pub fn is_possessive(&self) -> bool {
        self.0.len() > POSSESSIVE_SUFFIX.len() && self.0.ends_with(POSSESSIVE_SUFFIX)
    }

    /// The word without its possessive marker, or the whole word if it has none.
    pub fn stem(&self) -> &str {
        if self.is_possessive() {
            &self.0[..self.0.len() - POSSESSIVE_SUFFIX.len()]
        } else {
            &self.0
        }
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Why `text` is not a valid word, or `None` if it is.
pub fn validate(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return Some("empty word");
    }
    for c in text.chars() {
        if c.is_whitespace() {
            return Some("contains whitespace");
        }
        if c.is_control() {
            return Some("contains a control character");
        }
        if c.is_uppercase() {
            return Some("contains an uppercase letter");
        }
    }
    None
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Word {
    type Error = LadderError;

    fn try_from(text: &str) -> Result<Self> {
        Word::new(text)
    }
}

impl TryFrom<String> for Word {
    type Error = LadderError;

    fn try_from(text: String) -> Result<Self> {
        Word::new(text)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
