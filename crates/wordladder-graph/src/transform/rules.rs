// Individual transformation rules: each applies one class of single-step
// edit to a word and records the resulting candidate strings.

use hashbrown::HashSet;

/// One class of single-step edit.
///
/// Rules receive the word as a char slice so that positions are character
/// positions, not byte offsets.
pub trait TransformationRule {
    /// Short identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Add every candidate this rule produces for `word` to `out`.
    fn apply(&self, word: &[char], out: &mut HashSet<String>);
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace the character at one position with a different letter.
///
/// Produces up to `(alphabet_len - 1) * word_len` candidates. A letter equal
/// to the one already at a position is skipped, so the word itself is never
/// produced.
pub struct Substitution {
    pub alphabet: Vec<char>,
}

impl TransformationRule for Substitution {
    fn name(&self) -> &'static str {
        "substitution"
    }

    fn apply(&self, word: &[char], out: &mut HashSet<String>) {
        let mut buffer = word.to_vec();
        for pos in 0..word.len() {
            for &letter in &self.alphabet {
                if letter == word[pos] {
                    continue;
                }
                buffer[pos] = letter;
                out.insert(buffer.iter().collect());
            }
            buffer[pos] = word[pos];
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert one letter at any position, both ends included.
pub struct Insertion {
    pub alphabet: Vec<char>,
}

impl TransformationRule for Insertion {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn apply(&self, word: &[char], out: &mut HashSet<String>) {
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for pos in 0..=word.len() {
            for &letter in &self.alphabet {
                buffer.clear();
                buffer.extend_from_slice(&word[..pos]);
                buffer.push(letter);
                buffer.extend_from_slice(&word[pos..]);
                out.insert(buffer.iter().collect());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove one character. Single-character words produce nothing, so the
/// empty string is never a candidate.
pub struct Deletion;

impl TransformationRule for Deletion {
    fn name(&self) -> &'static str {
        "deletion"
    }

    fn apply(&self, word: &[char], out: &mut HashSet<String>) {
        if word.len() < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(word.len() - 1);
        for pos in 0..word.len() {
            // Deleting either of two equal neighbors gives the same string.
            if pos > 0 && word[pos] == word[pos - 1] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..pos]);
            buffer.extend_from_slice(&word[pos + 1..]);
            out.insert(buffer.iter().collect());
        }
    }
}

// ---------------------------------------------------------------------------
// SuffixToggle
// ---------------------------------------------------------------------------

/// Strip the suffix if the word carries it, append it otherwise.
///
/// With the possessive suffix this makes `cat` and `cat's` one step apart
/// even though the generic rules would need two edits. A word that consists
/// of nothing but the suffix is left alone.
pub struct SuffixToggle {
    pub suffix: String,
}

impl TransformationRule for SuffixToggle {
    fn name(&self) -> &'static str {
        "suffix-toggle"
    }

    fn apply(&self, word: &[char], out: &mut HashSet<String>) {
        if self.suffix.is_empty() || word.is_empty() {
            return;
        }
        let text: String = word.iter().collect();
        match text.strip_suffix(self.suffix.as_str()) {
            Some("") => {}
            Some(stem) => {
                out.insert(stem.to_string());
            }
            None => {
                out.insert(text + &self.suffix);
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use wordladder_core::alphabet::{ASCII_LOWERCASE, POSSESSIVE_SUFFIX};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(rule: &dyn TransformationRule, word: &str) -> HashSet<String> {
        let mut out = HashSet::new();
        rule.apply(&chars(word), &mut out);
        out
    }

    // --- Substitution ---

    #[test]
    fn substitution_count_and_membership() {
        let rule = Substitution {
            alphabet: ASCII_LOWERCASE.to_vec(),
        };
        let out = run(&rule, "cat");
        assert_eq!(out.len(), 25 * 3);
        assert!(out.contains("cut"));
        assert!(out.contains("bat"));
        assert!(!out.contains("cat"));
    }

    #[test]
    fn substitution_replaces_apostrophe_position() {
        let rule = Substitution { alphabet: vec!['x'] };
        let out = run(&rule, "a's");
        assert!(out.contains("axs"));
        assert!(out.contains("x's"));
        assert!(out.contains("a'x"));
    }

    // --- Insertion ---

    #[test]
    fn insertion_covers_both_ends() {
        let rule = Insertion {
            alphabet: ASCII_LOWERCASE.to_vec(),
        };
        let out = run(&rule, "at");
        assert!(out.contains("cat"));
        assert!(out.contains("ate"));
        assert!(out.contains("aft"));
        assert!(out.iter().all(|c| c.chars().count() == 3));
    }

    #[test]
    fn insertion_into_cat_gives_coat_and_chat() {
        let rule = Insertion {
            alphabet: ASCII_LOWERCASE.to_vec(),
        };
        let out = run(&rule, "cat");
        assert!(out.contains("coat"));
        assert!(out.contains("chat"));
        assert!(out.contains("cart"));
    }

    // --- Deletion ---

    #[test]
    fn deletion_removes_each_position() {
        let out = run(&Deletion, "cart");
        let mut got: Vec<&str> = out.iter().map(String::as_str).collect();
        got.sort();
        assert_eq!(got, ["art", "car", "cat", "crt"]);
    }

    #[test]
    fn deletion_skips_single_character() {
        assert!(run(&Deletion, "a").is_empty());
    }

    #[test]
    fn deletion_collapses_doubled_letters() {
        let out = run(&Deletion, "boot");
        let mut got: Vec<&str> = out.iter().map(String::as_str).collect();
        got.sort();
        assert_eq!(got, ["boo", "bot", "oot"]);
    }

    // --- SuffixToggle ---

    #[test]
    fn suffix_toggle_appends_and_strips() {
        let rule = SuffixToggle {
            suffix: POSSESSIVE_SUFFIX.to_string(),
        };
        let out = run(&rule, "cat");
        assert_eq!(out.len(), 1);
        assert!(out.contains("cat's"));

        let out = run(&rule, "cat's");
        assert_eq!(out.len(), 1);
        assert!(out.contains("cat"));
    }

    #[test]
    fn suffix_toggle_ignores_bare_suffix() {
        let rule = SuffixToggle {
            suffix: POSSESSIVE_SUFFIX.to_string(),
        };
        assert!(run(&rule, "'s").is_empty());
    }

    #[test]
    fn suffix_toggle_other_suffix() {
        let rule = SuffixToggle {
            suffix: "ing".to_string(),
        };
        assert!(run(&rule, "walking").contains("walk"));
        assert!(run(&rule, "walk").contains("walking"));
    }
}
