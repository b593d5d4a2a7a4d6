// Letters, suffixes and the bundled sample word list

/// Letters tried by substitution and insertion rules.
pub const ASCII_LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Possessive marker toggled by the suffix rule.
pub const POSSESSIVE_SUFFIX: &str = "'s";

/// Sample vocabulary: short English words connected through single edits.
///
/// Contains the ladder `cart -> care -> core -> bore -> bone` and the bridge
/// words `carts` and `parts`. `care` appears twice; vocabularies collapse
/// duplicates.
pub const SAMPLE_WORDS: &[&str] = &[
    "cat", "bat", "bat's", "beat", "boat", "cat's", "chat", "coat", "cut", "curt", "cute", "cart",
    "care", "core", "bore", "bone", "bare", "care", "cars", "arts", "part", "carts", "parts",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_26_letters_in_order() {
        assert_eq!(ASCII_LOWERCASE.len(), 26);
        assert!(ASCII_LOWERCASE.windows(2).all(|w| w[0] < w[1]));
        assert!(ASCII_LOWERCASE.iter().all(char::is_ascii_lowercase));
    }

    #[test]
    fn sample_words_are_lowercase() {
        for w in SAMPLE_WORDS {
            assert!(!w.is_empty());
            assert!(!w.chars().any(char::is_uppercase), "{w}");
        }
    }
}
