// Transformation generator: composes rules into one candidate set

use hashbrown::HashSet;
use wordladder_core::alphabet::{ASCII_LOWERCASE, POSSESSIVE_SUFFIX};
use wordladder_core::word::validate;

use super::rules::*;

/// Options controlling which rules a [`TransformationGenerator`] applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Letters tried by substitution and insertion.
    pub alphabet: Vec<char>,
    /// Whether the possessive suffix rule is part of the rule list.
    pub allow_possessives: bool,
    /// Suffix toggled by the possessive rule.
    pub possessive_suffix: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            alphabet: ASCII_LOWERCASE.to_vec(),
            allow_possessives: true,
            possessive_suffix: POSSESSIVE_SUFFIX.to_string(),
        }
    }
}

/// An ordered list of transformation rules.
///
/// The default list is substitution, insertion, deletion and, when
/// possessives are allowed, the suffix toggle. Every candidate produced by
/// any rule ends up in the same set; the input word itself is never part of
/// the result.
pub struct TransformationGenerator {
    rules: Vec<Box<dyn TransformationRule>>,
}

impl TransformationGenerator {
    /// Build the standard rule list from `options`.
    pub fn new(options: &TransformOptions) -> Self {
        let mut rules: Vec<Box<dyn TransformationRule>> = vec![
            Box::new(Substitution {
                alphabet: options.alphabet.clone(),
            }),
            Box::new(Insertion {
                alphabet: options.alphabet.clone(),
            }),
            Box::new(Deletion),
        ];
        if options.allow_possessives {
            rules.push(Box::new(SuffixToggle {
                suffix: options.possessive_suffix.clone(),
            }));
        }
        Self { rules }
    }

    /// Use an explicit rule list, e.g. to add further suffix toggles.
    pub fn with_rules(rules: Vec<Box<dyn TransformationRule>>) -> Self {
        Self { rules }
    }

    /// Names of the active rules, in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// All strings one step away from `word`.
    ///
    /// Input that is not a valid word (empty, whitespace, control
    /// characters, uppercase) yields an empty set.
    pub fn generate(&self, word: &str) -> HashSet<String> {
        let mut out = HashSet::new();
        if validate(word).is_some() {
            return out;
        }
        let chars: Vec<char> = word.chars().collect();
        for rule in &self.rules {
            rule.apply(&chars, &mut out);
        }
        out.remove(word);
        out
    }
}

impl Default for TransformationGenerator {
    fn default() -> Self {
        Self::new(&TransformOptions::default())
    }
}

/// Candidates for `word` under the default rule list.
pub fn generate_transformations(word: &str) -> HashSet<String> {
    TransformationGenerator::default().generate(word)
}
