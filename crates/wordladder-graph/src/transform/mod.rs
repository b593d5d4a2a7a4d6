// Transformation generation module
//
// Produces every string one step away from a word by applying a small,
// explicit list of rules. Candidates are not checked against any
// vocabulary here; the graph builder filters them.
//
// Architecture:
//   - `rules`: individual edit rules (TransformationRule trait)
//   - `generator`: ordered rule list built from TransformOptions

pub mod generator;
pub mod rules;

pub use generator::{TransformOptions, TransformationGenerator, generate_transformations};
pub use rules::{Deletion, Insertion, Substitution, SuffixToggle, TransformationRule};
