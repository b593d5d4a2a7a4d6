// LadderHandle: top-level integration point for word ladder queries.
//
// Owns the transformation generator and the word graph built from a
// vocabulary, and answers distance, neighbor, component, bridge and
// ladder queries through one API.
//
// Design notes:
// - The graph is built once at construction and never mutated.
// - The all-pairs distance matrix is computed lazily on first use and then
//   reused; single `distance` queries before that run an early-exit search.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use hashbrown::HashSet;
use log::debug;
use wordladder_core::Result;
use wordladder_core::distance::Distance;
use wordladder_core::vocabulary::Vocabulary;
use wordladder_core::word::Word;

use crate::components::{bridge_words, connected_components};
use crate::distance::{DistanceMatrix, compute_all_pairs, compute_distance};
use crate::export::VisualizationData;
use crate::graph::WordGraph;
use crate::paths::{LadderNode, all_shortest_paths, ladder_tree, shortest_path};
use crate::transform::{TransformOptions, TransformationGenerator};

/// Construction options for [`LadderHandle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LadderOptions {
    pub transform: TransformOptions,
}

/// Owns a vocabulary's word graph and answers queries over it.
pub struct LadderHandle {
    generator: TransformationGenerator,
    graph: WordGraph,
    matrix: OnceCell<DistanceMatrix>,
}

impl LadderHandle {
    /// Build a handle with the default transformation rules.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_options(vocabulary, &LadderOptions::default())
    }

    pub fn with_options(vocabulary: Vocabulary, options: &LadderOptions) -> Self {
        let generator = TransformationGenerator::new(&options.transform);
        Self::with_generator(vocabulary, generator)
    }

    /// Build a handle around a custom rule list.
    pub fn with_generator(vocabulary: Vocabulary, generator: TransformationGenerator) -> Self {
        debug!(
            "building ladder handle over {} words with rules {:?}",
            vocabulary.len(),
            generator.rule_names()
        );
        let graph = WordGraph::build(vocabulary, &generator);
        Self {
            generator,
            graph,
            matrix: OnceCell::new(),
        }
    }

    /// Validate `words` and build a handle with the default rules.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(Vocabulary::from_strs(words)?))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.graph.vocabulary()
    }

    pub fn graph(&self) -> &WordGraph {
        &self.graph
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Shortest ladder length between two vocabulary words.
    pub fn distance(&self, a: &str, b: &str) -> Result<Distance> {
        match self.matrix.get() {
            Some(matrix) => matrix.get(a, b),
            None => compute_distance(&self.graph, a, b),
        }
    }

    /// Vocabulary words exactly one step from `word`.
    pub fn transformations_in_vocabulary(&self, word: &str) -> Result<BTreeSet<Word>> {
        Ok(self.graph.neighbors(word)?.into_iter().cloned().collect())
    }

    /// Raw one-step candidates for any string, without vocabulary filtering.
    pub fn generate_transformations(&self, word: &str) -> HashSet<String> {
        self.generator.generate(word)
    }

    /// Partition of the vocabulary by reachability.
    pub fn connected_components(&self) -> Vec<BTreeSet<Word>> {
        connected_components(&self.graph)
    }

    /// Words whose removal disconnects part of their component.
    pub fn bridge_words(&self) -> BTreeSet<Word> {
        bridge_words(&self.graph)
    }

    /// Every direct connection once, as `(a, b)` with `a < b`.
    pub fn edges(&self) -> Vec<(&Word, &Word)> {
        let vocab = self.graph.vocabulary();
        self.graph
            .edges()
            .map(|(i, j)| (vocab.word(i), vocab.word(j)))
            .collect()
    }

    /// One shortest ladder from `a` to `b`, or `None` if unreachable.
    pub fn shortest_path(&self, a: &str, b: &str) -> Result<Option<Vec<Word>>> {
        shortest_path(&self.graph, a, b)
    }

    /// Every shortest ladder from `a` to `b`.
    pub fn all_shortest_paths(&self, a: &str, b: &str) -> Result<Vec<Vec<Word>>> {
        all_shortest_paths(&self.graph, a, b)
    }

    /// Words within `max_depth` steps of `start` and their shortest ladders.
    pub fn ladder_tree(&self, start: &str, max_depth: u32) -> Result<Vec<LadderNode>> {
        ladder_tree(&self.graph, start, max_depth)
    }

    /// All-pairs distances, computed on first call.
    pub fn distance_matrix(&self) -> &DistanceMatrix {
        self.matrix.get_or_init(|| compute_all_pairs(&self.graph))
    }

    /// Matrix, edges and components for a visualization front end.
    pub fn visualization_data(&self) -> VisualizationData {
        VisualizationData::new(&self.graph, self.distance_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordladder_core::LadderError;

    #[test]
    fn distance_before_and_after_matrix() {
        let handle = LadderHandle::from_words(["cat", "cut", "cute", "zebra"]).unwrap();
        assert_eq!(handle.distance("cat", "cute").unwrap(), Distance::Steps(2));
        let _ = handle.distance_matrix();
        assert_eq!(handle.distance("cat", "cute").unwrap(), Distance::Steps(2));
        assert_eq!(handle.distance("cat", "zebra").unwrap(), Distance::Unreachable);
        assert!(matches!(
            handle.distance("cat", "dog"),
            Err(LadderError::WordNotFound(_))
        ));
    }

    #[test]
    fn options_disable_possessives() {
        let options = LadderOptions {
            transform: TransformOptions {
                allow_possessives: false,
                ..TransformOptions::default()
            },
        };
        let vocab = Vocabulary::from_strs(["cat", "cat's"]).unwrap();
        let handle = LadderHandle::with_options(vocab, &options);
        assert_eq!(handle.distance("cat", "cat's").unwrap(), Distance::Unreachable);

        let handle = LadderHandle::from_words(["cat", "cat's"]).unwrap();
        assert_eq!(handle.distance("cat", "cat's").unwrap(), Distance::Steps(1));
    }

    #[test]
    fn edges_by_word() {
        let handle = LadderHandle::from_words(["cat", "cut", "bat"]).unwrap();
        let edges: Vec<(&str, &str)> = handle
            .edges()
            .into_iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(edges, [("bat", "cat"), ("cat", "cut")]);
    }

    #[test]
    fn generate_transformations_ignores_vocabulary() {
        let handle = LadderHandle::from_words(["cat"]).unwrap();
        let out = handle.generate_transformations("dog");
        assert!(out.contains("dot"));
        assert!(out.contains("dog's"));
    }
}
