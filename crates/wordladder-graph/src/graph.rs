// WordGraph: undirected adjacency over vocabulary indices
//
// Nodes are vocabulary indices. An edge joins two words when either one
// appears among the other's generated candidates; edges are inserted in
// both directions so the graph is symmetric even if a rule list is not.

use log::debug;
use wordladder_core::Result;
use wordladder_core::vocabulary::Vocabulary;
use wordladder_core::word::Word;

use crate::transform::TransformationGenerator;

/// Undirected graph whose nodes are the words of a vocabulary.
///
/// Built once and read-only afterward. Neighbor lists are sorted by index,
/// which is also lexicographic word order.
#[derive(Debug, Clone)]
pub struct WordGraph {
    vocabulary: Vocabulary,
    adjacency: Vec<Vec<usize>>,
}

impl WordGraph {
    /// Build the graph by generating candidates for every word and keeping
    /// those present in the vocabulary.
    ///
    /// Cost is one candidate generation per word plus one hashed lookup per
    /// candidate, so no pairwise comparison of vocabulary words is done.
    pub fn build(vocabulary: Vocabulary, generator: &TransformationGenerator) -> Self {
        let n = vocabulary.len();
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (i, word) in vocabulary.iter().enumerate() {
            for candidate in generator.generate(word.as_str()) {
                let Some(j) = vocabulary.index_of(&candidate) else {
                    continue;
                };
                if j == i {
                    continue;
                }
                adjacency[i].push(j);
                adjacency[j].push(i);
            }
        }

        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        let graph = Self {
            vocabulary,
            adjacency,
        };
        debug!(
            "built word graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbor indices of node `i`, sorted ascending.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not a node index.
    pub fn neighbor_indices(&self, i: usize) -> &[usize] {
        &self.adjacency[i]
    }

    /// Vocabulary words one step away from `word`, in lexicographic order.
    pub fn neighbors(&self, word: &str) -> Result<Vec<&Word>> {
        let i = self.vocabulary.require(word)?;
        Ok(self.adjacency[i]
            .iter()
            .map(|&j| self.vocabulary.word(j))
            .collect())
    }

    /// Whether `a` and `b` are joined by an edge.
    pub fn are_adjacent(&self, a: &str, b: &str) -> Result<bool> {
        let i = self.vocabulary.require(a)?;
        let j = self.vocabulary.require(b)?;
        Ok(self.adjacency[i].binary_search(&j).is_ok())
    }

    pub fn degree(&self, i: usize) -> usize {
        self.adjacency[i].len()
    }

    /// Every undirected edge once, as `(i, j)` with `i < j`, in index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }
}

/// Build a graph with the default transformation rules.
pub fn build_graph(vocabulary: Vocabulary) -> WordGraph {
    WordGraph::build(vocabulary, &TransformationGenerator::default())
}
