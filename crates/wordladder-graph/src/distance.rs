// Shortest-path distances over a WordGraph
//
// Every edge costs one step, so breadth-first search gives exact shortest
// path lengths. Searches use an explicit queue and a visited table, so
// cycles in the graph are harmless and a search never leaves the source's
// connected component.

use std::collections::VecDeque;

use log::{debug, trace};
use wordladder_core::Result;
use wordladder_core::distance::Distance;
use wordladder_core::vocabulary::Vocabulary;
use wordladder_core::word::Word;

use crate::graph::WordGraph;

// ---------------------------------------------------------------------------
// Single-source search
// ---------------------------------------------------------------------------

/// Result of a breadth-first search from one source node.
///
/// `depth[v]` is the shortest distance from the source to `v` (or `None`
/// if unreachable) and `parent[v]` is the node `v` was first discovered
/// from, which yields one shortest path back to the source.
#[derive(Debug, Clone)]
pub struct BfsTree {
    source: usize,
    depth: Vec<Option<u32>>,
    parent: Vec<Option<usize>>,
}

impl BfsTree {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn distance_to(&self, target: usize) -> Distance {
        Distance::from(self.depth[target])
    }

    /// Per-node distances from the source, indexed like the vocabulary.
    pub fn distances(&self) -> Vec<Distance> {
        self.depth.iter().map(|&d| Distance::from(d)).collect()
    }

    /// One shortest path from the source to `target`, both ends included.
    ///
    /// Walks the parent chain back from `target` and reverses it. Returns
    /// `None` if `target` was not reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.depth[target]?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.parent[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Breadth-first search from `source` over the whole component.
///
/// # Panics
///
/// Panics if `source` is not a node index.
pub fn bfs(graph: &WordGraph, source: usize) -> BfsTree {
    let n = graph.node_count();
    let mut depth = vec![None; n];
    let mut parent = vec![None; n];
    let mut queue = VecDeque::new();

    depth[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let du = depth[u].unwrap_or(0);
        for &v in graph.neighbor_indices(u) {
            if depth[v].is_some() {
                continue;
            }
            depth[v] = Some(du + 1);
            parent[v] = Some(u);
            queue.push_back(v);
        }
    }

    trace!(
        "bfs from {:?}: {} nodes reached",
        graph.vocabulary().word(source).as_str(),
        depth.iter().filter(|d| d.is_some()).count()
    );
    BfsTree {
        source,
        depth,
        parent,
    }
}

/// Shortest distance between node indices, stopping as soon as `target`
/// is discovered.
fn bfs_to(graph: &WordGraph, source: usize, target: usize) -> Distance {
    if source == target {
        return Distance::ZERO;
    }
    let mut depth: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    depth[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let du = depth[u].unwrap_or(0);
        for &v in graph.neighbor_indices(u) {
            if depth[v].is_some() {
                continue;
            }
            if v == target {
                return Distance::Steps(du + 1);
            }
            depth[v] = Some(du + 1);
            queue.push_back(v);
        }
    }
    Distance::Unreachable
}

/// Shortest ladder length between two vocabulary words.
///
/// Fails with `WordNotFound` if either word is outside the vocabulary;
/// words in different components give [`Distance::Unreachable`].
pub fn compute_distance(graph: &WordGraph, a: &str, b: &str) -> Result<Distance> {
    let i = graph.vocabulary().require(a)?;
    let j = graph.vocabulary().require(b)?;
    Ok(bfs_to(graph, i, j))
}

// ---------------------------------------------------------------------------
// All pairs
// ---------------------------------------------------------------------------

/// Symmetric matrix of shortest distances between every pair of words.
///
/// Row and column `i` belong to `vocabulary().word(i)`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    vocabulary: Vocabulary,
    rows: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Words in row order.
    pub fn words(&self) -> &[Word] {
        self.vocabulary.words()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance between two words.
    pub fn get(&self, a: &str, b: &str) -> Result<Distance> {
        let i = self.vocabulary.require(a)?;
        let j = self.vocabulary.require(b)?;
        Ok(self.rows[i][j])
    }

    /// Distance between two row indices.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get_index(&self, i: usize, j: usize) -> Distance {
        self.rows[i][j]
    }

    /// All distances from `word`, in row order.
    pub fn row(&self, word: &str) -> Result<&[Distance]> {
        let i = self.vocabulary.require(word)?;
        Ok(&self.rows[i])
    }

    pub fn rows(&self) -> &[Vec<Distance>] {
        &self.rows
    }

    /// Every unordered pair of words with no ladder between them, each pair
    /// once, in row order.
    pub fn unreachable_pairs(&self) -> Vec<(&Word, &Word)> {
        let mut pairs = Vec::new();
        for i in 0..self.rows.len() {
            for j in i + 1..self.rows.len() {
                if !self.rows[i][j].is_reachable() {
                    pairs.push((self.vocabulary.word(i), self.vocabulary.word(j)));
                }
            }
        }
        pairs
    }

    /// Dense `f64` matrix with every entry clamped to `cap`.
    ///
    /// Unreachable pairs become `cap`, which keeps the matrix finite for
    /// embedding algorithms such as multidimensional scaling.
    pub fn to_dense(&self, cap: f64) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|d| d.capped(cap)).collect())
            .collect()
    }

    /// Largest finite distance in the matrix, if any pair is reachable.
    pub fn diameter(&self) -> Option<u32> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().filter_map(|d| d.steps()))
            .max()
    }
}

/// Run one breadth-first search per word and collect every distance.
pub fn compute_all_pairs(graph: &WordGraph) -> DistanceMatrix {
    let rows: Vec<Vec<Distance>> = (0..graph.node_count())
        .map(|source| bfs(graph, source).distances())
        .collect();
    debug!("computed all-pairs distances for {} words", rows.len());
    DistanceMatrix {
        vocabulary: graph.vocabulary().clone(),
        rows,
    }
}
