// Data handed to a visualization front end: the distance matrix, the
// direct connections, and the component partition, all keyed by the
// vocabulary's stable word order. Layout and rendering happen elsewhere.

use serde::Serialize;

use crate::components::component_ids;
use crate::distance::DistanceMatrix;
use crate::graph::WordGraph;

/// Everything a 2D embedding and plot needs, in one serializable value.
///
/// `distances[i][j]` is `None` when words `i` and `j` are in different
/// components. `edges` and `components` refer to positions in `words`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationData {
    pub words: Vec<String>,
    pub distances: Vec<Vec<Option<u32>>>,
    pub edges: Vec<[usize; 2]>,
    pub components: Vec<Vec<usize>>,
}

impl VisualizationData {
    /// Assemble export data from a graph and its all-pairs matrix.
    ///
    /// The matrix must have been computed from `graph`.
    pub fn new(graph: &WordGraph, matrix: &DistanceMatrix) -> Self {
        let words = graph
            .vocabulary()
            .iter()
            .map(|w| w.as_str().to_string())
            .collect();

        let distances = matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|d| d.steps()).collect())
            .collect();

        let edges = graph.edges().map(|(i, j)| [i, j]).collect();

        let ids = component_ids(graph);
        let count = ids.iter().max().map_or(0, |&m| m + 1);
        let mut components = vec![Vec::new(); count];
        for (i, &id) in ids.iter().enumerate() {
            components[id].push(i);
        }

        Self {
            words,
            distances,
            edges,
            components,
        }
    }

    /// Component index of every word, for coloring.
    pub fn component_of(&self) -> Vec<usize> {
        let mut out = vec![0; self.words.len()];
        for (c, members) in self.components.iter().enumerate() {
            for &i in members {
                out[i] = c;
            }
        }
        out
    }

    /// Distances as `f64`, with unreachable pairs set to `cap`.
    pub fn dense_distances(&self, cap: f64) -> Vec<Vec<f64>> {
        self.distances
            .iter()
            .map(|row| {
                row.iter()
                    .map(|d| d.map_or(cap, |n| f64::from(n).min(cap)))
                    .collect()
            })
            .collect()
    }
}
