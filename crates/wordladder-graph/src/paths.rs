// Ladder reconstruction: one shortest ladder, every shortest ladder, and
// depth-limited ladder trees rooted at a start word.

use std::collections::VecDeque;

use wordladder_core::Result;
use wordladder_core::word::Word;

use crate::distance::bfs;
use crate::graph::WordGraph;

/// A word reached from the root of a ladder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderNode {
    pub word: Word,
    /// Steps from the start word.
    pub depth: u32,
    /// Every shortest ladder from the start word to `word`, both ends
    /// included, in lexicographic order.
    pub paths: Vec<Vec<Word>>,
}

/// Shortest-path predecessor DAG from one source.
///
/// `preds[v]` lists every neighbor of `v` that lies one step closer to the
/// source, so each shortest path to `v` ends with an edge from one of them.
struct PredecessorDag {
    depth: Vec<Option<u32>>,
    preds: Vec<Vec<usize>>,
}

impl PredecessorDag {
    /// Search from `source`, expanding nodes only while their depth is below
    /// `max_depth`.
    fn build(graph: &WordGraph, source: usize, max_depth: u32) -> Self {
        let n = graph.node_count();
        let mut depth = vec![None; n];
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut queue = VecDeque::new();

        depth[source] = Some(0);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            let du = depth[u].unwrap_or(0);
            if du >= max_depth {
                continue;
            }
            for &v in graph.neighbor_indices(u) {
                match depth[v] {
                    None => {
                        depth[v] = Some(du + 1);
                        preds[v].push(u);
                        queue.push_back(v);
                    }
                    Some(dv) if dv == du + 1 => preds[v].push(u),
                    Some(_) => {}
                }
            }
        }

        Self { depth, preds }
    }

    /// Every shortest path from the source to `target`, as index sequences
    /// sorted lexicographically. Output size is the number of shortest
    /// paths, which is exponential in the depth in the worst case.
    fn paths_to(&self, target: usize) -> Vec<Vec<usize>> {
        if self.depth[target].is_none() {
            return Vec::new();
        }
        let mut out = Vec::new();
        // Partial paths are stored target-first and reversed when complete.
        let mut stack: Vec<Vec<usize>> = vec![vec![target]];
        while let Some(partial) = stack.pop() {
            let Some(&last) = partial.last() else {
                continue;
            };
            if self.preds[last].is_empty() {
                let mut path = partial;
                path.reverse();
                out.push(path);
                continue;
            }
            for &p in &self.preds[last] {
                let mut next = partial.clone();
                next.push(p);
                stack.push(next);
            }
        }
        out.sort();
        out
    }
}

fn to_words(graph: &WordGraph, path: &[usize]) -> Vec<Word> {
    path.iter()
        .map(|&i| graph.vocabulary().word(i).clone())
        .collect()
}

/// One shortest ladder from `a` to `b`, both ends included.
///
/// Returns `Ok(None)` if no ladder exists and `[a]` if `a == b`.
pub fn shortest_path(graph: &WordGraph, a: &str, b: &str) -> Result<Option<Vec<Word>>> {
    let i = graph.vocabulary().require(a)?;
    let j = graph.vocabulary().require(b)?;
    Ok(bfs(graph, i).path_to(j).map(|path| to_words(graph, &path)))
}

/// Every distinct shortest ladder from `a` to `b`, in lexicographic order.
///
/// Empty if no ladder exists. The result is not truncated: on dense
/// vocabularies the number of shortest ladders grows exponentially with
/// the distance, so prefer [`shortest_path`] when one ladder is enough.
pub fn all_shortest_paths(graph: &WordGraph, a: &str, b: &str) -> Result<Vec<Vec<Word>>> {
    let i = graph.vocabulary().require(a)?;
    let j = graph.vocabulary().require(b)?;
    let dag = PredecessorDag::build(graph, i, u32::MAX);
    Ok(dag
        .paths_to(j)
        .iter()
        .map(|path| to_words(graph, path))
        .collect())
}

/// Every word within `max_depth` steps of `start`, with all of its shortest
/// ladders from `start`.
///
/// Nodes are ordered by depth, then by word. The start word is always the
/// first node, at depth 0 with the single ladder `[start]`. Each node carries
/// every shortest ladder (see [`all_shortest_paths`]), so keep `max_depth`
/// small on dense vocabularies.
pub fn ladder_tree(graph: &WordGraph, start: &str, max_depth: u32) -> Result<Vec<LadderNode>> {
    let source = graph.vocabulary().require(start)?;
    let dag = PredecessorDag::build(graph, source, max_depth);

    let mut reached: Vec<(u32, usize)> = dag
        .depth
        .iter()
        .enumerate()
        .filter_map(|(i, d)| d.map(|d| (d, i)))
        .collect();
    reached.sort_unstable();

    Ok(reached
        .into_iter()
        .map(|(depth, i)| LadderNode {
            word: graph.vocabulary().word(i).clone(),
            depth,
            paths: dag
                .paths_to(i)
                .iter()
                .map(|path| to_words(graph, path))
                .collect(),
        })
        .collect())
}
