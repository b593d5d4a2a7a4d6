// Connected components and bridge words (articulation points)

use std::collections::{BTreeSet, VecDeque};

use log::debug;
use wordladder_core::word::Word;

use crate::graph::WordGraph;

/// Component id of every node, indexed like the vocabulary.
///
/// Ids are assigned in order of each component's smallest member, so
/// component 0 always contains word 0.
pub fn component_ids(graph: &WordGraph) -> Vec<usize> {
    let n = graph.node_count();
    let mut ids = vec![usize::MAX; n];
    let mut next_id = 0;
    let mut queue = VecDeque::new();

    for root in 0..n {
        if ids[root] != usize::MAX {
            continue;
        }
        ids[root] = next_id;
        queue.push_back(root);
        while let Some(u) = queue.pop_front() {
            for &v in graph.neighbor_indices(u) {
                if ids[v] == usize::MAX {
                    ids[v] = next_id;
                    queue.push_back(v);
                }
            }
        }
        next_id += 1;
    }

    debug!("found {next_id} connected components among {n} words");
    ids
}

/// Partition of the vocabulary by reachability.
///
/// Components are ordered by their smallest member. A word with no
/// neighbors forms a component of its own.
pub fn connected_components(graph: &WordGraph) -> Vec<BTreeSet<Word>> {
    let ids = component_ids(graph);
    let count = ids.iter().max().map_or(0, |&m| m + 1);
    let mut components = vec![BTreeSet::new(); count];
    for (i, &id) in ids.iter().enumerate() {
        components[id].insert(graph.vocabulary().word(i).clone());
    }
    components
}

/// Words whose removal splits their component into more pieces.
///
/// Uses the low-link depth-first search with an explicit stack of
/// `(node, next neighbor position)` frames instead of recursion.
pub fn bridge_words(graph: &WordGraph) -> BTreeSet<Word> {
    let n = graph.node_count();
    // Discovery time 0 means "not visited yet".
    let mut disc = vec![0u32; n];
    let mut low = vec![0u32; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut is_bridge = vec![false; n];
    let mut timer = 1u32;
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if disc[root] != 0 {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;
        let mut root_children = 0;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let u = frame.0;
            let neighbors = graph.neighbor_indices(u);
            if frame.1 < neighbors.len() {
                let v = neighbors[frame.1];
                frame.1 += 1;
                if disc[v] == 0 {
                    parent[v] = Some(u);
                    disc[v] = timer;
                    low[v] = timer;
                    timer += 1;
                    if u == root {
                        root_children += 1;
                    }
                    stack.push((v, 0));
                } else if parent[u] != Some(v) {
                    low[u] = low[u].min(disc[v]);
                }
            } else {
                stack.pop();
                if let Some(p) = parent[u] {
                    low[p] = low[p].min(low[u]);
                    if p != root && low[u] >= disc[p] {
                        is_bridge[p] = true;
                    }
                }
            }
        }

        if root_children > 1 {
            is_bridge[root] = true;
        }
    }

    is_bridge
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b)
        .map(|(i, _)| graph.vocabulary().word(i).clone())
        .collect()
}
