//! Word ladder graphs and shortest-path distances over a closed vocabulary.
//!
//! Two vocabulary words are one step apart when one can be turned into the
//! other by a single transformation rule (substitute, insert or delete a
//! letter, or toggle the possessive suffix). The distance between two words
//! is the length of the shortest ladder of such steps, staying inside the
//! vocabulary the whole way.
//!
//! # Architecture
//!
//! - [`transform`] -- transformation rules and the generator that composes them
//! - [`graph`] -- undirected adjacency over vocabulary indices
//! - [`distance`] -- breadth-first search, single-pair and all-pairs distances
//! - [`paths`] -- ladder reconstruction (one or all shortest ladders, ladder trees)
//! - [`components`] -- connected components and bridge words
//! - [`export`] -- distance matrix, edges and components for a visualization front end
//! - [`handle`] -- `LadderHandle`, a single owner for all of the above

pub mod distance;
pub mod graph;
pub mod transform;

#[cfg(feature = "components")]
pub mod components;
#[cfg(feature = "export")]
pub mod export;
#[cfg(feature = "handle")]
pub mod handle;
#[cfg(feature = "paths")]
pub mod paths;

pub use distance::{DistanceMatrix, compute_all_pairs, compute_distance};
pub use graph::{WordGraph, build_graph};
pub use transform::{TransformOptions, TransformationGenerator, generate_transformations};
pub use wordladder_core::distance::Distance;
pub use wordladder_core::vocabulary::Vocabulary;
pub use wordladder_core::word::Word;
pub use wordladder_core::{LadderError, Result};
