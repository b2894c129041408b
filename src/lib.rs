// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

//! Entity-item bipartite graphs for recommendation experiments.
//!
//! This crate provides the graph substrate such experiments run on:
//!
//! - [`BipartiteGraph`] - two disjoint node kinds (entities and items)
//!   with weighted edges, neighbor queries, and weighted random
//!   neighbor draws
//! - [`GraphLoader`] - construction strategies: a fixed fixture
//!   ([`FixedTopologyLoader`]), a randomized generator
//!   ([`RandomBipartiteLoader`]), and persisted-dataset restores
//!   ([`DatasetLoader`] and its named variants)
//! - [`sampling`] - the weighted draw primitive
//! - binary persistence as a topology file plus a `.ei_meta` weight
//!   sidecar that round-trips the graph exactly
//!
//! Node kind is encoded in the id: entities are odd ids starting at 1,
//! items are even ids starting at 2.
//!
//! # Example
//!
//! ```rust
//! use eigraph::{BipartiteGraph, FixedTopologyLoader, GraphLoader};
//!
//! let mut g = FixedTopologyLoader.load().unwrap();
//!
//! let alice = g.add_entity();
//! let book = g.add_item();
//! g.add_edge_weighted(alice, book, 2.0).unwrap();
//!
//! let mut neighbors = g.get_neighbors(1);
//! neighbors.sort_unstable();
//! assert_eq!(neighbors, vec![2, 4, 6]);
//! ```
//!
//! # Consumers
//!
//! Recommenders and experiment harnesses live outside this crate. A
//! recommender needs only the read/sample surface - [`get_entities`],
//! [`get_items`], [`get_neighbors`], [`get_random_neighbor`],
//! [`get_edge_weight`] - and exposes its own
//! `recommend(entity_id, number_of_items)` on top of it; harnesses
//! drive [`GraphLoader::load`] and the recommenders.
//!
//! One graph instance is owned and mutated by a single logical caller;
//! there is no internal synchronization.
//!
//! [`get_entities`]: BipartiteGraph::get_entities
//! [`get_items`]: BipartiteGraph::get_items
//! [`get_neighbors`]: BipartiteGraph::get_neighbors
//! [`get_random_neighbor`]: BipartiteGraph::get_random_neighbor
//! [`get_edge_weight`]: BipartiteGraph::get_edge_weight

mod error;
mod graph;
pub mod loader;
mod node;
pub mod sampling;

pub use error::{Error, Result};
pub use graph::{BipartiteGraph, GraphStats};
pub use loader::{
    BeerAdvocateLoader, DatasetLoader, FixedTopologyLoader, GraphLoader, MovielensLoader,
    RandomBipartiteLoader,
};
pub use node::{is_entity, is_item, NodeId, NodeKind};
pub use sampling::{uniform_choice, weighted_choice};

// Re-export petgraph for advanced graph operations
pub use petgraph;
