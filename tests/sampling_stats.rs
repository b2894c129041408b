//! Statistical behavior of the random draw paths.
//!
//! Seeded generators keep these deterministic; tolerances are wide
//! enough that any healthy seed passes.

use eigraph::{BipartiteGraph, GraphLoader, RandomBipartiteLoader};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::collections::HashMap;

const DRAWS: usize = 100_000;
const TOLERANCE: f64 = 0.02;

fn empirical_frequencies<F: FnMut() -> u64>(mut draw: F) -> HashMap<u64, f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for _ in 0..DRAWS {
        *counts.entry(draw()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(value, count)| (value, count as f64 / DRAWS as f64))
        .collect()
}

#[test]
fn weighted_choice_converges_to_weight_proportions() {
    let values = [2u64, 4, 6];
    let weights = [1.0, 2.0, 7.0];
    let mut rng = XorShiftRng::seed_from_u64(1234);

    let freq = empirical_frequencies(|| {
        eigraph::weighted_choice(&values, &weights, 10.0, &mut rng)
    });

    assert!((freq[&2] - 0.1).abs() < TOLERANCE, "freq: {freq:?}");
    assert!((freq[&4] - 0.2).abs() < TOLERANCE, "freq: {freq:?}");
    assert!((freq[&6] - 0.7).abs() < TOLERANCE, "freq: {freq:?}");
}

#[test]
fn weighted_neighbor_draws_follow_edge_weights() {
    let mut g = BipartiteGraph::with_nodes(1, 3);
    g.add_edge_weighted(1, 2, 1.0).unwrap();
    g.add_edge_weighted(1, 4, 3.0).unwrap();
    g.add_edge_weighted(1, 6, 6.0).unwrap();

    let mut rng = XorShiftRng::seed_from_u64(99);
    let freq = empirical_frequencies(|| g.get_random_neighbor(1, true, &mut rng).unwrap());

    assert!((freq[&2] - 0.1).abs() < TOLERANCE, "freq: {freq:?}");
    assert!((freq[&4] - 0.3).abs() < TOLERANCE, "freq: {freq:?}");
    assert!((freq[&6] - 0.6).abs() < TOLERANCE, "freq: {freq:?}");
}

#[test]
fn unweighted_neighbor_draws_are_uniform() {
    let mut g = BipartiteGraph::with_nodes(1, 4);
    for item in [2, 4, 6, 8] {
        // Skewed weights must not influence the unweighted path.
        g.add_edge_weighted(1, item, item as f64 * 10.0).unwrap();
    }

    let mut rng = XorShiftRng::seed_from_u64(7);
    let freq = empirical_frequencies(|| g.get_random_neighbor(1, false, &mut rng).unwrap());

    for item in [2u64, 4, 6, 8] {
        assert!((freq[&item] - 0.25).abs() < TOLERANCE, "freq: {freq:?}");
    }
}

#[test]
fn random_loader_spreads_edges_over_valid_pairs() {
    let g = RandomBipartiteLoader::new(20, 50, 60)
        .unwrap()
        .with_seed(4242)
        .load()
        .unwrap();

    assert_eq!(g.node_count(), 70);
    assert_eq!(g.edge_count(), 60);
    for (entity, item) in g.edges() {
        assert!(eigraph::is_entity(entity));
        assert!(eigraph::is_item(item));
        assert!(g.has_entity(entity).unwrap());
        assert!(g.has_item(item).unwrap());
    }
}
