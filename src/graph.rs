//! Entity-item bipartite graph.

use crate::node::{is_entity, is_item, order_ei, NodeId, NodeKind};
use crate::sampling::{uniform_choice, weighted_choice};
use crate::{Error, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Suffix of the weight sidecar written next to every topology file.
const META_SUFFIX: &str = ".ei_meta";

/// A bipartite graph over two disjoint node kinds, entities and items.
///
/// Uses petgraph's undirected graph internally for the node and edge
/// structure; edge weights live in a separate map keyed by canonical
/// (entity, item) pairs. Node kind is encoded in the id (see
/// [`NodeKind`]), so every edge connects exactly one entity and one
/// item, and the weight map's domain always equals the edge set.
///
/// # Example
///
/// ```rust
/// use eigraph::BipartiteGraph;
///
/// let mut g = BipartiteGraph::new();
/// let alice = g.add_entity();
/// let book = g.add_item();
///
/// g.add_edge_weighted(alice, book, 2.0).unwrap();
/// assert!(g.is_edge(alice, book));
/// assert_eq!(g.get_edge_weight(book, alice).unwrap(), 2.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BipartiteGraph {
    /// The underlying undirected graph; node payload is the external id.
    graph: UnGraph<NodeId, ()>,

    /// Map from external id to node index.
    #[serde(skip)]
    node_index: HashMap<NodeId, NodeIndex>,

    /// Canonical (entity, item) pair -> edge weight.
    ///
    /// Persisted in the sidecar artifact, never with the topology.
    #[serde(skip)]
    weights: HashMap<(NodeId, NodeId), f64>,

    /// Live entity count; drives entity id allocation.
    #[serde(skip)]
    entity_count: usize,

    /// Live item count; drives item id allocation.
    #[serde(skip)]
    item_count: usize,
}

impl Default for BipartiteGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl BipartiteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            node_index: HashMap::new(),
            weights: HashMap::new(),
            entity_count: 0,
            item_count: 0,
        }
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            node_index: HashMap::with_capacity(nodes),
            weights: HashMap::with_capacity(edges),
            entity_count: 0,
            item_count: 0,
        }
    }

    /// Create a graph pre-seeded with `num_entities` entities and
    /// `num_items` items, with no edges.
    pub fn with_nodes(num_entities: usize, num_items: usize) -> Self {
        let mut graph = Self::with_capacity(num_entities + num_items, 0);
        for _ in 0..num_entities {
            graph.add_entity();
        }
        for _ in 0..num_items {
            graph.add_item();
        }
        graph
    }

    /// Add an entity and return its id.
    ///
    /// Ids are allocated monotonically over the odd numbers: the first
    /// entity is 1, the second 3, and so on. Nodes are never removed, so
    /// an id is never reused.
    pub fn add_entity(&mut self) -> NodeId {
        let id = 2 * self.entity_count as NodeId + 1;
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        self.entity_count += 1;
        id
    }

    /// Add an item and return its id.
    ///
    /// Ids are allocated monotonically over the even numbers starting
    /// at 2.
    pub fn add_item(&mut self) -> NodeId {
        let id = 2 * (self.item_count as NodeId + 1);
        let idx = self.graph.add_node(id);
        self.node_index.insert(id, idx);
        self.item_count += 1;
        id
    }

    /// Add an edge between an entity and an item with weight 1.
    ///
    /// See [`add_edge_weighted`](Self::add_edge_weighted).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.add_edge_weighted(a, b, 1.0)
    }

    /// Add an edge between an entity and an item with the given weight.
    ///
    /// The pair may be given in either order. Fails with
    /// [`Error::InvalidEdge`] when the two ids are of the same kind or
    /// either endpoint is not a live node. Re-adding an existing edge
    /// overwrites its weight.
    pub fn add_edge_weighted(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        let (Some(&ia), Some(&ib)) = (self.node_index.get(&a), self.node_index.get(&b)) else {
            return Err(Error::InvalidEdge { a, b });
        };
        if is_entity(a) == is_entity(b) {
            return Err(Error::InvalidEdge { a, b });
        }

        self.weights.insert(order_ei(a, b), weight);
        self.graph.update_edge(ia, ib, ());
        Ok(())
    }

    /// Remove the edge between `a` and `b` together with its weight.
    ///
    /// Fails with [`Error::EdgeNotFound`] when the pair is not currently
    /// an edge (same-kind pairs never are).
    pub fn del_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        if !self.is_edge(a, b) {
            return Err(Error::EdgeNotFound { a, b });
        }
        // is_edge established both endpoints and the edge itself.
        let ia = self.node_index[&a];
        let ib = self.node_index[&b];
        let edge = self
            .graph
            .find_edge(ia, ib)
            .ok_or(Error::EdgeNotFound { a, b })?;
        self.graph.remove_edge(edge);
        self.weights.remove(&order_ei(a, b));
        Ok(())
    }

    /// Returns whether there is an edge between `a` and `b`.
    ///
    /// O(1). Same-kind or unknown ids simply yield `false`.
    pub fn is_edge(&self, a: NodeId, b: NodeId) -> bool {
        if is_entity(a) == is_entity(b) {
            return false;
        }
        self.weights.contains_key(&order_ei(a, b))
    }

    /// Return the weight of the edge between `a` and `b`.
    pub fn get_edge_weight(&self, a: NodeId, b: NodeId) -> Result<f64> {
        if is_entity(a) == is_entity(b) {
            return Err(Error::EdgeNotFound { a, b });
        }
        self.weights
            .get(&order_ei(a, b))
            .copied()
            .ok_or(Error::EdgeNotFound { a, b })
    }

    /// All live entity ids, unordered.
    pub fn get_entities(&self) -> HashSet<NodeId> {
        self.graph
            .node_weights()
            .copied()
            .filter(|&id| is_entity(id))
            .collect()
    }

    /// All live item ids, unordered.
    pub fn get_items(&self) -> HashSet<NodeId> {
        self.graph
            .node_weights()
            .copied()
            .filter(|&id| is_item(id))
            .collect()
    }

    /// All nodes connected to `node`, in no meaningful order.
    ///
    /// Unknown nodes have no neighbors.
    pub fn get_neighbors(&self, node: NodeId) -> Vec<NodeId> {
        match self.node_index.get(&node) {
            Some(&idx) => self.graph.neighbors(idx).map(|n| self.graph[n]).collect(),
            None => vec![],
        }
    }

    /// Draw a random neighbor of `node`.
    ///
    /// With `use_weights`, the draw is proportional to each incident
    /// edge's weight; otherwise uniform. O(degree) per call either way,
    /// since weighted draws read every incident weight. Callers that
    /// repeatedly draw from the same node should gather the
    /// neighbor/weight arrays once and use
    /// [`weighted_choice`](crate::sampling::weighted_choice) directly.
    ///
    /// Fails with [`Error::EmptyNeighborhood`] when `node` has no edges.
    pub fn get_random_neighbor<R: Rng + ?Sized>(
        &self,
        node: NodeId,
        use_weights: bool,
        rng: &mut R,
    ) -> Result<NodeId> {
        let neighbors = self.get_neighbors(node);
        if neighbors.is_empty() {
            return Err(Error::EmptyNeighborhood { node });
        }
        if !use_weights {
            return Ok(uniform_choice(&neighbors, rng));
        }

        let mut weights = Vec::with_capacity(neighbors.len());
        let mut weight_sum = 0.0;
        for &neighbor in &neighbors {
            let weight = self.get_edge_weight(node, neighbor)?;
            weight_sum += weight;
            weights.push(weight);
        }
        Ok(weighted_choice(&neighbors, &weights, weight_sum, rng))
    }

    /// Returns whether the graph contains the entity `entity_id`.
    ///
    /// Fails with [`Error::KindMismatch`] when `entity_id` is not an
    /// entity id at all.
    pub fn has_entity(&self, entity_id: NodeId) -> Result<bool> {
        if !is_entity(entity_id) {
            return Err(Error::KindMismatch {
                id: entity_id,
                expected: NodeKind::Entity,
            });
        }
        Ok(self.node_index.contains_key(&entity_id))
    }

    /// Returns whether the graph contains the item `item_id`.
    ///
    /// Fails with [`Error::KindMismatch`] when `item_id` is not an item
    /// id at all.
    pub fn has_item(&self, item_id: NodeId) -> Result<bool> {
        if !is_item(item_id) {
            return Err(Error::KindMismatch {
                id: item_id,
                expected: NodeKind::Item,
            });
        }
        Ok(self.node_index.contains_key(&item_id))
    }

    /// Degree of a node. Unknown nodes have degree 0.
    pub fn degree(&self, node: NodeId) -> usize {
        match self.node_index.get(&node) {
            Some(&idx) => self.graph.neighbors(idx).count(),
            None => 0,
        }
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Number of live items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over all edges as canonical (entity, item) pairs.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.weights.keys().copied()
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &UnGraph<NodeId, ()> {
        &self.graph
    }

    /// Save this graph in binary form to `path`.
    ///
    /// Two artifacts are written: the node and edge structure at `path`,
    /// and the edge weights in a sidecar at `path + ".ei_meta"`. The two
    /// writes are not atomic; a failure between them leaves a pair that
    /// [`load`](Self::load) will reject.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self).map_err(|e| {
            Error::PersistenceFormat(format!(
                "failed to encode topology {}: {e}",
                path.display()
            ))
        })?;

        let meta_path = meta_filename(path);
        let file = File::create(&meta_path)?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, &self.weights).map_err(|e| {
            Error::PersistenceFormat(format!(
                "failed to encode weight sidecar {}: {e}",
                meta_path.display()
            ))
        })?;

        tracing::debug!(
            path = %path.display(),
            nodes = self.node_count(),
            edges = self.edge_count(),
            "saved graph"
        );
        Ok(())
    }

    /// Load a graph previously written by [`save`](Self::save).
    ///
    /// Reads both artifacts and fails with [`Error::PersistenceFormat`]
    /// when either is missing or truncated, or when the sidecar's key
    /// set does not exactly match the topology's edge set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::PersistenceFormat(format!(
                "cannot open topology file {}: {e}",
                path.display()
            ))
        })?;
        let reader = BufReader::new(file);
        let mut graph: Self = bincode::deserialize_from(reader).map_err(|e| {
            Error::PersistenceFormat(format!(
                "cannot decode topology file {}: {e}",
                path.display()
            ))
        })?;
        graph.rebuild_indexes()?;

        let meta_path = meta_filename(path);
        let file = File::open(&meta_path).map_err(|e| {
            Error::PersistenceFormat(format!(
                "cannot open weight sidecar {}: {e}",
                meta_path.display()
            ))
        })?;
        let reader = BufReader::new(file);
        graph.weights = bincode::deserialize_from(reader).map_err(|e| {
            Error::PersistenceFormat(format!(
                "cannot decode weight sidecar {}: {e}",
                meta_path.display()
            ))
        })?;
        graph.check_weight_domain()?;

        tracing::debug!(
            path = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }

    /// Rebuild the id index and kind counts after deserialization.
    fn rebuild_indexes(&mut self) -> Result<()> {
        self.node_index.clear();
        self.entity_count = 0;
        self.item_count = 0;

        for idx in self.graph.node_indices() {
            let id = self.graph[idx];
            match NodeKind::of(id) {
                Some(NodeKind::Entity) => self.entity_count += 1,
                Some(NodeKind::Item) => self.item_count += 1,
                None => {
                    return Err(Error::PersistenceFormat(format!(
                        "restored node id {id} has no kind"
                    )));
                }
            }
            if self.node_index.insert(id, idx).is_some() {
                return Err(Error::PersistenceFormat(format!(
                    "restored node id {id} appears twice"
                )));
            }
        }
        Ok(())
    }

    /// Check that the restored weight map covers exactly the edge set.
    fn check_weight_domain(&self) -> Result<()> {
        if self.weights.len() != self.graph.edge_count() {
            return Err(Error::PersistenceFormat(format!(
                "weight sidecar covers {} edges but topology has {}",
                self.weights.len(),
                self.graph.edge_count()
            )));
        }
        for edge in self.graph.edge_indices() {
            let (ia, ib) = self
                .graph
                .edge_endpoints(edge)
                .ok_or_else(|| Error::PersistenceFormat("dangling edge in topology".into()))?;
            let (a, b) = (self.graph[ia], self.graph[ib]);
            if is_entity(a) == is_entity(b) {
                return Err(Error::PersistenceFormat(format!(
                    "restored edge ({a}, {b}) connects two nodes of the same kind"
                )));
            }
            if !self.weights.contains_key(&order_ei(a, b)) {
                return Err(Error::PersistenceFormat(format!(
                    "restored edge ({a}, {b}) has no weight entry"
                )));
            }
        }
        Ok(())
    }

    /// Compute statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        let entity_count = self.entity_count;
        let item_count = self.item_count;
        let edge_count = self.edge_count();

        let avg_entity_degree = if entity_count > 0 {
            edge_count as f64 / entity_count as f64
        } else {
            0.0
        };

        GraphStats {
            entity_count,
            item_count,
            edge_count,
            avg_entity_degree,
        }
    }
}

/// Path of the weight sidecar belonging to a topology file.
fn meta_filename(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(META_SUFFIX);
    PathBuf::from(name)
}

/// Statistics about a bipartite graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphStats {
    /// Number of live entities.
    pub entity_count: usize,
    /// Number of live items.
    pub item_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Average number of edges per entity.
    pub avg_entity_degree: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn test_id_allocation() {
        let mut g = BipartiteGraph::new();
        assert_eq!(g.add_entity(), 1);
        assert_eq!(g.add_entity(), 3);
        assert_eq!(g.add_item(), 2);
        assert_eq!(g.add_item(), 4);
        assert_eq!(g.add_entity(), 5);

        assert_eq!(g.entity_count(), 3);
        assert_eq!(g.item_count(), 2);
        assert_eq!(g.node_count(), 5);
    }

    #[test]
    fn test_with_nodes() {
        let g = BipartiteGraph::with_nodes(6, 5);
        let entities: HashSet<NodeId> = [1, 3, 5, 7, 9, 11].into_iter().collect();
        let items: HashSet<NodeId> = [2, 4, 6, 8, 10].into_iter().collect();
        assert_eq!(g.get_entities(), entities);
        assert_eq!(g.get_items(), items);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_either_order() {
        let mut g = BipartiteGraph::with_nodes(1, 1);
        g.add_edge(2, 1).unwrap();

        assert!(g.is_edge(1, 2));
        assert!(g.is_edge(2, 1));
        assert_eq!(g.get_edge_weight(1, 2).unwrap(), 1.0);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_same_kind_rejected() {
        let mut g = BipartiteGraph::with_nodes(2, 2);

        assert!(matches!(
            g.add_edge(1, 3),
            Err(Error::InvalidEdge { a: 1, b: 3 })
        ));
        assert!(matches!(g.add_edge(2, 4), Err(Error::InvalidEdge { .. })));
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn test_add_edge_dead_endpoint_rejected() {
        let mut g = BipartiteGraph::with_nodes(1, 1);

        // 4 and 0 were never allocated.
        assert!(matches!(g.add_edge(1, 4), Err(Error::InvalidEdge { .. })));
        assert!(matches!(g.add_edge(0, 1), Err(Error::InvalidEdge { .. })));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_readd_overwrites_weight() {
        let mut g = BipartiteGraph::with_nodes(1, 1);
        g.add_edge_weighted(1, 2, 1.0).unwrap();
        g.add_edge_weighted(2, 1, 5.0).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.get_edge_weight(1, 2).unwrap(), 5.0);
    }

    #[test]
    fn test_del_edge() {
        let mut g = BipartiteGraph::with_nodes(1, 2);
        g.add_edge(1, 2).unwrap();
        g.add_edge(1, 4).unwrap();

        g.del_edge(2, 1).unwrap();
        assert!(!g.is_edge(1, 2));
        assert!(matches!(
            g.get_edge_weight(1, 2),
            Err(Error::EdgeNotFound { .. })
        ));
        assert!(g.is_edge(1, 4));
        assert_eq!(g.edge_count(), 1);

        assert!(matches!(g.del_edge(1, 2), Err(Error::EdgeNotFound { .. })));
        assert!(matches!(g.del_edge(1, 3), Err(Error::EdgeNotFound { .. })));
    }

    #[test]
    fn test_get_neighbors() {
        let mut g = BipartiteGraph::with_nodes(2, 2);
        g.add_edge(1, 2).unwrap();
        g.add_edge(1, 4).unwrap();
        g.add_edge(3, 4).unwrap();

        let mut n1 = g.get_neighbors(1);
        n1.sort_unstable();
        assert_eq!(n1, vec![2, 4]);
        assert_eq!(g.get_neighbors(3), vec![4]);
        let mut n4 = g.get_neighbors(4);
        n4.sort_unstable();
        assert_eq!(n4, vec![1, 3]);
        assert!(g.get_neighbors(99).is_empty());

        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(99), 0);
    }

    #[test]
    fn test_has_entity_has_item() {
        let g = BipartiteGraph::with_nodes(1, 1);

        assert!(g.has_entity(1).unwrap());
        assert!(!g.has_entity(3).unwrap());
        assert!(g.has_item(2).unwrap());
        assert!(!g.has_item(4).unwrap());

        assert!(matches!(
            g.has_entity(2),
            Err(Error::KindMismatch { id: 2, expected: NodeKind::Entity })
        ));
        assert!(matches!(
            g.has_item(1),
            Err(Error::KindMismatch { id: 1, expected: NodeKind::Item })
        ));
        assert!(matches!(g.has_item(0), Err(Error::KindMismatch { .. })));
    }

    #[test]
    fn test_random_neighbor_isolated_node() {
        let g = BipartiteGraph::with_nodes(1, 1);
        let mut rng = XorShiftRng::seed_from_u64(7);

        assert!(matches!(
            g.get_random_neighbor(1, false, &mut rng),
            Err(Error::EmptyNeighborhood { node: 1 })
        ));
        assert!(matches!(
            g.get_random_neighbor(1, true, &mut rng),
            Err(Error::EmptyNeighborhood { .. })
        ));
    }

    #[test]
    fn test_random_neighbor_draws_neighbors_only() {
        let mut g = BipartiteGraph::with_nodes(2, 3);
        g.add_edge(1, 2).unwrap();
        g.add_edge_weighted(1, 4, 3.0).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(11);

        for use_weights in [false, true] {
            for _ in 0..200 {
                let n = g.get_random_neighbor(1, use_weights, &mut rng).unwrap();
                assert!(n == 2 || n == 4);
            }
        }
    }

    #[test]
    fn test_stats() {
        let mut g = BipartiteGraph::with_nodes(2, 3);
        g.add_edge(1, 2).unwrap();
        g.add_edge(1, 4).unwrap();
        g.add_edge(3, 6).unwrap();

        let stats = g.stats();
        assert_eq!(stats.entity_count, 2);
        assert_eq!(stats.item_count, 3);
        assert_eq!(stats.edge_count, 3);
        assert!((stats.avg_entity_degree - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut g = BipartiteGraph::with_nodes(3, 3);
        g.add_edge_weighted(1, 2, 1.5).unwrap();
        g.add_edge_weighted(3, 2, 2.5).unwrap();
        g.add_edge(5, 6).unwrap();
        g.del_edge(3, 2).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dat");
        g.save(&path).unwrap();

        let restored = BipartiteGraph::load(&path).unwrap();
        assert_eq!(restored.get_entities(), g.get_entities());
        assert_eq!(restored.get_items(), g.get_items());
        assert_eq!(restored.entity_count(), 3);
        assert_eq!(restored.item_count(), 3);
        assert_eq!(
            restored.edges().collect::<HashSet<_>>(),
            g.edges().collect::<HashSet<_>>()
        );
        assert_eq!(restored.get_edge_weight(1, 2).unwrap(), 1.5);
        assert_eq!(restored.get_edge_weight(5, 6).unwrap(), 1.0);

        // The restored graph allocates past the restored ids.
        let mut restored = restored;
        assert_eq!(restored.add_entity(), 7);
        assert_eq!(restored.add_item(), 8);
    }

    #[test]
    fn test_load_missing_sidecar() {
        let g = BipartiteGraph::with_nodes(1, 1);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dat");
        g.save(&path).unwrap();
        std::fs::remove_file(meta_filename(&path)).unwrap();

        assert!(matches!(
            BipartiteGraph::load(&path),
            Err(Error::PersistenceFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_topology() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.dat");
        assert!(matches!(
            BipartiteGraph::load(&path),
            Err(Error::PersistenceFormat(_))
        ));
    }

    #[test]
    fn test_load_mismatched_sidecar() {
        let mut g = BipartiteGraph::with_nodes(1, 2);
        g.add_edge(1, 2).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dat");
        g.save(&path).unwrap();

        // Re-save a sidecar from a graph with a different edge set.
        let mut other = BipartiteGraph::with_nodes(1, 2);
        other.add_edge(1, 4).unwrap();
        let other_path = dir.path().join("other.dat");
        other.save(&other_path).unwrap();
        std::fs::copy(meta_filename(&other_path), meta_filename(&path)).unwrap();

        assert!(matches!(
            BipartiteGraph::load(&path),
            Err(Error::PersistenceFormat(_))
        ));
    }

    #[test]
    fn test_load_truncated_topology() {
        let g = BipartiteGraph::with_nodes(2, 2);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dat");
        g.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        assert!(matches!(
            BipartiteGraph::load(&path),
            Err(Error::PersistenceFormat(_))
        ));
    }
}
