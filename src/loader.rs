//! Graph construction strategies.
//!
//! A [`GraphLoader`] produces a fully populated
//! [`BipartiteGraph`](crate::BipartiteGraph): a hard-coded fixture for
//! deterministic tests, a randomized generator, or a restore of a
//! persisted dataset.

use crate::graph::BipartiteGraph;
use crate::node::NodeId;
use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// File extension of persisted dataset topologies.
const DATASET_EXTENSION: &str = "dat";

/// A strategy that builds or restores a bipartite graph.
pub trait GraphLoader {
    /// Construct or load a graph into memory.
    fn load(&self) -> Result<BipartiteGraph>;
}

/// Returns a very simple fixed network with unweighted edges:
///
/// | Entity | Items       |
/// |--------|-------------|
/// | 1      | 2, 4, 6     |
/// | 3      | 8           |
/// | 5      | 4, 8        |
/// | 7      | 6, 8, 10    |
/// | 9      | 2, 10       |
/// | 11     | 10          |
///
/// No randomness and no failure mode; intended as a deterministic
/// fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTopologyLoader;

impl GraphLoader for FixedTopologyLoader {
    fn load(&self) -> Result<BipartiteGraph> {
        let mut graph = BipartiteGraph::with_nodes(6, 5);
        for (entity, item) in [
            (1, 2),
            (1, 4),
            (1, 6),
            (3, 8),
            (5, 4),
            (5, 8),
            (7, 6),
            (7, 8),
            (7, 10),
            (9, 2),
            (9, 10),
            (11, 10),
        ] {
            graph.add_edge(entity, item)?;
        }
        Ok(graph)
    }
}

/// Erdos-Renyi style random bipartite graph generator.
///
/// Builds a graph with the requested node counts, then draws uniformly
/// random (entity, item) pairs and keeps the distinct ones until the
/// requested number of edges exists (rejection sampling). The expected
/// number of draws grows without bound as `num_edges` approaches
/// `num_entities * num_items`; keep requests sparse.
#[derive(Debug, Clone)]
pub struct RandomBipartiteLoader {
    num_entities: usize,
    num_items: usize,
    num_edges: usize,
    seed: Option<u64>,
}

impl RandomBipartiteLoader {
    /// Create a generator for the given node and edge counts.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `num_edges`
    /// exceeds the complete bipartite bound
    /// `num_entities * num_items`.
    pub fn new(num_entities: usize, num_items: usize, num_edges: usize) -> Result<Self> {
        if num_edges > num_entities * num_items {
            return Err(Error::InvalidConfiguration(format!(
                "{num_edges} edges requested but at most {} fit between \
                 {num_entities} entities and {num_items} items",
                num_entities * num_items
            )));
        }
        Ok(Self {
            num_entities,
            num_items,
            num_edges,
            seed: None,
        })
    }

    /// Fix the random seed, making every `load` produce the same graph.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl GraphLoader for RandomBipartiteLoader {
    fn load(&self) -> Result<BipartiteGraph> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut graph = BipartiteGraph::with_nodes(self.num_entities, self.num_items);

        let mut edges_left = self.num_edges;
        while edges_left > 0 {
            let entity = 2 * rng.random_range(0..self.num_entities as NodeId) + 1;
            let item = 2 * (rng.random_range(0..self.num_items as NodeId) + 1);
            if !graph.is_edge(entity, item) {
                graph.add_edge(entity, item)?;
                edges_left -= 1;
            }
        }

        tracing::debug!(
            entities = self.num_entities,
            items = self.num_items,
            edges = self.num_edges,
            "generated random bipartite graph"
        );
        Ok(graph)
    }
}

/// Restores a persisted dataset by name.
///
/// The topology is expected at `<data_dir>/<name>.dat` with its weight
/// sidecar next to it. Construction fails with
/// [`Error::MissingDataset`] when the topology file does not exist; the
/// message names the generation script to run.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    name: String,
    path: PathBuf,
}

impl DatasetLoader {
    /// Resolve the dataset `name` under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let path = data_dir
            .as_ref()
            .join(format!("{name}.{DATASET_EXTENSION}"));
        if !path.exists() {
            return Err(Error::MissingDataset { name, path });
        }
        Ok(Self { name, path })
    }

    /// The dataset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved topology path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphLoader for DatasetLoader {
    fn load(&self) -> Result<BipartiteGraph> {
        tracing::debug!(name = %self.name, path = %self.path.display(), "loading dataset");
        BipartiteGraph::load(&self.path)
    }
}

/// Loads the small Movielens ratings dataset.
///
/// For more info, see:
/// <http://files.grouplens.org/datasets/movielens/ml-1m-README.txt>
#[derive(Debug, Clone)]
pub struct MovielensLoader(DatasetLoader);

impl MovielensLoader {
    /// Resolve the `movielens` dataset under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self(DatasetLoader::new(data_dir, "movielens")?))
    }
}

impl GraphLoader for MovielensLoader {
    fn load(&self) -> Result<BipartiteGraph> {
        self.0.load()
    }
}

/// Loads the BeerAdvocate review dataset.
///
/// For more info, see:
/// <https://snap.stanford.edu/data/web-BeerAdvocate.html>
#[derive(Debug, Clone)]
pub struct BeerAdvocateLoader(DatasetLoader);

impl BeerAdvocateLoader {
    /// Resolve the `beeradvocate` dataset under `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self(DatasetLoader::new(data_dir, "beeradvocate")?))
    }
}

impl GraphLoader for BeerAdvocateLoader {
    fn load(&self) -> Result<BipartiteGraph> {
        self.0.load()
    }
}
