//! The outer driver: fixed-length simple-path search over all pairs.

use longpath_error::{Error, Result};

use crate::graph::{DiGraph, VertexId};
use crate::label::Label;
use crate::tree_builder::{build_next_layer, Layer};

/// Configuration options for a path search.
#[derive(Debug, Clone)]
pub struct FindConfig {
    /// Construct each layer's trees in parallel across pairs. The result is
    /// identical either way; pairs only read the immutable previous layer.
    pub parallel: bool,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// The answer for every ordered pair (u, v): Lambda when no simple path of
/// the queried length exists, otherwise the interior-vertex set of one
/// witness path.
#[derive(Debug, Clone)]
pub struct WitnessMap {
    vertex_count: usize,
    entries: Vec<Label>,
}

impl WitnessMap {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The witness label for the ordered pair (u, v).
    ///
    /// # Panics
    /// Panics if either handle is out of range (programmer error).
    pub fn witness(&self, u: VertexId, v: VertexId) -> &Label {
        assert!(
            u.index() < self.vertex_count && v.index() < self.vertex_count,
            "pair ({u}, {v}) out of range for map over {} vertices",
            self.vertex_count
        );
        &self.entries[u.index() * self.vertex_count + v.index()]
    }

    /// Iterate (u, v, label) over every ordered pair.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId, &Label)> {
        let n = self.vertex_count;
        self.entries
            .iter()
            .enumerate()
            .map(move |(index, label)| (VertexId::new(index / n), VertexId::new(index % n), label))
    }

    /// Number of pairs with a non-Lambda witness.
    pub fn witness_count(&self) -> usize {
        self.entries.iter().filter(|label| !label.is_lambda()).count()
    }
}

/// Runs Monien's representative-family search over a [`DiGraph`].
#[derive(Debug)]
pub struct PathFinder<'g> {
    graph: &'g DiGraph,
    config: FindConfig,
}

impl<'g> PathFinder<'g> {
    /// Create a new PathFinder with default configuration.
    pub fn new(graph: &'g DiGraph) -> Self {
        Self {
            graph,
            config: FindConfig::default(),
        }
    }

    /// Create a new PathFinder with custom configuration.
    pub fn with_config(graph: &'g DiGraph, config: FindConfig) -> Self {
        Self { graph, config }
    }

    /// Decide, for every ordered pair (u, v), whether the graph contains a
    /// simple path of length `k` from u to v, and produce the interior-vertex
    /// set of one witness where it does.
    ///
    /// The layer at family size p is built with depth bound k−1−p and is
    /// dropped as soon as its successor is complete; for k = 1 the base layer
    /// is already the answer and no induction runs.
    pub fn find_paths(&self, k: usize) -> Result<WitnessMap> {
        if k < 1 {
            return Err(Error::invalid_argument("path length must be at least 1")
                .with_operation("finder::find_paths")
                .with_context("k", k.to_string()));
        }

        let mut layer = Layer::base(self.graph);
        for p in 0..k - 1 {
            let depth = k - 2 - p;
            tracing::debug!(
                "advancing layer {} -> {} with depth bound {}",
                p,
                p + 1,
                depth
            );
            layer = build_next_layer(self.graph, &layer, depth, self.config.parallel);
        }

        let entries = layer
            .iter()
            .map(|(_, _, tree)| tree.root_label().clone())
            .collect();

        Ok(WitnessMap {
            vertex_count: self.graph.vertex_count(),
            entries,
        })
    }
}

/// Search with the default configuration. See [`PathFinder::find_paths`].
pub fn find_paths(graph: &DiGraph, k: usize) -> Result<WitnessMap> {
    PathFinder::new(graph).find_paths(k)
}

/// Search with a custom configuration.
pub fn find_paths_with_config(graph: &DiGraph, k: usize, config: FindConfig) -> Result<WitnessMap> {
    PathFinder::with_config(graph, config).find_paths(k)
}
