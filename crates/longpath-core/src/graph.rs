//! Immutable directed graph with bitset adjacency.

use longpath_error::{Error, Result};

use crate::vset::VertexSet;

/// Opaque vertex handle, an index into 0..|V|.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A finite directed graph, immutable for the lifetime of a query.
///
/// Adjacency is one bitset row per vertex. Multi-edges collapse into a single
/// edge at construction and self-loops are dropped; neither can participate
/// in a simple path.
#[derive(Debug, Clone)]
pub struct DiGraph {
    rows: Vec<VertexSet>,
}

impl DiGraph {
    /// Build a graph from edge pairs over the universe 0..vertex_count.
    ///
    /// # Panics
    /// Panics if an endpoint is out of range; use [`DiGraph::try_from_edges`]
    /// for inputs that are not already validated.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32)]) -> Self {
        match Self::try_from_edges(vertex_count, edges) {
            Ok(graph) => graph,
            Err(err) => panic!("invalid edge list: {err}"),
        }
    }

    /// Build a graph from edge pairs, rejecting out-of-range endpoints.
    pub fn try_from_edges(vertex_count: usize, edges: &[(u32, u32)]) -> Result<Self> {
        let mut rows = vec![VertexSet::new(vertex_count); vertex_count];

        for &(from, to) in edges {
            if from as usize >= vertex_count {
                return Err(Error::vertex_out_of_range(from.to_string())
                    .with_operation("graph::try_from_edges")
                    .with_context("vertex_count", vertex_count.to_string()));
            }
            if to as usize >= vertex_count {
                return Err(Error::vertex_out_of_range(to.to_string())
                    .with_operation("graph::try_from_edges")
                    .with_context("vertex_count", vertex_count.to_string()));
            }
            if from == to {
                continue;
            }
            rows[from as usize].insert(VertexId(to));
        }

        Ok(Self { rows })
    }

    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate every vertex once, in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.rows.len()).map(VertexId::new)
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.rows.len()
    }

    /// The out-neighbours of `u`. Never contains `u` itself.
    ///
    /// # Panics
    /// Panics if `u` is not a vertex of this graph (programmer error).
    pub fn neighbours(&self, u: VertexId) -> &VertexSet {
        assert!(
            self.contains_vertex(u),
            "vertex {u} out of range for graph with {} vertices",
            self.rows.len()
        );
        &self.rows[u.index()]
    }

    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.contains_vertex(u) && self.contains_vertex(v) && self.rows[u.index()].contains(v)
    }

    /// Iterate all edges (u, v), u ascending then v ascending.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices()
            .flat_map(move |u| self.rows[u.index()].iter().map(move |v| (u, v)))
    }

    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longpath_error::ErrorKind;

    #[test]
    fn test_from_edges_basic() {
        let graph = DiGraph::from_edges(3, &[(0, 1), (1, 2)]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(VertexId(0), VertexId(1)));
        assert!(graph.contains_edge(VertexId(1), VertexId(2)));
        assert!(!graph.contains_edge(VertexId(1), VertexId(0)));
    }

    #[test]
    fn test_multi_edges_collapse() {
        let graph = DiGraph::from_edges(2, &[(0, 1), (0, 1), (0, 1)]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loops_dropped() {
        let graph = DiGraph::from_edges(2, &[(0, 0), (0, 1), (1, 1)]);

        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains_edge(VertexId(0), VertexId(0)));
        assert!(!graph.neighbours(VertexId(1)).contains(VertexId(1)));
    }

    #[test]
    fn test_try_from_edges_rejects_foreign_vertex() {
        let err = DiGraph::try_from_edges(2, &[(0, 5)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VertexOutOfRange);

        let err = DiGraph::try_from_edges(2, &[(9, 0)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VertexOutOfRange);
    }

    #[test]
    fn test_vertices_each_once() {
        let graph = DiGraph::from_edges(4, &[]);
        let vertices: Vec<VertexId> = graph.vertices().collect();
        assert_eq!(
            vertices,
            vec![VertexId(0), VertexId(1), VertexId(2), VertexId(3)]
        );
    }

    #[test]
    fn test_edges_iteration_order() {
        let graph = DiGraph::from_edges(3, &[(2, 0), (0, 2), (0, 1)]);
        let edges: Vec<(VertexId, VertexId)> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![
                (VertexId(0), VertexId(1)),
                (VertexId(0), VertexId(2)),
                (VertexId(2), VertexId(0)),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_neighbours_panics_on_foreign_vertex() {
        let graph = DiGraph::from_edges(2, &[(0, 1)]);
        graph.neighbours(VertexId(7));
    }
}
