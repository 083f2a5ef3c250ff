//! Ordering a witness interior set into a concrete path.

use crate::graph::{DiGraph, VertexId};
use crate::vset::VertexSet;

/// Order `interior` into the vertex sequence u, s₁, …, s_m, v such that each
/// consecutive pair is an edge, using every interior vertex exactly once.
///
/// Returns `None` when no ordering closes into a path; for sets produced by
/// the path search one always exists. The interior sets in play are small
/// (k−1 elements), so a backtracking scan is plenty.
pub fn order_witness(
    graph: &DiGraph,
    u: VertexId,
    v: VertexId,
    interior: &VertexSet,
) -> Option<Vec<VertexId>> {
    if interior.contains(u) || interior.contains(v) {
        return None;
    }

    let mut used = VertexSet::new(graph.vertex_count());
    let mut path = vec![u];
    if extend(graph, u, v, interior, &mut used, &mut path, interior.len()) {
        path.push(v);
        Some(path)
    } else {
        None
    }
}

fn extend(
    graph: &DiGraph,
    current: VertexId,
    target: VertexId,
    interior: &VertexSet,
    used: &mut VertexSet,
    path: &mut Vec<VertexId>,
    remaining: usize,
) -> bool {
    if remaining == 0 {
        return graph.contains_edge(current, target);
    }

    for next in interior.iter() {
        if used.contains(next) || !graph.contains_edge(current, next) {
            continue;
        }
        used.insert(next);
        path.push(next);
        if extend(graph, next, target, interior, used, path, remaining - 1) {
            return true;
        }
        path.pop();
        used.remove(next);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(capacity: usize, vertices: &[u32]) -> VertexSet {
        let mut set = VertexSet::new(capacity);
        for &v in vertices {
            set.insert(VertexId(v));
        }
        set
    }

    #[test]
    fn test_orders_a_chain() {
        let graph = DiGraph::from_edges(4, &[(0, 2), (2, 1), (1, 3)]);
        let path = order_witness(&graph, VertexId(0), VertexId(3), &set(4, &[1, 2])).unwrap();
        assert_eq!(path, vec![VertexId(0), VertexId(2), VertexId(1), VertexId(3)]);
    }

    #[test]
    fn test_empty_interior_needs_direct_edge() {
        let graph = DiGraph::from_edges(2, &[(0, 1)]);
        let path = order_witness(&graph, VertexId(0), VertexId(1), &set(2, &[])).unwrap();
        assert_eq!(path, vec![VertexId(0), VertexId(1)]);

        assert!(order_witness(&graph, VertexId(1), VertexId(0), &set(2, &[])).is_none());
    }

    #[test]
    fn test_backtracks_over_dead_ends() {
        // From 0 both 1 and 2 are reachable, but only 0 -> 2 -> 1 -> 3 closes.
        let graph = DiGraph::from_edges(4, &[(0, 1), (0, 2), (2, 1), (1, 3)]);
        let path = order_witness(&graph, VertexId(0), VertexId(3), &set(4, &[1, 2])).unwrap();
        assert_eq!(path, vec![VertexId(0), VertexId(2), VertexId(1), VertexId(3)]);
    }

    #[test]
    fn test_unorderable_set() {
        let graph = DiGraph::from_edges(4, &[(0, 1), (2, 3)]);
        assert!(order_witness(&graph, VertexId(0), VertexId(3), &set(4, &[1, 2])).is_none());
    }

    #[test]
    fn test_interior_containing_endpoint_is_rejected() {
        let graph = DiGraph::from_edges(3, &[(0, 1), (1, 2)]);
        assert!(order_witness(&graph, VertexId(0), VertexId(2), &set(3, &[0])).is_none());
    }
}
