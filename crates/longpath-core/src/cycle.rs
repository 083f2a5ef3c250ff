//! Simple-cycle detection layered on the path search.

use longpath_error::{Error, Result};

use crate::finder::find_paths;
use crate::graph::{DiGraph, VertexId};
use crate::label::Label;
use crate::witness::order_witness;

/// Find one simple cycle of length `k`, if the graph has any.
///
/// A length-k cycle is a length-(k−1) simple path plus its closing edge: for
/// every edge (y, x) the search asks whether a simple path of length k−1 runs
/// from x back to y. The returned vertices are in cycle order starting at x;
/// the edge from the last vertex back to the first closes the cycle.
pub fn find_cycle(graph: &DiGraph, k: usize) -> Result<Option<Vec<VertexId>>> {
    if k < 2 {
        return Err(Error::invalid_argument("cycle length must be at least 2")
            .with_operation("cycle::find_cycle")
            .with_context("k", k.to_string()));
    }

    let map = find_paths(graph, k - 1)?;
    for (y, x) in graph.edges() {
        if let Label::Members(interior) = map.witness(x, y) {
            let path = order_witness(graph, x, y, interior).ok_or_else(|| {
                Error::witness_invalid(format!(
                    "witness for pair ({x}, {y}) does not order into a path"
                ))
                .with_operation("cycle::find_cycle")
            })?;
            return Ok(Some(path));
        }
    }
    Ok(None)
}
