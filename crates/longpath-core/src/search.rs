//! Disjoint-witness queries against a representative tree.

use crate::tree::RepTree;
use crate::vset::VertexSet;

/// Extract a family member disjoint from `query`, or report none exists.
///
/// Walks the tree from the root: a node whose label avoids `query` is
/// returned directly; otherwise the descent follows the child edge labelled
/// with the smallest vertex shared between the label and `query`. Reaching a
/// Lambda node means no member of the encoded family avoids `query`.
///
/// Runs in O(p·q) for label size p and tree depth q. An empty query is
/// answered at the root.
pub fn disjoint_member<'t>(tree: &'t RepTree, query: &VertexSet) -> Option<&'t VertexSet> {
    let mut current = RepTree::ROOT;
    loop {
        let label = tree.label(current);
        let members = label.as_members()?;
        if members.is_disjoint(query) {
            return Some(members);
        }

        let Some(conflict) = members.intersection_first(query) else {
            unreachable!("non-disjoint label has an empty intersection");
        };
        let Some(child) = tree.child_via(current, conflict) else {
            panic!("representative tree missing child edge for vertex {conflict}");
        };
        current = child;
    }
}
