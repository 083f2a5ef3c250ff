//! Layer-by-layer construction of representative trees.
//!
//! One layer holds the trees B(q, u, v, p) for every ordered pair (u, v).
//! [`TreeBuilder`] performs the induction step for a single pair: from the
//! complete layer at family size p it builds the pair's tree at family size
//! p+1 with the depth bound reduced by one. [`build_next_layer`] maps the
//! builder across all pairs, optionally in parallel; pairs only read the
//! immutable previous layer, so they are independent.

use rayon::prelude::*;

use crate::graph::{DiGraph, VertexId};
use crate::label::Label;
use crate::search::disjoint_member;
use crate::tree::{NodeId, RepTree};
use crate::vset::VertexSet;

/// All representative trees of one induction layer, indexed by (u, v).
#[derive(Debug)]
pub struct Layer {
    vertex_count: usize,
    trees: Vec<RepTree>,
}

impl Layer {
    /// The base layer p = 0: a single-node tree per pair whose root label is
    /// the empty set when (u, v) is an edge and Lambda otherwise.
    pub fn base(graph: &DiGraph) -> Self {
        let n = graph.vertex_count();
        let trees = graph
            .vertices()
            .flat_map(|u| {
                graph.vertices().map(move |v| {
                    if graph.contains_edge(u, v) {
                        RepTree::leaf(n, Label::empty(n))
                    } else {
                        RepTree::leaf(n, Label::Lambda)
                    }
                })
            })
            .collect();
        Self {
            vertex_count: n,
            trees,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The tree for the ordered pair (u, v).
    ///
    /// # Panics
    /// Panics if either handle is out of range (programmer error).
    pub fn tree(&self, u: VertexId, v: VertexId) -> &RepTree {
        &self.trees[self.pair_index(u, v)]
    }

    /// Iterate (u, v, tree) over every pair.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId, &RepTree)> {
        let n = self.vertex_count;
        self.trees
            .iter()
            .enumerate()
            .map(move |(index, tree)| (VertexId::new(index / n), VertexId::new(index % n), tree))
    }

    fn pair_index(&self, u: VertexId, v: VertexId) -> usize {
        assert!(
            u.index() < self.vertex_count && v.index() < self.vertex_count,
            "pair ({u}, {v}) out of range for layer over {} vertices",
            self.vertex_count
        );
        u.index() * self.vertex_count + v.index()
    }
}

/// Builds the next-layer tree for one ordered pair (u, v).
#[derive(Debug)]
pub struct TreeBuilder<'a> {
    graph: &'a DiGraph,
    prev: &'a Layer,
    source: VertexId,
    target: VertexId,
    /// Depth bound of the tree under construction (q − 1).
    depth: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(
        graph: &'a DiGraph,
        prev: &'a Layer,
        source: VertexId,
        target: VertexId,
        depth: usize,
    ) -> Self {
        Self {
            graph,
            prev,
            source,
            target,
            depth,
        }
    }

    /// Construct the representative tree for this pair.
    pub fn build(&self) -> RepTree {
        let n = self.graph.vertex_count();
        // A simple path has distinct endpoints; diagonal pairs stay Lambda at
        // every depth even when a cycle of the right length passes through.
        if self.source == self.target {
            return RepTree::leaf(n, Label::Lambda);
        }
        let mut taken = VertexSet::new(n);
        let root_label = self.label_for(&taken);
        let mut tree = RepTree::leaf(n, root_label);
        self.expand(&mut tree, RepTree::ROOT, &mut taken, 0);
        tree
    }

    /// Attach children below `node` until the depth bound, extending the
    /// root-to-node edge-label set in place around each recursive call.
    fn expand(&self, tree: &mut RepTree, node: NodeId, taken: &mut VertexSet, depth: usize) {
        if depth >= self.depth {
            return;
        }
        let members: Vec<VertexId> = match tree.label(node).as_members() {
            Some(set) => set.iter().collect(),
            None => return,
        };
        for vertex in members {
            taken.insert(vertex);
            let child_label = self.label_for(taken);
            let child = tree.add_child(node, vertex, child_label);
            self.expand(tree, child, taken, depth + 1);
            taken.remove(vertex);
        }
    }

    /// Label a node whose root-to-node edge labels form `taken`.
    ///
    /// Scans the out-neighbours of the source in ascending order; the first
    /// neighbour w outside T = taken ∪ {source} whose previous-layer tree
    /// yields a member U disjoint from T labels the node with U ∪ {w}. If the
    /// scan comes up empty the node is Lambda, with no accompanying vertex.
    fn label_for(&self, taken: &VertexSet) -> Label {
        let mut query = taken.clone();
        query.insert(self.source);

        for w in self.graph.neighbours(self.source).iter() {
            if w == self.target || query.contains(w) {
                continue;
            }
            let subtree = self.prev.tree(w, self.target);
            if let Some(members) = disjoint_member(subtree, &query) {
                let mut label = members.clone();
                label.insert(w);
                return Label::Members(label);
            }
        }
        Label::Lambda
    }
}

/// Advance a complete layer by one induction step.
///
/// `depth` is the depth bound of the produced trees (one less than the bound
/// of `prev`'s trees).
pub fn build_next_layer(graph: &DiGraph, prev: &Layer, depth: usize, parallel: bool) -> Layer {
    let n = graph.vertex_count();
    let build_pair = |index: usize| {
        let u = VertexId::new(index / n);
        let v = VertexId::new(index % n);
        TreeBuilder::new(graph, prev, u, v, depth).build()
    };

    // Pairs are independent: each reads only the immutable previous layer.
    let trees = if parallel {
        (0..n * n).into_par_iter().map(build_pair).collect()
    } else {
        (0..n * n).map(build_pair).collect()
    };

    Layer {
        vertex_count: n,
        trees,
    }
}
