//! Representative trees stored in an index arena.
//!
//! A representative tree B(q, u, v, p) encodes a q-representative subfamily
//! of the interior-vertex sets F(u, v, p). Nodes live in a flat vector and
//! refer to each other by index, so there are no reference cycles and no
//! per-node allocation.

use smallvec::SmallVec;

use crate::graph::VertexId;
use crate::label::Label;
use crate::vset::VertexSet;

/// Index of a node inside one [`RepTree`] arena.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of a representative tree.
///
/// Every non-root node has exactly one incoming edge carrying a vertex label;
/// an internal node with label S has one child per element of S, the child
/// edge labelled with that element.
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: Label,
    parent: Option<NodeId>,
    /// Vertex label of the incoming edge; `None` only at the root.
    edge: Option<VertexId>,
    children: SmallVec<[(VertexId, NodeId); 4]>,
}

impl TreeNode {
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn edge(&self) -> Option<VertexId> {
        self.edge
    }

    /// The outgoing child edges, in insertion (ascending vertex) order.
    pub fn children(&self) -> &[(VertexId, NodeId)] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A rooted representative tree.
#[derive(Debug, Clone)]
pub struct RepTree {
    vertex_capacity: usize,
    nodes: Vec<TreeNode>,
}

impl RepTree {
    /// The root index of every tree.
    pub const ROOT: NodeId = NodeId(0);

    /// Create a one-node tree with the given root label (possibly Lambda).
    pub fn leaf(vertex_capacity: usize, label: Label) -> Self {
        Self {
            vertex_capacity,
            nodes: vec![TreeNode {
                label,
                parent: None,
                edge: None,
                children: SmallVec::new(),
            }],
        }
    }

    /// The vertex universe size this tree's labels range over.
    pub fn vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a node.
    ///
    /// # Panics
    /// Panics if `id` is not a node of this tree (programmer error).
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    pub fn label(&self, id: NodeId) -> &Label {
        &self.nodes[id.index()].label
    }

    pub fn root_label(&self) -> &Label {
        self.label(Self::ROOT)
    }

    /// Attach a child under `parent` through an edge labelled `edge`.
    ///
    /// # Panics
    /// Panics if `parent` already has a child through `edge` or carries a
    /// Lambda label; both are structural invariant violations.
    pub fn add_child(&mut self, parent: NodeId, edge: VertexId, label: Label) -> NodeId {
        let parent_node = &self.nodes[parent.index()];
        assert!(
            !parent_node.label.is_lambda(),
            "cannot attach children under a lambda node"
        );
        assert!(
            parent_node.label.contains(edge),
            "child edge {edge} is not a member of the parent label"
        );
        assert!(
            self.child_via(parent, edge).is_none(),
            "duplicate child edge {edge}"
        );

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TreeNode {
            label,
            parent: Some(parent),
            edge: Some(edge),
            children: SmallVec::new(),
        });
        self.nodes[parent.index()].children.push((edge, id));
        id
    }

    /// The child of `id` reached through the edge labelled `vertex`.
    pub fn child_via(&self, id: NodeId, vertex: VertexId) -> Option<NodeId> {
        self.nodes[id.index()]
            .children
            .iter()
            .find(|(edge, _)| *edge == vertex)
            .map(|&(_, child)| child)
    }

    /// The set of edge labels on the unique root-to-`id` path.
    pub fn edge_set_to(&self, id: NodeId) -> VertexSet {
        let mut set = VertexSet::new(self.vertex_capacity);
        let mut current = id;
        while let Some(parent) = self.nodes[current.index()].parent {
            let edge = self.nodes[current.index()]
                .edge
                .unwrap_or_else(|| panic!("non-root node {current} has no incoming edge label"));
            set.insert(edge);
            current = parent;
        }
        set
    }

    /// Number of edges on the root-to-`id` path.
    pub fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.nodes[current.index()].parent {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Height of the whole tree.
    pub fn height(&self) -> usize {
        (0..self.nodes.len())
            .map(|index| self.depth_of(NodeId(index as u32)))
            .max()
            .unwrap_or(0)
    }
}
