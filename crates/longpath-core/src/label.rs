//! The label algebra: {⊥} ∪ 𝒫(V).

use crate::graph::VertexId;
use crate::vset::VertexSet;

/// A representative-tree node label.
///
/// `Lambda` is the distinguished "no qualifying set exists here" marker;
/// `Members` holds a candidate interior-vertex set. Lambda propagates through
/// every label-producing operation, while boolean queries treat it as never
/// qualifying.
#[derive(Clone, PartialEq, Eq)]
pub enum Label {
    Lambda,
    Members(VertexSet),
}

impl Label {
    /// An empty member set, the label of every base-layer tree with an edge.
    pub fn empty(capacity: usize) -> Self {
        Label::Members(VertexSet::new(capacity))
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self, Label::Lambda)
    }

    pub fn as_members(&self) -> Option<&VertexSet> {
        match self {
            Label::Lambda => None,
            Label::Members(set) => Some(set),
        }
    }

    /// Number of vertices in the label, or `None` for Lambda.
    pub fn cardinality(&self) -> Option<usize> {
        self.as_members().map(VertexSet::len)
    }

    /// Whether this label qualifies against `query`.
    ///
    /// Lambda never qualifies, whatever the query.
    pub fn is_disjoint(&self, query: &VertexSet) -> bool {
        match self {
            Label::Lambda => false,
            Label::Members(set) => set.is_disjoint(query),
        }
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        match self {
            Label::Lambda => false,
            Label::Members(set) => set.contains(vertex),
        }
    }

    /// The label restricted to `query`; Lambda stays Lambda.
    pub fn intersection(&self, query: &VertexSet) -> Label {
        match self {
            Label::Lambda => Label::Lambda,
            Label::Members(set) => Label::Members(set.intersection(query)),
        }
    }

    /// The label with `vertex` added; Lambda stays Lambda.
    pub fn extended_with(&self, vertex: VertexId) -> Label {
        match self {
            Label::Lambda => Label::Lambda,
            Label::Members(set) => {
                let mut extended = set.clone();
                extended.insert(vertex);
                Label::Members(extended)
            }
        }
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Lambda => write!(f, "lambda"),
            Label::Members(set) => write!(f, "{set:?}"),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(capacity: usize, vertices: &[u32]) -> Label {
        let mut set = VertexSet::new(capacity);
        for &v in vertices {
            set.insert(VertexId(v));
        }
        Label::Members(set)
    }

    #[test]
    fn test_lambda_never_qualifies() {
        let empty_query = VertexSet::new(4);
        assert!(!Label::Lambda.is_disjoint(&empty_query));
        assert!(!Label::Lambda.contains(VertexId(0)));
        assert_eq!(Label::Lambda.cardinality(), None);
    }

    #[test]
    fn test_members_disjointness() {
        let label = members(8, &[1, 3]);

        let mut query = VertexSet::new(8);
        query.insert(VertexId(2));
        assert!(label.is_disjoint(&query));

        query.insert(VertexId(3));
        assert!(!label.is_disjoint(&query));
    }

    #[test]
    fn test_empty_label_qualifies_against_anything() {
        let label = Label::empty(8);
        let mut query = VertexSet::new(8);
        for v in 0..8 {
            query.insert(VertexId(v));
        }
        assert!(label.is_disjoint(&query));
        assert_eq!(label.cardinality(), Some(0));
    }

    #[test]
    fn test_intersection_propagates_lambda() {
        let mut query = VertexSet::new(8);
        query.insert(VertexId(1));
        query.insert(VertexId(2));

        assert!(Label::Lambda.intersection(&query).is_lambda());

        let restricted = members(8, &[1, 3]).intersection(&query);
        assert!(restricted.contains(VertexId(1)));
        assert!(!restricted.contains(VertexId(3)));
        assert_eq!(restricted.cardinality(), Some(1));
    }

    #[test]
    fn test_extended_with() {
        let label = members(8, &[1]).extended_with(VertexId(5));
        assert!(label.contains(VertexId(1)));
        assert!(label.contains(VertexId(5)));
        assert_eq!(label.cardinality(), Some(2));

        assert!(Label::Lambda.extended_with(VertexId(5)).is_lambda());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Label::Lambda), "lambda");
        assert_eq!(format!("{:?}", members(4, &[0, 2])), "{0, 2}");
    }
}
