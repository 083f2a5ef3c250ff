//! Plain-text rendering of representative trees and witness maps.
//!
//! Diagnostic output only; nothing here is a stable format.

use crate::finder::WitnessMap;
use crate::tree::{NodeId, RepTree};

/// Configuration for tree rendering.
#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Indentation width in spaces per nesting level
    pub indent_width: usize,
    /// Include node ids in output
    pub include_node_ids: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            indent_width: 2,
            include_node_ids: false,
        }
    }
}

/// Render a representative tree with default configuration.
pub fn render_rep_tree(tree: &RepTree) -> String {
    render_rep_tree_with_config(tree, &PrintConfig::default())
}

/// Render a representative tree with custom configuration.
pub fn render_rep_tree_with_config(tree: &RepTree, config: &PrintConfig) -> String {
    let mut lines = Vec::new();
    render_node(tree, RepTree::ROOT, 0, config, &mut lines);
    lines.join("\n")
}

/// Print a representative tree to stdout.
pub fn print_rep_tree(tree: &RepTree) {
    println!("{}\n", render_rep_tree(tree));
}

fn render_node(
    tree: &RepTree,
    id: NodeId,
    depth: usize,
    config: &PrintConfig,
    out: &mut Vec<String>,
) {
    let node = tree.node(id);
    let indent = " ".repeat(depth * config.indent_width);

    let mut line = match node.edge() {
        Some(edge) => format!("{}(via {} {}", indent, edge, node.label()),
        None => format!("{}({}", indent, node.label()),
    };
    if config.include_node_ids {
        line.push_str(&format!(" #{id}"));
    }

    if node.is_leaf() {
        line.push(')');
        out.push(line);
    } else {
        out.push(line);
        for &(_, child) in node.children() {
            render_node(tree, child, depth + 1, config, out);
        }
        out.push(format!("{})", indent));
    }
}

/// Render a witness map, one non-Lambda pair per line.
pub fn render_witness_map(map: &WitnessMap) -> String {
    let mut lines = Vec::new();
    for (u, v, label) in map.iter() {
        if label.is_lambda() {
            continue;
        }
        lines.push(format!("({u} -> {v}) {label}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DiGraph, VertexId};
    use crate::label::Label;
    use crate::vset::VertexSet;

    fn members(capacity: usize, vertices: &[u32]) -> Label {
        let mut set = VertexSet::new(capacity);
        for &v in vertices {
            set.insert(VertexId(v));
        }
        Label::Members(set)
    }

    #[test]
    fn test_render_leaf() {
        let tree = RepTree::leaf(4, Label::Lambda);
        assert_eq!(render_rep_tree(&tree), "(lambda)");
    }

    #[test]
    fn test_render_nested() {
        let mut tree = RepTree::leaf(8, members(8, &[1, 3]));
        let c1 = tree.add_child(RepTree::ROOT, VertexId(1), members(8, &[2]));
        tree.add_child(RepTree::ROOT, VertexId(3), Label::Lambda);
        tree.add_child(c1, VertexId(2), Label::Lambda);

        let rendered = render_rep_tree(&tree);
        let expected = "({1, 3}\n  (via 1 {2}\n    (via 2 lambda)\n  )\n  (via 3 lambda)\n)";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_node_ids() {
        let tree = RepTree::leaf(4, members(4, &[2]));
        let config = PrintConfig {
            include_node_ids: true,
            ..Default::default()
        };
        assert_eq!(render_rep_tree_with_config(&tree, &config), "({2} #0)");
    }

    #[test]
    fn test_render_witness_map_skips_lambda() {
        let graph = DiGraph::from_edges(3, &[(0, 1), (1, 2)]);
        let map = crate::finder::find_paths(&graph, 2).unwrap();

        let rendered = render_witness_map(&map);
        assert_eq!(rendered, "(0 -> 2) {1}");
    }
}
