pub mod cycle;
pub mod finder;
pub mod graph;
pub mod label;
pub mod printer;
pub mod search;
pub mod tree;
pub mod tree_builder;
pub mod vset;
pub mod witness;

pub use cycle::find_cycle;
pub use finder::{find_paths, find_paths_with_config, FindConfig, PathFinder, WitnessMap};
pub use graph::{DiGraph, VertexId};
pub use label::Label;
pub use printer::{print_rep_tree, render_rep_tree, render_witness_map};
pub use search::disjoint_member;
pub use tree::{NodeId, RepTree};
pub use tree_builder::{build_next_layer, Layer, TreeBuilder};
pub use vset::VertexSet;
pub use witness::order_witness;
