use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rand::Rng;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};

use graphviz_rust::cmd::{CommandArg, Format};
use graphviz_rust::exec_dot;

use crate::binary_tree::BinaryTree;

/// Vertex of the rendered graph: a tree node carrying its key, or a marker
/// standing in for an absent child slot so the drawn shape distinguishes
/// "no left child" from "has a left child".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeVertex {
    Key(i32),
    Missing,
}

/// Which child slot an edge descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

/// Renders the tree sideways: right subtree on top, each level indented four
/// spaces deeper. An empty tree renders as the empty string.
pub fn format_sideways(tree: &BinaryTree) -> String {
    let mut out = String::new();
    sideways(tree, 0, &mut out);
    out
}

fn sideways(tree: &BinaryTree, depth: usize, out: &mut String) {
    if let BinaryTree::Node { value, left, right } = tree {
        sideways(right, depth + 1, out);
        for _ in 0..depth {
            out.push_str("    ");
        }
        out.push_str(&value.to_string());
        out.push('\n');
        sideways(left, depth + 1, out);
    }
}

/// Builds a directed graph of the tree's shape: one `Key` vertex per node,
/// one `Missing` vertex per absent child slot, and an edge per parent/child
/// relation tagged with the branch it follows.
pub fn tree_to_graph(tree: &BinaryTree) -> DiGraph<TreeVertex, Branch> {
    let mut graph = DiGraph::new();
    if !tree.is_empty() {
        add_subtree(&mut graph, tree);
    }
    graph
}

fn add_subtree(graph: &mut DiGraph<TreeVertex, Branch>, tree: &BinaryTree) -> NodeIndex {
    match tree {
        BinaryTree::Empty => graph.add_node(TreeVertex::Missing),
        BinaryTree::Node { value, left, right } => {
            let index = graph.add_node(TreeVertex::Key(*value));
            let left_index = add_subtree(graph, left);
            graph.add_edge(index, left_index, Branch::Left);
            let right_index = add_subtree(graph, right);
            graph.add_edge(index, right_index, Branch::Right);
            index
        }
    }
}

/// Renders the tree as a DOT description. Edges to real children are labeled
/// "L"/"R"; absent child slots are drawn as unlabeled point-shaped markers.
pub fn tree_to_dot(tree: &BinaryTree) -> String {
    let graph = tree_to_graph(tree);
    format!(
        "{:?}",
        Dot::with_attr_getters(
            &graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|graph, edge| match graph[edge.target()] {
                TreeVertex::Missing => String::new(),
                TreeVertex::Key(_) => match edge.weight() {
                    Branch::Left => String::from("label = \"L\""),
                    Branch::Right => String::from("label = \"R\""),
                },
            },
            &|_, (_, vertex)| match vertex {
                TreeVertex::Key(value) => format!("label = \"{}\" fontname = \"Arial\"", value),
                TreeVertex::Missing => String::from("shape = point"),
            },
        )
    )
}

/// Writes a DOT description to the given path.
pub fn save_dot_file(path: &str, dot_source: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(dot_source.as_bytes())?;
    Ok(())
}

/// Runs a DOT description through Graphviz and writes a PNG to the given
/// path. Requires the Graphviz tools to be installed.
pub fn render_png(dot_source: &str, image_path: &str) -> io::Result<()> {
    exec_dot(
        dot_source.to_string(),
        vec![Format::Png.into(), CommandArg::Output(image_path.to_string())],
    )?;
    Ok(())
}

/// Draws `count` distinct random values in `0..max`, skipping anything
/// listed in `taken`. Candidates are redrawn until unseen.
pub fn random_unique_values(count: usize, max: i32, taken: &[i32]) -> Vec<i32> {
    assert!(
        max > 0 && count + taken.len() <= max as usize,
        "cannot draw {} distinct values below {}",
        count,
        max
    );
    let mut rng = rand::thread_rng();
    let mut seen: HashSet<i32> = taken.iter().copied().collect();
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let candidate = rng.gen_range(0..max);
        if seen.insert(candidate) {
            values.push(candidate);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sideways_listing_is_a_reversed_in_order_walk() {
        let tree = BinaryTree::from_vec(vec![10, 5, 15]);
        assert_eq!(format_sideways(&tree), "    15\n10\n    5\n");
    }

    #[test]
    fn sideways_listing_of_empty_tree_is_empty() {
        assert_eq!(format_sideways(&BinaryTree::new()), "");
    }

    #[test]
    fn sideways_indent_tracks_depth() {
        let chain = BinaryTree::from_vec(vec![1, 2, 3]);
        assert_eq!(format_sideways(&chain), "        3\n    2\n1\n");
    }

    #[test]
    fn graph_counts_nodes_markers_and_edges() {
        // Three keys produce three Key vertices, four Missing markers, and
        // two edges per key.
        let tree = BinaryTree::from_vec(vec![10, 5, 15]);
        let graph = tree_to_graph(&tree);
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 6);
        let markers = graph
            .node_weights()
            .filter(|vertex| **vertex == TreeVertex::Missing)
            .count();
        assert_eq!(markers, 4);
    }

    #[test]
    fn empty_tree_maps_to_an_empty_graph() {
        let graph = tree_to_graph(&BinaryTree::new());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!tree_to_dot(&BinaryTree::new()).contains("->"));
    }

    #[test]
    fn dot_labels_branches_and_marks_missing_slots() {
        // 10 has a left child 5 and no right child; 5 has two missing slots.
        let tree = BinaryTree::from_vec(vec![10, 5]);
        let dot = tree_to_dot(&tree);
        assert_eq!(dot.matches("label = \"L\"").count(), 1);
        assert_eq!(dot.matches("label = \"R\"").count(), 0);
        assert_eq!(dot.matches("shape = point").count(), 3);
        assert!(dot.contains("label = \"10\""));
        assert!(dot.contains("label = \"5\""));
    }

    #[test]
    fn random_values_are_unique_in_range_and_respect_exclusions() {
        let taken = [3, 4, 5];
        let values = random_unique_values(50, 100, &taken);
        assert_eq!(values.len(), 50);
        let distinct: HashSet<i32> = values.iter().copied().collect();
        assert_eq!(distinct.len(), values.len());
        for value in &values {
            assert!((0..100).contains(value));
            assert!(!taken.contains(value));
        }
    }
}
