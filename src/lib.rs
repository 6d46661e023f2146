//! An unbalanced binary search tree over integer keys, with deletion
//! covering every structural case, an internal-path-length query, and
//! helpers that render the tree shape as indented text or as a Graphviz
//! DOT description.

pub mod binary_tree;
pub mod tree_utils;
