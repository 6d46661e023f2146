use std::fs;

use bst_delete::binary_tree::BinaryTree;
use bst_delete::tree_utils::{
    format_sideways, random_unique_values, render_png, save_dot_file, tree_to_dot,
};

const OUTPUT_DIR: &str = "trees";

// Size of the random scenario; its keys are drawn below KEY_SPAN - 1.
const RANDOM_COUNT: usize = 5_000;
const KEY_SPAN: i32 = 1 << 15;

/// Prints the tree sideways under a heading and saves a DOT snapshot.
fn snapshot(tree: &BinaryTree, heading: &str, dot_name: &str) {
    println!("{}", heading);
    print!("{}", format_sideways(tree));
    let path = format!("{}/{}.dot", OUTPUT_DIR, dot_name);
    match save_dot_file(&path, &tree_to_dot(tree)) {
        Ok(()) => println!("DOT file saved: {}\n", path),
        Err(e) => eprintln!("Could not write {}: {}\n", path, e),
    }
}

fn main() {
    if let Err(e) = fs::create_dir_all(OUTPUT_DIR) {
        eprintln!("Could not create {}: {}", OUTPUT_DIR, e);
    }

    // Case 1: deleting from an empty tree is a no-op.
    let mut tree = BinaryTree::new();
    tree.remove(10);
    snapshot(&tree, "Tree 1 after deletion (should be empty):", "bst_case1");

    // Case 2: deleting the only node leaves an empty tree.
    let mut tree = BinaryTree::from_vec(vec![10]);
    snapshot(&tree, "Tree 2 before deletion:", "bst_case2_before");
    tree.remove(10);
    snapshot(&tree, "Tree 2 after deletion:", "bst_case2_after");

    // Case 3: deleting a leaf.
    let mut tree = BinaryTree::from_vec(vec![10, 5, 15]);
    snapshot(&tree, "Tree 3 before deletion:", "bst_case3_before");
    tree.remove(5);
    snapshot(&tree, "Tree 3 after deletion:", "bst_case3_after");

    // Case 4: deleting a node with one left child.
    let mut tree = BinaryTree::from_vec(vec![10, 5, 2]);
    snapshot(&tree, "Tree 4 before deletion:", "bst_case4_before");
    tree.remove(5);
    snapshot(&tree, "Tree 4 after deletion:", "bst_case4_after");

    // Case 5: deleting a node with one right child.
    let mut tree = BinaryTree::from_vec(vec![10, 15, 20]);
    snapshot(&tree, "Tree 5 before deletion:", "bst_case5_before");
    tree.remove(15);
    snapshot(&tree, "Tree 5 after deletion:", "bst_case5_after");

    // Case 6: deleting a node with two children.
    let mut tree = BinaryTree::from_vec(vec![10, 5, 15, 2, 7]);
    snapshot(&tree, "Tree 6 before deletion:", "bst_case6_before");
    tree.remove(5);
    snapshot(&tree, "Tree 6 after deletion:", "bst_case6_after");
    let image_path = format!("{}/bst_case6_after.png", OUTPUT_DIR);
    match render_png(&tree_to_dot(&tree), &image_path) {
        Ok(()) => println!("Graph image saved as: {}", image_path),
        Err(e) => println!("Failed to generate image: {}", e),
    }

    // Case 7: deleting the root node with two children.
    let mut tree = BinaryTree::from_vec(vec![10, 5, 15, 2, 7, 20]);
    println!("Internal path length of tree 7: {}", tree.internal_path_length());
    snapshot(&tree, "Tree 7 before deletion:", "bst_case7_before");
    tree.remove(10);
    snapshot(&tree, "Tree 7 after deletion:", "bst_case7_after");

    // Case 8: sequential values degenerate into a chain.
    let mut tree = BinaryTree::from_vec((1..=7).collect());
    println!("Internal path length of tree 8: {}", tree.internal_path_length());
    snapshot(&tree, "Tree 8 before deletion:", "bst_case8_before");
    tree.remove(4);
    snapshot(&tree, "Tree 8 after deletion:", "bst_case8_after");

    // Case 9: deleting a value that is not in the tree.
    let mut tree = BinaryTree::from_vec(vec![10, 5, 15]);
    snapshot(&tree, "Tree 9 before deletion:", "bst_case9_before");
    tree.remove(20);
    snapshot(&tree, "Tree 9 after deletion:", "bst_case9_after");

    // Case 10: a large tree of unique random values, rooted at the midpoint
    // of the key span, then emptied one deletion at a time.
    let midpoint = KEY_SPAN / 2;
    let mut values = vec![midpoint];
    values.extend(random_unique_values(RANDOM_COUNT - 1, KEY_SPAN - 1, &[midpoint]));
    let mut tree = BinaryTree::from_vec(values.clone());
    println!("Inserted {} unique random values", values.len());
    println!("Internal path length of tree 10: {}", tree.internal_path_length());
    let path = format!("{}/bst_case10_before.dot", OUTPUT_DIR);
    match save_dot_file(&path, &tree_to_dot(&tree)) {
        Ok(()) => println!("DOT file saved: {}\n", path),
        Err(e) => eprintln!("Could not write {}: {}\n", path, e),
    }

    for value in &values {
        tree.remove(*value);
    }
    snapshot(&tree, "Tree 10 after all deletions (should be empty):", "bst_case10_after");
}
