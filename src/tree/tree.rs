use crate::node::Node;
use crate::router::Router;
use crate::utils::fmt_cut_points;
use std::fmt::{self, Display};

/// An immutable scoring tree.
///
/// Owns a single root node and exposes the evaluation entry points (see
/// the `evaluate` module). A tree whose root is a leaf is a valid
/// constant-scoring tree: zero decisions, always the same score.
///
/// Trees are never mutated after construction, so a `Tree` whose score and
/// value types are `Send + Sync` can be shared across threads and evaluated
/// concurrently without locking.
#[derive(Clone, Debug)]
pub struct Tree<T, V> {
    root: Node<T, V>,
}

impl<T, V> Tree<T, V> {
    /// Build a tree from an already-assembled root node.
    pub fn new(root: Node<T, V>) -> Self {
        Tree { root }
    }

    /// The root node.
    pub fn root(&self) -> &Node<T, V> {
        &self.root
    }

    /// Longest root-to-leaf path, counted in decision hops.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves in the tree.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }
}

impl<T: Display, V: Display + PartialOrd> Display for Tree<T, V> {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(&Node<T, V>, usize)> = vec![(&self.root, 0)];
        let mut r = String::new();
        while let Some((node, depth)) = print_buffer.pop() {
            match node {
                Node::Leaf(score) => {
                    r += format!("{}leaf={}\n", "      ".repeat(depth).as_str(), score).as_str();
                }
                Node::Decision { router, children } => {
                    let rule = match router {
                        Router::CutPoint(cut) => {
                            format!("[{} in [{})]", cut.feature(), fmt_cut_points(cut.cut_points()))
                        }
                        Router::Condition(_) => format!("[condition -> {} children]", children.len()),
                    };
                    r += format!("{}{}\n", "      ".repeat(depth).as_str(), rule).as_str();
                    for child in children.iter().rev() {
                        print_buffer.push((child, depth + 1));
                    }
                }
            }
        }
        write!(f, "{}", r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_income_tree() -> Tree<f64, f64> {
        let young = Node::cut_point(
            "income",
            vec![0.0, 30_000.0, 100_000.0],
            vec![Node::leaf(420.0), Node::leaf(510.0)],
        )
        .unwrap();
        let root = Node::cut_point(
            "age",
            vec![18.0, 35.0, 120.0],
            vec![young, Node::leaf(600.0)],
        )
        .unwrap();
        Tree::new(root)
    }

    #[test]
    fn test_degenerate_tree_stats() {
        let tree: Tree<f64, f64> = Tree::new(Node::leaf(7.0));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.n_leaves(), 1);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_nested_tree_stats() {
        let tree = age_income_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
    }

    #[test]
    fn test_display_lists_every_node() {
        let tree = age_income_tree();
        let printed = format!("{}", tree);
        println!("{}", tree);
        assert_eq!(printed.lines().count(), 5);
        assert!(printed.contains("[age in [18, 35, 120)]"));
        assert!(printed.contains("[income in [0, 30000, 100000)]"));
        assert!(printed.contains("leaf=600"));
    }

    #[test]
    fn test_display_condition_rule() {
        let root = Node::condition(
            |v: &f64| usize::from(*v >= 0.0),
            vec![Node::leaf(-1.0), Node::leaf(1.0)],
        )
        .unwrap();
        let printed = format!("{}", Tree::new(root));
        assert!(printed.contains("[condition -> 2 children]"));
    }
}
