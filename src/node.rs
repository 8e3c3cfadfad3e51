//! Tree node types.
use crate::errors::ScoreTreeError;
use crate::router::{ConditionRouter, CutPointRouter, Router};

/// A node in a scoring tree.
///
/// Either a terminal leaf holding the final score, or a decision node that
/// routes to exactly one of its children. Children are exclusively owned;
/// the structure is a strict tree, never a DAG.
#[derive(Clone, Debug)]
pub enum Node<T, V> {
    /// Terminal node holding a score.
    Leaf(T),
    /// Internal node selecting one child per input value.
    Decision {
        router: Router<V>,
        children: Vec<Node<T, V>>,
    },
}

impl<T, V> Node<T, V> {
    /// Create a leaf holding `score`.
    pub fn leaf(score: T) -> Self {
        Node::Leaf(score)
    }

    /// Create a decision node routed by a caller-supplied condition.
    ///
    /// The condition must return a valid index into `children` for every
    /// value it is given; the evaluator bounds-checks it regardless.
    pub fn condition(
        condition: impl Fn(&V) -> usize + Send + Sync + 'static,
        children: Vec<Node<T, V>>,
    ) -> Result<Self, ScoreTreeError> {
        if children.is_empty() {
            return Err(ScoreTreeError::NoChildren);
        }
        Ok(Node::Decision {
            router: Router::Condition(ConditionRouter::new(condition)),
            children,
        })
    }

    /// Returns true if this is a leaf node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Get the score, if this is a leaf.
    #[inline]
    pub fn score(&self) -> Option<&T> {
        match self {
            Node::Leaf(score) => Some(score),
            Node::Decision { .. } => None,
        }
    }

    /// Get the router and children, if this is a decision node.
    pub fn decision(&self) -> Option<(&Router<V>, &[Node<T, V>])> {
        match self {
            Node::Leaf(_) => None,
            Node::Decision { router, children } => Some((router, children.as_slice())),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Decision { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    pub(crate) fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision { children, .. } => children.iter().map(Node::n_leaves).sum(),
        }
    }
}

impl<T, V: PartialOrd> Node<T, V> {
    /// Create a decision node that buckets `feature` against `cut_points`.
    ///
    /// `cut_points` must be strictly ascending with at least two entries,
    /// and `children` must hold exactly one node per bucket, i.e.
    /// `cut_points.len() - 1` of them.
    pub fn cut_point(
        feature: impl Into<String>,
        cut_points: Vec<V>,
        children: Vec<Node<T, V>>,
    ) -> Result<Self, ScoreTreeError> {
        let router = CutPointRouter::new(feature, cut_points)?;
        if children.len() != router.n_buckets() {
            return Err(ScoreTreeError::ChildCountMismatch(
                router.feature().to_string(),
                router.n_buckets(),
                children.len(),
            ));
        }
        Ok(Node::Decision {
            router: Router::CutPoint(router),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_accessors() {
        let node: Node<f64, f64> = Node::leaf(1.5);
        assert!(node.is_leaf());
        assert_eq!(node.score(), Some(&1.5));
        assert!(node.decision().is_none());
    }

    #[test]
    fn test_decision_accessors() {
        let node = Node::cut_point(
            "age",
            vec![0.0, 18.0, 120.0],
            vec![Node::leaf("minor"), Node::leaf("adult")],
        )
        .unwrap();
        assert!(!node.is_leaf());
        assert!(node.score().is_none());
        let (_, children) = node.decision().unwrap();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_cut_point_child_count_mismatch() {
        let children = vec![Node::leaf(0.0)];
        assert!(matches!(
            Node::cut_point("age", vec![0.0, 18.0, 120.0], children),
            Err(ScoreTreeError::ChildCountMismatch(_, 2, 1))
        ));
    }

    #[test]
    fn test_condition_requires_children() {
        let children: Vec<Node<f64, f64>> = vec![];
        assert!(matches!(
            Node::condition(|_| 0, children),
            Err(ScoreTreeError::NoChildren)
        ));
    }
}
