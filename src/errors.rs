//! Errors
//!
//! Custom error types used throughout the `scoretree` crate.
use thiserror::Error;

/// Errors that can occur while assembling or evaluating a scoring tree.
#[derive(Debug, Error)]
pub enum ScoreTreeError {
    /// Feature value falls outside the routable range of a decision node.
    #[error("Value for feature '{0}' is not within [{1}, {2}).")]
    ValueOutOfRange(String, String, String),
    /// Named feature absent from the input mapping.
    #[error("Feature '{0}' is missing from the input.")]
    MissingFeature(String),
    /// Feature value present but not orderable against the node's cut points.
    #[error("Value for feature '{0}' cannot be ordered against the cut points.")]
    IncomparableFeature(String),
    /// A routing step produced an index outside the node's children.
    #[error("Routing chose child index {0}, but the node has only {1} children.")]
    ChildIndexOutOfRange(usize, usize),
    /// Ordered input ran out before a leaf was reached.
    #[error("The {0} supplied parameters are not enough to reach a decision.")]
    InsufficientParameters(usize),
    /// Feature-map evaluation reached a node routed by a positional condition.
    #[error("A condition-routed node has no feature name; evaluate with ordered parameters instead.")]
    ConditionRequiresParameters,
    /// Fewer than two cut points supplied at construction.
    #[error("Feature '{0}' needs at least two cut points, got {1}.")]
    TooFewCutPoints(String, usize),
    /// Cut points supplied out of order or with duplicates.
    #[error("Cut points for feature '{0}' must be strictly ascending.")]
    CutPointsNotAscending(String),
    /// Child count does not match the bucket count.
    #[error("Feature '{0}' defines {1} buckets but {2} children were supplied.")]
    ChildCountMismatch(String, usize, usize),
    /// A decision node was built without children.
    #[error("A decision node requires at least one child.")]
    NoChildren,
}
