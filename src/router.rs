//! Routers
//!
//! The rules a decision node uses to pick one of its children from an
//! input value.
use crate::errors::ScoreTreeError;
use crate::utils::is_strictly_ascending;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Bucketize a named feature value against an ascending set of cut points.
///
/// Cut points `[c0, c1, .., cn]` define the half-open buckets
/// `[c0, c1), [c1, c2), .., [cn-1, cn)`; bucket `i` selects child `i`.
/// Values below `c0` or at/above `cn` are out of range.
#[derive(Clone, Debug)]
pub struct CutPointRouter<V> {
    feature: String,
    cut_points: Vec<V>,
}

impl<V: PartialOrd> CutPointRouter<V> {
    /// Build a router from at least two strictly ascending cut points.
    pub fn new(feature: impl Into<String>, cut_points: Vec<V>) -> Result<Self, ScoreTreeError> {
        let feature = feature.into();
        if cut_points.len() < 2 {
            return Err(ScoreTreeError::TooFewCutPoints(feature, cut_points.len()));
        }
        if !is_strictly_ascending(&cut_points) {
            return Err(ScoreTreeError::CutPointsNotAscending(feature));
        }
        Ok(CutPointRouter { feature, cut_points })
    }

    /// Name of the feature this router reads.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// The ascending cut points.
    pub fn cut_points(&self) -> &[V] {
        &self.cut_points
    }

    /// Number of buckets, one per child.
    pub fn n_buckets(&self) -> usize {
        self.cut_points.len() - 1
    }

    /// Map a feature value to its bucket index.
    pub fn route(&self, value: &V) -> Result<usize, ScoreTreeError>
    where
        V: Display,
    {
        let mut at_or_below = 0usize;
        for cut_point in &self.cut_points {
            match cut_point.partial_cmp(value) {
                Some(Ordering::Less) | Some(Ordering::Equal) => at_or_below += 1,
                Some(Ordering::Greater) => {}
                None => return Err(ScoreTreeError::IncomparableFeature(self.feature.clone())),
            }
        }
        // Bucket 0 needs one cut point at or below the value; the last cut
        // point is an exclusive upper bound.
        if at_or_below == 0 || at_or_below == self.cut_points.len() {
            return Err(ScoreTreeError::ValueOutOfRange(
                self.feature.clone(),
                self.cut_points[0].to_string(),
                self.cut_points[self.cut_points.len() - 1].to_string(),
            ));
        }
        Ok(at_or_below - 1)
    }
}

/// Route by a caller-supplied condition on the next positional value.
///
/// The condition is an arbitrary total function from the input type to a
/// child index; the evaluator bounds-checks whatever it returns.
pub struct ConditionRouter<V> {
    condition: Arc<dyn Fn(&V) -> usize + Send + Sync>,
}

impl<V> ConditionRouter<V> {
    pub fn new(condition: impl Fn(&V) -> usize + Send + Sync + 'static) -> Self {
        ConditionRouter {
            condition: Arc::new(condition),
        }
    }

    /// Apply the condition to a value, returning the raw child index.
    pub fn route(&self, value: &V) -> usize {
        (self.condition)(value)
    }
}

impl<V> Clone for ConditionRouter<V> {
    fn clone(&self) -> Self {
        ConditionRouter {
            condition: Arc::clone(&self.condition),
        }
    }
}

impl<V> Debug for ConditionRouter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionRouter").finish_non_exhaustive()
    }
}

/// The rule a decision node uses to compute a child index.
#[derive(Clone, Debug)]
pub enum Router<V> {
    /// Bucketize a named feature against ascending cut points.
    CutPoint(CutPointRouter<V>),
    /// Delegate to a condition on the next positional value.
    Condition(ConditionRouter<V>),
}
