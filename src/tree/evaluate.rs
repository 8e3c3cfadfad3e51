//! Tree Evaluation Methods
//!
//! Traversal from the root to a leaf for both routing styles: named-feature
//! lookup and ordered positional parameters.
use super::tree::Tree;
use crate::errors::ScoreTreeError;
use crate::node::Node;
use crate::router::Router;
use hashbrown::HashMap;
use log::trace;
use rayon::prelude::*;
use std::fmt::Display;

/// Per-call input for feature-routed trees: feature name to value.
pub type FeatureMap<V> = HashMap<String, V>;

impl<T, V: PartialOrd + Display> Tree<T, V> {
    /// Walk from the root to a leaf, looking decision inputs up by name.
    ///
    /// Each decision node reads its declared feature from `features`; the
    /// same feature may be read again at a deeper node. The traversal never
    /// mutates the tree, so any number of calls may run concurrently.
    pub fn evaluate_by_feature(&self, features: &FeatureMap<V>) -> Result<&T, ScoreTreeError> {
        let mut node = self.root();
        loop {
            match node {
                Node::Leaf(score) => return Ok(score),
                Node::Decision { router, children } => {
                    let index = route_feature(router, features)?;
                    trace!("routed to child {} of {}", index, children.len());
                    node = child_at(children, index)?;
                }
            }
        }
    }

    /// Walk from the root to a leaf, consuming one element of `parameters`
    /// per decision node in traversal order.
    ///
    /// Surplus trailing parameters are ignored; running out of them before
    /// a leaf is reached is an error.
    pub fn evaluate_by_parameters(&self, parameters: &[V]) -> Result<&T, ScoreTreeError> {
        let mut node = self.root();
        let mut cursor = parameters.iter();
        loop {
            match node {
                Node::Leaf(score) => return Ok(score),
                Node::Decision { router, children } => {
                    let value = cursor
                        .next()
                        .ok_or(ScoreTreeError::InsufficientParameters(parameters.len()))?;
                    let index = route_value(router, value)?;
                    trace!("routed to child {} of {}", index, children.len());
                    node = child_at(children, index)?;
                }
            }
        }
    }

    /// Like [`Tree::evaluate_by_feature`], also returning the child index
    /// chosen at each decision node on the way down.
    pub fn decision_path_by_feature(
        &self,
        features: &FeatureMap<V>,
    ) -> Result<(&T, Vec<usize>), ScoreTreeError> {
        let mut node = self.root();
        let mut path = Vec::new();
        loop {
            match node {
                Node::Leaf(score) => return Ok((score, path)),
                Node::Decision { router, children } => {
                    let index = route_feature(router, features)?;
                    path.push(index);
                    node = child_at(children, index)?;
                }
            }
        }
    }

    /// Like [`Tree::evaluate_by_parameters`], also returning the child
    /// index chosen at each decision node on the way down.
    pub fn decision_path_by_parameters(
        &self,
        parameters: &[V],
    ) -> Result<(&T, Vec<usize>), ScoreTreeError> {
        let mut node = self.root();
        let mut cursor = parameters.iter();
        let mut path = Vec::new();
        loop {
            match node {
                Node::Leaf(score) => return Ok((score, path)),
                Node::Decision { router, children } => {
                    let value = cursor
                        .next()
                        .ok_or(ScoreTreeError::InsufficientParameters(parameters.len()))?;
                    let index = route_value(router, value)?;
                    path.push(index);
                    node = child_at(children, index)?;
                }
            }
        }
    }
}

impl<T, V> Tree<T, V>
where
    T: Clone + Send + Sync,
    V: PartialOrd + Display + Sync,
{
    fn evaluate_rows_single_threaded(
        &self,
        rows: &[FeatureMap<V>],
    ) -> Vec<Result<T, ScoreTreeError>> {
        rows.iter()
            .map(|row| self.evaluate_by_feature(row).map(T::clone))
            .collect()
    }

    fn evaluate_rows_parallel(&self, rows: &[FeatureMap<V>]) -> Vec<Result<T, ScoreTreeError>> {
        rows.par_iter()
            .map(|row| self.evaluate_by_feature(row).map(T::clone))
            .collect()
    }

    /// Score a batch of feature maps, one independent result per row.
    pub fn evaluate_rows(
        &self,
        rows: &[FeatureMap<V>],
        parallel: bool,
    ) -> Vec<Result<T, ScoreTreeError>> {
        if parallel {
            self.evaluate_rows_parallel(rows)
        } else {
            self.evaluate_rows_single_threaded(rows)
        }
    }
}

fn route_feature<V: PartialOrd + Display>(
    router: &Router<V>,
    features: &FeatureMap<V>,
) -> Result<usize, ScoreTreeError> {
    match router {
        Router::CutPoint(cut) => {
            let value = features
                .get(cut.feature())
                .ok_or_else(|| ScoreTreeError::MissingFeature(cut.feature().to_string()))?;
            cut.route(value)
        }
        Router::Condition(_) => Err(ScoreTreeError::ConditionRequiresParameters),
    }
}

fn route_value<V: PartialOrd + Display>(
    router: &Router<V>,
    value: &V,
) -> Result<usize, ScoreTreeError> {
    match router {
        Router::CutPoint(cut) => cut.route(value),
        Router::Condition(condition) => Ok(condition.route(value)),
    }
}

// Conditions are caller-supplied and trees can be assembled by hand, so
// every hop re-checks the index instead of trusting the router.
fn child_at<'a, T, V>(
    children: &'a [Node<T, V>],
    index: usize,
) -> Result<&'a Node<T, V>, ScoreTreeError> {
    children
        .get(index)
        .ok_or(ScoreTreeError::ChildIndexOutOfRange(index, children.len()))
}
