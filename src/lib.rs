// Modules
pub mod errors;
pub mod node;
pub mod router;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use errors::ScoreTreeError;
pub use node::Node;
pub use router::{ConditionRouter, CutPointRouter, Router};
pub use tree::evaluate::FeatureMap;
pub use tree::tree::Tree;
