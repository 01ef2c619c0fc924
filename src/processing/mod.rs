//! Subnet processing logic.
//!
//! - [`calculator`] - the [`Calculator`] seam used by the one-shot command
//! - [`tree`] - the binary [`SubnetTree`] edited by the interactive mode

mod calculator;
mod tree;

pub use calculator::{Calculator, DefaultCalculator};
pub use tree::{
    max_split_depth, NodeId, Shape, SubnetNode, SubnetTree, MAX_SPLIT_DEPTH_V4,
    MAX_SPLIT_DEPTH_V6,
};
