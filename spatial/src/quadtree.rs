use crate::error::{SpatialError, SpatialResult};
use crate::node::ItemNode;
use common::shapes::Aabb;
use tracing::{debug, trace};

mod config;
mod maintenance;
mod mutation;
mod query;
mod types;

pub use config::Config;
pub use types::{TreeAddress, TreeNode};
use types::NodeStack;

/// Adaptive quadtree stored as one flat node array.
///
/// Children of a split are four contiguous slots referenced by index. Nodes
/// are never freed: a collapsed subtree is marked closed and its slots are
/// reopened when the same node splits again.
///
/// Stored entries only move towards the root without the caller being told
/// (when a subtree collapses). An address therefore always names the node
/// holding the entry or one of its descendants, and [`QuadTree::remove`] and
/// [`QuadTree::update`] resolve it by walking parent links.
#[derive(Debug)]
pub struct QuadTree {
    nodes: Vec<TreeNode>,
    bounds: Aabb,
    node_capacity: usize,
    max_depth: usize,
    pool_size: usize,
}
