pub mod error;
pub mod grid;
pub mod node;
pub mod quadtree;

pub use error::{SpatialError, SpatialResult};
pub use grid::{Grid, GridAddress};
pub use node::{GroupSet, ItemNode};
pub use quadtree::{Config, QuadTree, TreeAddress, TreeNode};
