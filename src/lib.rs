//! Static k-d tree for exact nearest neighbor queries.
//!
//! ```
//! use kdindex::KdTree;
//!
//! let points = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [5.0, 5.0, 5.0]];
//! let tree = KdTree::new(points).unwrap();
//!
//! assert_eq!(tree.nearest_index(&[0.9, 1.2, 1.0]).unwrap(), Some(1));
//! assert_eq!(tree.nearest_squared_distance(&[5.0, 5.0, 3.0]).unwrap(), 4.0);
//! ```

mod distance;
mod error;
mod index;
mod kdtree;
mod linear;
mod node;
mod partition;
mod point_set;

pub use distance::squared_euclidean;
pub use error::{Error, Result};
pub use index::Index;
pub use kdtree::{KdTree, Search, TreeStats, DEFAULT_LEAF_SIZE};
pub use linear::LinearIndex;
