use conv::ValueFrom;
use log::{debug, trace};

use crate::{
    distance::squared_euclidean,
    error::{Error, Result},
    index::Index,
    node::Node,
    partition::select,
    point_set::{check_query, dimension},
};

/// Leaf size used by [`KdTree::new`].
pub const DEFAULT_LEAF_SIZE: usize = 10;

/// A static k-d tree answering exact nearest neighbor queries.
///
/// The tree owns its points and never copies their coordinates into nodes;
/// nodes live in a flat arena and refer to points by their original position.
/// Nothing can be inserted or removed once the tree is built.
pub struct KdTree<P> {
    points: Vec<P>,
    dimension: usize,
    leaf_size: usize,
    indices: Vec<usize>,
    nodes: Vec<Node>,
    root: usize,
}

/// Outcome of a single nearest neighbor traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Search {
    /// Position of the nearest point, `None` if the tree is empty.
    pub index: Option<usize>,
    /// Squared distance to the nearest point, `f64::INFINITY` if the tree is empty.
    pub squared_distance: f64,
    pub distance_calls: usize,
    pub nodes_visited: usize,
}

impl Search {
    fn new() -> Self {
        Search {
            index: None,
            squared_distance: f64::INFINITY,
            distance_calls: 0,
            nodes_visited: 0,
        }
    }

    // Ties keep the earlier candidate.
    fn offer(&mut self, index: usize, point: &[f64], query: &[f64]) {
        let distance = squared_euclidean(point, query);
        self.distance_calls += 1;
        if distance < self.squared_distance {
            self.squared_distance = distance;
            self.index = Some(index);
        }
    }
}

/// Shape of a built tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeStats {
    pub num_points: usize,
    pub num_internal: usize,
    pub num_leaves: usize,
    /// Number of nodes on the longest root-to-leaf path, 0 for an empty tree.
    pub depth: usize,
    pub mean_leaf_size: f64,
}

impl<P: AsRef<[f64]>> KdTree<P> {
    /// Builds a tree with [`DEFAULT_LEAF_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the points differ in length.
    pub fn new(points: Vec<P>) -> Result<Self> {
        Self::build(points, DEFAULT_LEAF_SIZE)
    }

    /// Builds a tree whose leaves hold at most `leaf_size` points.
    ///
    /// The dimension is taken from the first point. An empty point set gives
    /// an empty tree of dimension 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLeafSize`] if `leaf_size` is 0, and
    /// [`Error::DimensionMismatch`] naming the first point whose length
    /// differs from the first point's.
    pub fn build(points: Vec<P>, leaf_size: usize) -> Result<Self> {
        if leaf_size == 0 {
            debug!("rejecting k-d tree build: leaf size must be positive");
            return Err(Error::InvalidLeafSize);
        }
        let dimension = dimension(&points).map_err(|err| {
            debug!("rejecting k-d tree build: {err}");
            err
        })?;

        let mut builder = Builder {
            points: &points,
            dimension,
            leaf_size,
            indices: (0..points.len()).collect(),
            nodes: Vec::new(),
        };
        let root = builder.build(0, points.len(), 0);
        let Builder { indices, nodes, .. } = builder;

        let tree = KdTree {
            points,
            dimension,
            leaf_size,
            indices,
            nodes,
            root,
        };
        debug!(
            "built k-d tree: {} points, dimension {}, leaf size {}, {} nodes, depth {}",
            tree.len(),
            tree.dimension,
            tree.leaf_size,
            tree.nodes.len(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Position of the point nearest to `query`, `None` if the tree is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the tree is not empty and
    /// `query` does not have its dimension.
    pub fn nearest_index(&self, query: &[f64]) -> Result<Option<usize>> {
        Ok(self.search(query)?.index)
    }

    /// Squared distance from `query` to its nearest point, `f64::INFINITY`
    /// if the tree is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the tree is not empty and
    /// `query` does not have its dimension.
    pub fn nearest_squared_distance(&self, query: &[f64]) -> Result<f64> {
        Ok(self.search(query)?.squared_distance)
    }

    /// Position of and squared distance to the nearest point.
    ///
    /// # Errors
    ///
    /// See [`KdTree::nearest_index`].
    pub fn nearest(&self, query: &[f64]) -> Result<Option<(usize, f64)>> {
        let search = self.search(query)?;
        Ok(search.index.map(|index| (index, search.squared_distance)))
    }

    /// Runs a full branch-and-bound traversal for `query`.
    ///
    /// # Errors
    ///
    /// See [`KdTree::nearest_index`].
    pub fn search(&self, query: &[f64]) -> Result<Search> {
        let mut search = Search::new();
        if self.root == usize::MAX {
            return Ok(search);
        }
        check_query(self.dimension, query)?;

        self.search_recursive(self.root, query, &mut search);
        trace!(
            "k-d tree query: {} distance calls, {} nodes visited",
            search.distance_calls,
            search.nodes_visited
        );
        Ok(search)
    }

    fn search_recursive(&self, slot: usize, query: &[f64], search: &mut Search) {
        search.nodes_visited += 1;
        match self.nodes[slot] {
            Node::Leaf { start, end } => {
                for &index in &self.indices[start..end] {
                    search.offer(index, self.points[index].as_ref(), query);
                }
            }
            Node::Internal {
                point,
                axis,
                left,
                right,
            } => {
                let split = self.points[point].as_ref();
                search.offer(point, split, query);

                let offset = query[axis] - split[axis];
                let (near, far) = if offset < 0.0 {
                    (left, right)
                } else {
                    (right, left)
                };

                if near != usize::MAX {
                    self.search_recursive(near, query, search);
                }
                // The far side can only hold a closer point if the splitting
                // plane cuts the current best hypersphere.
                if far != usize::MAX && offset * offset < search.squared_distance {
                    self.search_recursive(far, query, search);
                }
            }
        }
    }
}

impl<P> KdTree<P> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        if self.root == usize::MAX {
            return 0;
        }
        let mut depth = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((slot, level)) = stack.pop() {
            depth = depth.max(level);
            stack.extend(self.nodes[slot].children().map(|child| (child, level + 1)));
        }
        depth
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let mut num_leaves = 0;
        let mut leaf_points = 0;
        for node in &self.nodes {
            if let Node::Leaf { start, end } = node {
                num_leaves += 1;
                leaf_points += end - start;
            }
        }
        let mean_leaf_size = match (f64::value_from(leaf_points), f64::value_from(num_leaves)) {
            (Ok(total), Ok(count)) if num_leaves > 0 => total / count,
            _ => 0.0,
        };
        TreeStats {
            num_points: self.len(),
            num_internal: self.nodes.len() - num_leaves,
            num_leaves,
            depth: self.depth(),
            mean_leaf_size,
        }
    }
}

impl<P> Default for KdTree<P> {
    fn default() -> Self {
        KdTree {
            points: Vec::new(),
            dimension: 0,
            leaf_size: DEFAULT_LEAF_SIZE,
            indices: Vec::new(),
            nodes: Vec::new(),
            root: usize::MAX,
        }
    }
}

impl<P: AsRef<[f64]>> Index for KdTree<P> {
    fn nearest(&self, query: &[f64]) -> Result<Option<(usize, f64)>> {
        KdTree::nearest(self, query)
    }

    fn nearest_index(&self, query: &[f64]) -> Result<Option<usize>> {
        KdTree::nearest_index(self, query)
    }

    fn nearest_squared_distance(&self, query: &[f64]) -> Result<f64> {
        KdTree::nearest_squared_distance(self, query)
    }

    fn num_points(&self) -> usize {
        self.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

struct Builder<'a, P> {
    points: &'a [P],
    dimension: usize,
    leaf_size: usize,
    indices: Vec<usize>,
    nodes: Vec<Node>,
}

impl<P: AsRef<[f64]>> Builder<'_, P> {
    // Builds the subtree over indices[start..end] and returns its slot.
    fn build(&mut self, start: usize, end: usize, depth: usize) -> usize {
        let count = end - start;
        if count == 0 {
            return usize::MAX;
        }
        // Zero-dimensional points have no axis to split on.
        if count <= self.leaf_size || self.dimension == 0 {
            return self.push(Node::leaf(start, end));
        }

        let axis = depth % self.dimension;
        let mid = start + count / 2;
        let points = self.points;
        select(&mut self.indices[start..end], mid - start, |index| {
            points[index].as_ref()[axis]
        });

        let left = self.build(start, mid, depth + 1);
        let right = self.build(mid + 1, end, depth + 1);
        self.push(Node::internal(self.indices[mid], axis, left, right))
    }

    fn push(&mut self, node: Node) -> usize {
        let slot = self.nodes.len();
        self.nodes.push(node);
        slot
    }
}
