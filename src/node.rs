/// A node of the tree arena.
///
/// Nodes reference points by their position in the original point set and
/// children by their slot in the arena, `usize::MAX` marking an absent child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A run `start..end` of the tree's permuted index array.
    Leaf { start: usize, end: usize },
    /// A split at `point` along `axis`. Points under `left` have an axis
    /// value no greater than the split point's, points under `right` no
    /// smaller.
    Internal {
        point: usize,
        axis: usize,
        left: usize,
        right: usize,
    },
}

impl Node {
    #[must_use]
    pub fn leaf(start: usize, end: usize) -> Node {
        Node::Leaf { start, end }
    }

    #[must_use]
    pub fn internal(point: usize, axis: usize, left: usize, right: usize) -> Node {
        Node::Internal {
            point,
            axis,
            left,
            right,
        }
    }

    /// Arena slots of the present children.
    pub fn children(&self) -> impl Iterator<Item = usize> {
        let (left, right) = match *self {
            Node::Leaf { .. } => (usize::MAX, usize::MAX),
            Node::Internal { left, right, .. } => (left, right),
        };
        [left, right].into_iter().filter(|&slot| slot != usize::MAX)
    }
}
