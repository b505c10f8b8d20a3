use crate::error::Result;

/// Exact nearest neighbor lookup over a fixed point set.
///
/// Distances are squared Euclidean. An empty index answers every query with
/// `None` (or `f64::INFINITY`) rather than an error.
pub trait Index {
    /// Position of and squared distance to the nearest point.
    ///
    /// # Errors
    ///
    /// Fails with `DimensionMismatch` if the index is not empty and `query`
    /// does not have its dimension.
    fn nearest(&self, query: &[f64]) -> Result<Option<(usize, f64)>>;

    /// # Errors
    ///
    /// See [`Index::nearest`].
    fn nearest_index(&self, query: &[f64]) -> Result<Option<usize>> {
        Ok(self.nearest(query)?.map(|(index, _)| index))
    }

    /// # Errors
    ///
    /// See [`Index::nearest`].
    fn nearest_squared_distance(&self, query: &[f64]) -> Result<f64> {
        Ok(self
            .nearest(query)?
            .map_or(f64::INFINITY, |(_, distance)| distance))
    }

    fn num_points(&self) -> usize;
    fn dimension(&self) -> usize;
}
