use crate::{
    distance::squared_euclidean,
    error::Result,
    index::Index,
    point_set::{check_query, dimension},
};
use ordered_float::OrderedFloat;

/// Exhaustive scan over all points, the reference every tree answer is
/// checked against.
pub struct LinearIndex<P> {
    dimension: usize,
    data: Vec<P>,
}

impl<P: AsRef<[f64]>> LinearIndex<P> {
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the points differ in length.
    pub fn new(data: Vec<P>) -> Result<Self> {
        Ok(Self {
            dimension: dimension(&data)?,
            data,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[P] {
        &self.data
    }
}

impl<P: AsRef<[f64]>> Index for LinearIndex<P> {
    fn nearest(&self, query: &[f64]) -> Result<Option<(usize, f64)>> {
        if self.data.is_empty() {
            return Ok(None);
        }
        check_query(self.dimension, query)?;

        // `min_by_key` keeps the first of equal minima.
        Ok(self
            .data
            .iter()
            .enumerate()
            .map(|(index, point)| (index, squared_euclidean(point.as_ref(), query)))
            .min_by_key(|&(_, distance)| OrderedFloat(distance)))
    }

    fn num_points(&self) -> usize {
        self.data.len()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
