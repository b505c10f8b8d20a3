/// Squared Euclidean distance between two points of equal dimension.
///
/// The square root is never taken; callers that need the true distance
/// apply it themselves.
#[must_use]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += (x - y).powi(2);
    }
    sum
}
