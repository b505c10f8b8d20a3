use crate::error::{Error, Result};

/// Returns the dimension shared by all points, or 0 for an empty set.
///
/// The first point fixes the dimension; the first point that disagrees is
/// reported by position.
pub fn dimension<P: AsRef<[f64]>>(points: &[P]) -> Result<usize> {
    let expected = match points.first() {
        Some(first) => first.as_ref().len(),
        None => return Ok(0),
    };
    for (position, point) in points.iter().enumerate().skip(1) {
        let found = point.as_ref().len();
        if found != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found,
                position: Some(position),
            });
        }
    }
    Ok(expected)
}

pub fn check_query(dimension: usize, query: &[f64]) -> Result<()> {
    if query.len() == dimension {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected: dimension,
            found: query.len(),
            position: None,
        })
    }
}
