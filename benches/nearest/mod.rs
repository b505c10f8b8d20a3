mod build;
mod query;

use rand::{rngs::StdRng, Rng, SeedableRng};

// Benchmark parameters:
pub const DIMENSION: usize = 3;
pub const NUM_POINTS: usize = 100_000;
pub const NUM_QUERIES: usize = 1000;
pub const LEAF_SIZE: usize = 10;

pub use build::benchmark as build;
pub use query::benchmark as query;

pub fn uniform(seed: u64, n: usize) -> Vec<[f64; DIMENSION]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut point = [0.0; DIMENSION];
            for x in &mut point {
                *x = rng.gen();
            }
            point
        })
        .collect()
}

// Refined mesh zones: 20% background noise, two dense clusters
pub fn clustered(seed: u64, n: usize) -> Vec<[f64; DIMENSION]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let r: f64 = rng.gen();
            let (center, spread) = if r < 0.2 {
                (0.5, 1.0)
            } else if r < 0.6 {
                (0.5, 0.05)
            } else {
                (0.1, 0.05)
            };
            let mut point = [0.0; DIMENSION];
            for x in &mut point {
                *x = center + (rng.gen::<f64>() - 0.5) * spread;
            }
            point
        })
        .collect()
}

pub fn duplicates(n: usize) -> Vec<[f64; DIMENSION]> {
    vec![[0.5; DIMENSION]; n]
}
