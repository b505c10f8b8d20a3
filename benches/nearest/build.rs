use crate::nearest::{clustered, duplicates, uniform, LEAF_SIZE, NUM_POINTS};
use criterion::Criterion;
use kdindex::KdTree;

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");
    group.sample_size(10);

    let datasets = [
        ("uniform", uniform(0, NUM_POINTS)),
        ("clustered", clustered(0, NUM_POINTS)),
        ("duplicates", duplicates(NUM_POINTS)),
    ];
    for (name, points) in &datasets {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let tree =
                    KdTree::build(points.clone(), LEAF_SIZE).expect("Failed to build KdTree");
                assert_eq!(tree.len(), NUM_POINTS);
            });
        });
    }
    group.finish();
}
