use crate::nearest::{clustered, uniform, DIMENSION as D, LEAF_SIZE, NUM_POINTS, NUM_QUERIES};
use criterion::Criterion;
use kdindex::{Index, KdTree, LinearIndex};

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query");
    group.sample_size(10);

    let queries = uniform(1234, NUM_QUERIES);
    let datasets = [
        ("uniform", uniform(0, NUM_POINTS)),
        ("clustered", clustered(0, NUM_POINTS)),
    ];
    for (name, points) in datasets {
        let tree = KdTree::build(points.clone(), LEAF_SIZE).expect("Failed to build KdTree");
        group.bench_function(format!("kdtree/{name}"), |b| {
            b.iter(|| query_index(&tree, &queries));
        });

        let linear = LinearIndex::new(points).expect("Failed to build LinearIndex");
        group.bench_function(format!("linear/{name}"), |b| {
            b.iter(|| query_index(&linear, &queries));
        });
    }
    group.finish();
}

fn query_index(index: &impl Index, queries: &[[f64; D]]) {
    for query in queries {
        let distance = index
            .nearest_squared_distance(query)
            .expect("Query dimension matches");
        assert!(distance.is_finite());
    }
}
