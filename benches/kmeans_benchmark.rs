use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmeans_rs::{InitStrategy, KMeansConfig, KMeansEngine};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;

fn benchmark_kmeans_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 128;
    let k = 50;
    let sample_sizes = [1_000, 5_000, 10_000];

    for n_samples in sample_sizes.iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            n_samples,
            |b, &n_samples| {
                let data = Array2::random((n_samples, n_features), Uniform::new(-1.0f32, 1.0));
                let config = KMeansConfig::new(k)
                    .with_max_iters(5)
                    .with_tol(1e-8)
                    .with_seed(42);

                b.iter(|| {
                    let mut engine = KMeansEngine::new(config.clone());
                    engine.fit(black_box(&data.view())).unwrap()
                });
            },
        );
    }
    group.finish();
}

fn benchmark_kmeans_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let n_features = 128;
    let cluster_counts = [10, 50, 100];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let data = Array2::random((n_samples, n_features), Uniform::new(-1.0f32, 1.0));
            let config = KMeansConfig::new(k)
                .with_max_iters(5)
                .with_tol(1e-8)
                .with_seed(42);

            b.iter(|| {
                let mut engine = KMeansEngine::new(config.clone());
                engine.fit(black_box(&data.view())).unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_init_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_init");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let n_features = 64;
    let k = 50;

    for (name, init) in [
        ("random", InitStrategy::Random),
        ("kmeans++", InitStrategy::KMeansPlusPlus),
    ] {
        group.bench_function(name, |b| {
            let data = Array2::random((n_samples, n_features), Uniform::new(-1.0f32, 1.0));
            let config = KMeansConfig::new(k)
                .with_max_iters(5)
                .with_tol(1e-8)
                .with_seed(42)
                .with_init(init);

            b.iter(|| {
                let mut engine = KMeansEngine::new(config.clone());
                engine.fit(black_box(&data.view())).unwrap()
            });
        });
    }
    group.finish();
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_predict");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_train = 5_000;
    let n_features = 128;
    let k = 50;
    let predict_sizes = [1_000, 5_000];

    // Pre-fit the engine
    let train_data = Array2::random((n_train, n_features), Uniform::new(-1.0f32, 1.0));
    let config = KMeansConfig::new(k)
        .with_max_iters(10)
        .with_tol(1e-8)
        .with_seed(42);
    let mut engine = KMeansEngine::new(config);
    engine.fit(&train_data.view()).unwrap();

    for n_predict in predict_sizes.iter() {
        group.throughput(Throughput::Elements(*n_predict as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_predict),
            n_predict,
            |b, &n_predict| {
                let test_data = Array2::random((n_predict, n_features), Uniform::new(-1.0f32, 1.0));

                b.iter(|| engine.predict(black_box(&test_data.view())).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_kmeans_varying_samples,
    benchmark_kmeans_varying_clusters,
    benchmark_init_strategies,
    benchmark_predict,
);

criterion_main!(benches);
