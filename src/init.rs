use crate::config::InitStrategy;
use ndarray::{Array2, ArrayView2};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Select k initial centroids from the dataset using the given strategy.
///
/// The caller guarantees `1 <= k <= n`.
pub fn initialize_centroids(
    data: &ArrayView2<f32>,
    k: usize,
    strategy: InitStrategy,
    rng: &mut ChaCha8Rng,
) -> Array2<f32> {
    match strategy {
        InitStrategy::Random => initialize_random(data, k, rng),
        InitStrategy::KMeansPlusPlus => initialize_kmeans_plus_plus(data, k, rng),
    }
}

/// Uniformly sample k distinct data points as initial centroids
fn initialize_random(data: &ArrayView2<f32>, k: usize, rng: &mut ChaCha8Rng) -> Array2<f32> {
    let n_samples = data.nrows();
    let n_features = data.ncols();

    let indices: Vec<usize> = (0..n_samples).collect();
    let selected: Vec<usize> = indices.choose_multiple(rng, k).cloned().collect();

    let mut centroids = Array2::zeros((k, n_features));
    for (centroid_idx, &data_idx) in selected.iter().enumerate() {
        for j in 0..n_features {
            centroids[[centroid_idx, j]] = data[[data_idx, j]];
        }
    }

    centroids
}

/// k-means++ seeding.
///
/// The first centroid is picked uniformly. Every subsequent centroid is
/// sampled with probability proportional to the squared distance from each
/// point to its nearest already-chosen centroid, which biases selection
/// toward well-spread seeds.
fn initialize_kmeans_plus_plus(
    data: &ArrayView2<f32>,
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Array2<f32> {
    let n_samples = data.nrows();
    let n_features = data.ncols();

    let mut centroids = Array2::zeros((k, n_features));
    let mut chosen: Vec<usize> = Vec::with_capacity(k);

    let first = rng.gen_range(0..n_samples);
    chosen.push(first);
    centroids.row_mut(0).assign(&data.row(first));

    // Squared distance from each point to its nearest chosen centroid,
    // refreshed incrementally as centroids are added
    let mut min_dists: Vec<f64> = vec![f64::INFINITY; n_samples];

    for centroid_idx in 1..k {
        let last = data.row(chosen[centroid_idx - 1]);
        min_dists.par_iter_mut().enumerate().for_each(|(i, best)| {
            let point = data.row(i);
            let mut dist_sq = 0.0f64;
            for j in 0..n_features {
                let d = (point[j] - last[j]) as f64;
                dist_sq += d * d;
            }
            if dist_sq < *best {
                *best = dist_sq;
            }
        });

        let next = sample_weighted(&min_dists, rng);
        chosen.push(next);
        centroids.row_mut(centroid_idx).assign(&data.row(next));
    }

    centroids
}

/// Sample an index with probability proportional to its weight using a
/// cumulative scan. Falls back to a uniform pick when all weights are zero
/// (every point coincides with a chosen centroid).
fn sample_weighted(weights: &[f64], rng: &mut ChaCha8Rng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.gen_range(0..weights.len());
    }

    let mut r = rng.gen_range(0.0..total);
    for (i, &w) in weights.iter().enumerate() {
        r -= w;
        if r <= 0.0 {
            return i;
        }
    }
    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand::SeedableRng;

    #[test]
    fn test_random_init_shape_and_membership() {
        let data = Array2::random((100, 8), Uniform::new(-1.0f32, 1.0));
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let centroids = initialize_centroids(&data.view(), 5, InitStrategy::Random, &mut rng);

        assert_eq!(centroids.nrows(), 5);
        assert_eq!(centroids.ncols(), 8);

        // Every centroid must be an actual data point
        for c in centroids.outer_iter() {
            let found = data.outer_iter().any(|row| row == c);
            assert!(found, "centroid is not a member of the dataset");
        }
    }

    #[test]
    fn test_random_init_distinct_points() {
        let data = Array2::random((20, 4), Uniform::new(-1.0f32, 1.0));
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let centroids = initialize_centroids(&data.view(), 20, InitStrategy::Random, &mut rng);

        // k == n forces all points to be selected exactly once
        for row in data.outer_iter() {
            let count = centroids.outer_iter().filter(|c| *c == row).count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_kmeans_plus_plus_prefers_spread() {
        // Two tight far-apart pairs: the second seed should come from the
        // opposite pair with overwhelming probability
        let data = array![[0.0f32, 0.0], [0.0, 0.1], [100.0, 0.0], [100.0, 0.1]];

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let centroids =
                initialize_centroids(&data.view(), 2, InitStrategy::KMeansPlusPlus, &mut rng);

            let spread = (centroids[[0, 0]] - centroids[[1, 0]]).abs();
            assert!(
                spread > 50.0,
                "seed {}: seeds not spread across pairs: {:?}",
                seed,
                centroids
            );
        }
    }

    #[test]
    fn test_kmeans_plus_plus_determinism() {
        let data = Array2::random((200, 16), Uniform::new(-1.0f32, 1.0));

        let mut rng1 = ChaCha8Rng::seed_from_u64(123);
        let mut rng2 = ChaCha8Rng::seed_from_u64(123);

        let c1 = initialize_centroids(&data.view(), 10, InitStrategy::KMeansPlusPlus, &mut rng1);
        let c2 = initialize_centroids(&data.view(), 10, InitStrategy::KMeansPlusPlus, &mut rng2);

        assert_eq!(c1, c2);
    }

    #[test]
    fn test_sample_weighted_zero_total_falls_back() {
        let weights = vec![0.0; 10];
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let idx = sample_weighted(&weights, &mut rng);
        assert!(idx < 10);
    }

    #[test]
    fn test_sample_weighted_respects_weights() {
        // All weight on index 3
        let weights = vec![0.0, 0.0, 0.0, 5.0, 0.0];
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..10 {
            assert_eq!(sample_weighted(&weights, &mut rng), 3);
        }
    }
}
