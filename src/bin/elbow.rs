//! Elbow-method sweep over k on synthetic clustered data.
//!
//! Generates points around a handful of well-separated centers, fits the
//! engine for a range of k values, and prints the score (negative inertia)
//! for each so the elbow is visible on stderr-free stdout.
//!
//! Usage: `elbow [max_k]`

use kmeans_rs::{KMeansConfig, KMeansEngine};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let max_k: usize = if args.len() > 1 { args[1].parse()? } else { 8 };

    let n_samples = 600;
    let n_features = 2;
    let true_clusters = 3;

    // Points around 3 well-separated centers
    let centers = [[-5.0f32, -5.0], [0.0, 5.0], [5.0, -5.0]];
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut data = Array2::<f32>::zeros((n_samples, n_features));
    for i in 0..n_samples {
        let center = centers[i % true_clusters];
        for j in 0..n_features {
            data[[i, j]] = center[j] + rng.gen_range(-1.0f32..1.0);
        }
    }

    eprintln!(
        "Generated {} samples around {} centers; sweeping k = 1..={}",
        n_samples, true_clusters, max_k
    );

    println!("k\tscore");
    for k in 1..=max_k {
        let config = KMeansConfig::new(k)
            .with_max_iters(100)
            .with_tol(1e-6)
            .with_seed(42)
            .with_n_init(3);

        let mut engine = KMeansEngine::new(config);
        engine.fit(&data.view())?;
        let score = engine.score(&data.view())?;

        println!("{}\t{:.4}", k, score);
    }

    Ok(())
}
