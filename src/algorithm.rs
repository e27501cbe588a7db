use crate::config::KMeansConfig;
use crate::distance::{
    compute_inertia, compute_max_centroid_shift, compute_squared_norms,
    find_nearest_centroids_chunked,
};
use crate::error::KMeansError;
use crate::init::initialize_centroids;
use ndarray::{Array1, Array2, ArrayView2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Result of a complete k-means fit
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Final centroids, shape (k, n_features)
    pub centroids: Array2<f32>,
    /// Cluster assignment for each input point, values in [0, k)
    pub labels: Array1<i64>,
    /// Number of iterations actually executed
    pub n_iterations: usize,
    /// Sum of squared distances from each point to its assigned centroid
    pub inertia: f64,
}

/// Validate data and configuration before any state is touched.
///
/// All error conditions are detected here, so a failed fit leaves the
/// engine unchanged.
pub fn validate(data: &ArrayView2<f32>, config: &KMeansConfig) -> Result<(), KMeansError> {
    let n_samples = data.nrows();

    if n_samples == 0 || data.ncols() == 0 {
        return Err(KMeansError::EmptyDataset);
    }

    if config.k == 0 {
        return Err(KMeansError::InvalidConfiguration(
            "k must be greater than 0".to_string(),
        ));
    }

    if config.k > n_samples {
        return Err(KMeansError::InvalidConfiguration(format!(
            "k ({}) exceeds the number of samples ({})",
            config.k, n_samples
        )));
    }

    if config.max_iters == 0 {
        return Err(KMeansError::InvalidConfiguration(
            "max_iters must be at least 1".to_string(),
        ));
    }

    if config.tol < 0.0 {
        return Err(KMeansError::InvalidConfiguration(format!(
            "tolerance must be non-negative, got {}",
            config.tol
        )));
    }

    if config.n_init == 0 {
        return Err(KMeansError::InvalidConfiguration(
            "n_init must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Run k-means with restarts. Each restart derives its seed from the base
/// seed and the run index; the run with the lowest inertia wins, first on
/// ties. Deterministic given identical data and configuration.
pub fn kmeans_fit(
    data: &ArrayView2<f32>,
    config: &KMeansConfig,
) -> Result<FitResult, KMeansError> {
    validate(data, config)?;

    let mut best: Option<FitResult> = None;

    for run in 0..config.n_init {
        let seed = config.seed.wrapping_add(run as u64);

        if config.verbose && config.n_init > 1 {
            eprintln!("Restart {}/{} (seed {})", run + 1, config.n_init, seed);
        }

        let result = lloyd_single_run(data, config, seed);

        let improved = match &best {
            Some(b) => result.inertia < b.inertia,
            None => true,
        };
        if improved {
            best = Some(result);
        }
    }

    // n_init >= 1 was validated, so at least one run happened
    Ok(best.unwrap())
}

/// One full Lloyd iteration cycle from a fresh initialization.
fn lloyd_single_run(data: &ArrayView2<f32>, config: &KMeansConfig, seed: u64) -> FitResult {
    let n_samples = data.nrows();
    let n_features = data.ncols();
    let k = config.k;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    if config.verbose {
        eprintln!(
            "Fitting k-means: {} samples, {} features, {} clusters ({:?} init)",
            n_samples, n_features, k, config.init
        );
    }

    // Pre-compute data norms once; they are reused every iteration
    let data_norms = compute_squared_norms(data);

    let mut centroids = initialize_centroids(data, k, config.init, &mut rng);
    let mut n_iterations = 0;

    for iteration in 0..config.max_iters {
        let iter_start = Instant::now();
        n_iterations = iteration + 1;

        let centroid_norms = compute_squared_norms(&centroids.view());

        // Accumulators for the update step
        let mut cluster_sums: Array2<f64> = Array2::zeros((k, n_features));
        let mut cluster_counts: Array1<usize> = Array1::zeros(k);

        // Assignment step, processing data in chunks
        let mut start_idx = 0;
        while start_idx < n_samples {
            let end_idx = (start_idx + config.chunk_size_data).min(n_samples);
            let data_chunk = data.slice(ndarray::s![start_idx..end_idx, ..]);
            let data_chunk_norms = data_norms.slice(ndarray::s![start_idx..end_idx]);

            let chunk_labels = find_nearest_centroids_chunked(
                &data_chunk,
                &data_chunk_norms,
                &centroids.view(),
                &centroid_norms.view(),
                config.chunk_size_centroids,
            );

            for (i, &label) in chunk_labels.iter().enumerate() {
                let cluster_idx = label as usize;
                cluster_counts[cluster_idx] += 1;
                for j in 0..n_features {
                    cluster_sums[[cluster_idx, j]] += data_chunk[[i, j]] as f64;
                }
            }

            start_idx = end_idx;
        }

        // Update step: componentwise mean per cluster. A cluster that
        // received no points keeps its previous centroid, so the result
        // stays deterministic.
        let prev_centroids = centroids.clone();
        let mut n_empty = 0;

        for cluster_idx in 0..k {
            let count = cluster_counts[cluster_idx];
            if count > 0 {
                for j in 0..n_features {
                    centroids[[cluster_idx, j]] =
                        (cluster_sums[[cluster_idx, j]] / count as f64) as f32;
                }
            } else {
                n_empty += 1;
            }
        }

        if n_empty > 0 && config.verbose {
            eprintln!("  {} empty clusters left unchanged", n_empty);
        }

        // Convergence: maximum displacement of any single centroid
        let shift = compute_max_centroid_shift(&prev_centroids.view(), &centroids.view());

        if config.verbose {
            let iter_time = iter_start.elapsed().as_secs_f64();
            eprintln!(
                "  Iteration {}/{}: max shift = {:.6}, time = {:.4}s",
                iteration + 1,
                config.max_iters,
                shift,
                iter_time
            );
        }

        if shift <= config.tol {
            if config.verbose {
                eprintln!(
                    "  Converged after {} iterations (max shift {:.6} <= tol {:.6})",
                    iteration + 1,
                    shift,
                    config.tol
                );
            }
            break;
        }
    }

    // Finalize: one last assignment pass against the final centroids, which
    // also yields the inertia
    let labels = assign_labels(
        data,
        &centroids.view(),
        config.chunk_size_data,
        config.chunk_size_centroids,
    );
    let inertia = compute_inertia(data, &centroids.view(), &labels.view());

    if config.verbose {
        eprintln!("  Final inertia: {:.6}", inertia);
    }

    FitResult {
        centroids,
        labels,
        n_iterations,
        inertia,
    }
}

/// Assign each point to its nearest centroid without modifying the centroids.
pub fn assign_labels(
    data: &ArrayView2<f32>,
    centroids: &ArrayView2<f32>,
    chunk_size_data: usize,
    chunk_size_centroids: usize,
) -> Array1<i64> {
    let n_samples = data.nrows();

    let data_norms = compute_squared_norms(data);
    let centroid_norms = compute_squared_norms(centroids);

    let mut labels = Array1::zeros(n_samples);

    let mut start_idx = 0;
    while start_idx < n_samples {
        let end_idx = (start_idx + chunk_size_data).min(n_samples);
        let data_chunk = data.slice(ndarray::s![start_idx..end_idx, ..]);
        let data_chunk_norms = data_norms.slice(ndarray::s![start_idx..end_idx]);

        let chunk_labels = find_nearest_centroids_chunked(
            &data_chunk,
            &data_chunk_norms,
            centroids,
            &centroid_norms.view(),
            chunk_size_centroids,
        );

        for (i, &label) in chunk_labels.iter().enumerate() {
            labels[start_idx + i] = label;
        }

        start_idx = end_idx;
    }

    labels
}
