use ndarray::{Array1, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Compute squared L2 norms for each row of a 2D array
/// Returns a 1D array where each element is the squared norm of the corresponding row
#[inline]
pub fn compute_squared_norms(data: &ArrayView2<f32>) -> Array1<f32> {
    let n_samples = data.nrows();
    let mut norms = Array1::zeros(n_samples);

    // Parallel computation of row norms
    norms
        .as_slice_mut()
        .unwrap()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, norm)| {
            let row = data.row(i);
            *norm = row.dot(&row);
        });

    norms
}

/// Find the nearest centroid for each data point in a chunk using double-chunking
///
/// Uses the identity: ||x - c||^2 = ||x||^2 + ||c||^2 - 2*x.c
///
/// Ties are broken toward the lowest centroid index: chunks are scanned in
/// ascending index order and a candidate only replaces the current best on a
/// strictly smaller distance.
///
/// # Arguments
/// * `data_chunk` - Chunk of data points (n_data, n_features)
/// * `data_norms` - Squared norms of data points (n_data,)
/// * `centroids` - All centroids (k, n_features)
/// * `centroid_norms` - Squared norms of centroids (k,)
/// * `chunk_size_centroids` - Size of centroid chunks
///
/// # Returns
/// * `labels` - Cluster assignments for each data point (n_data,)
pub fn find_nearest_centroids_chunked(
    data_chunk: &ArrayView2<f32>,
    data_norms: &ArrayView1<f32>,
    centroids: &ArrayView2<f32>,
    centroid_norms: &ArrayView1<f32>,
    chunk_size_centroids: usize,
) -> Array1<i64> {
    let n_data = data_chunk.nrows();
    let k = centroids.nrows();

    let mut best_labels = Array1::zeros(n_data);
    let mut best_dists = Array1::from_elem(n_data, f32::INFINITY);

    // Process centroids in chunks
    let mut c_start = 0;
    while c_start < k {
        let c_end = (c_start + chunk_size_centroids).min(k);
        let centroid_chunk = centroids.slice(ndarray::s![c_start..c_end, ..]);
        let centroid_chunk_norms = centroid_norms.slice(ndarray::s![c_start..c_end]);

        let n_centroids_chunk = c_end - c_start;

        // Compute x.c using matrix multiplication
        // data_chunk: (n_data, n_features), centroid_chunk.t(): (n_features, n_centroids_chunk)
        // Result: (n_data, n_centroids_chunk)
        let dot_products = data_chunk.dot(&centroid_chunk.t());

        // Parallel update of best labels and distances
        best_labels
            .as_slice_mut()
            .unwrap()
            .par_iter_mut()
            .zip(best_dists.as_slice_mut().unwrap().par_iter_mut())
            .enumerate()
            .for_each(|(i, (label, best_dist))| {
                let x_norm = data_norms[i];

                for j in 0..n_centroids_chunk {
                    let c_norm = centroid_chunk_norms[j];
                    let dot = dot_products[[i, j]];

                    // Squared distance: ||x||^2 + ||c||^2 - 2*x.c
                    let dist = x_norm + c_norm - 2.0 * dot;

                    if dist < *best_dist {
                        *best_dist = dist;
                        *label = (c_start + j) as i64;
                    }
                }
            });

        c_start = c_end;
    }

    best_labels
}

/// Compute the maximum Euclidean displacement of any centroid between two
/// centroid sets. This is the convergence measure for the main loop.
pub fn compute_max_centroid_shift(
    old_centroids: &ArrayView2<f32>,
    new_centroids: &ArrayView2<f32>,
) -> f64 {
    let k = old_centroids.nrows();

    (0..k)
        .into_par_iter()
        .map(|i| {
            let old_c = old_centroids.row(i);
            let new_c = new_centroids.row(i);

            let mut diff_sq = 0.0f64;
            for j in 0..old_c.len() {
                let d = (new_c[j] - old_c[j]) as f64;
                diff_sq += d * d;
            }
            diff_sq.sqrt()
        })
        .reduce(|| 0.0, f64::max)
}

/// Sum of squared distances from each point to its assigned centroid.
///
/// Accumulates exact squared distances in f64 rather than reusing the
/// dot-product identity, which can go slightly negative under f32 rounding.
pub fn compute_inertia(
    data: &ArrayView2<f32>,
    centroids: &ArrayView2<f32>,
    labels: &ArrayView1<i64>,
) -> f64 {
    let n_samples = data.nrows();

    // Per-point distances in parallel, summed sequentially so the result
    // does not depend on rayon's split points
    let dists: Vec<f64> = (0..n_samples)
        .into_par_iter()
        .map(|i| {
            let point = data.row(i);
            let centroid = centroids.row(labels[i] as usize);

            let mut dist_sq = 0.0f64;
            for j in 0..point.len() {
                let d = (point[j] - centroid[j]) as f64;
                dist_sq += d * d;
            }
            dist_sq
        })
        .collect();

    dists.iter().sum()
}
