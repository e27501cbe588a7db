use crate::algorithm::{assign_labels, kmeans_fit, FitResult};
use crate::config::KMeansConfig;
use crate::distance::compute_inertia;
use crate::error::KMeansError;
use ndarray::{Array1, Array2, ArrayView2};

/// K-means clustering engine compatible with ndarray.
///
/// Each `fit` call is independent and deterministic given the same data and
/// configuration. The fitted centroids are kept on the engine so that
/// `predict` and `score` can be called on new data afterwards.
///
/// # Example
///
/// ```
/// use kmeans_rs::{KMeansConfig, KMeansEngine};
/// use ndarray::Array2;
/// use ndarray_rand::RandomExt;
/// use ndarray_rand::rand_distr::Uniform;
///
/// let data = Array2::random((1000, 16), Uniform::new(-1.0f32, 1.0));
///
/// let mut engine = KMeansEngine::new(KMeansConfig::new(10).with_seed(42));
/// let result = engine.fit(&data.view()).unwrap();
/// assert_eq!(result.labels.len(), 1000);
///
/// let labels = engine.predict(&data.view()).unwrap();
/// assert_eq!(labels, result.labels);
/// ```
pub struct KMeansEngine {
    /// Engine configuration
    config: KMeansConfig,

    /// Number of features, fixed by the first successful fit
    d: usize,

    /// Fitted centroids (None until a fit completes)
    centroids: Option<Array2<f32>>,
}

impl KMeansEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: KMeansConfig) -> Self {
        Self {
            config,
            d: 0,
            centroids: None,
        }
    }

    /// Create a new engine with k clusters and default configuration.
    pub fn with_k(k: usize) -> Self {
        Self::new(KMeansConfig::new(k))
    }

    /// Fit the engine to the data.
    ///
    /// Runs initialization, assignment/update cycles and the convergence
    /// check, then stores the final centroids for later `predict`/`score`
    /// calls. Validation happens before any state changes, so a failed fit
    /// leaves the engine as it was.
    ///
    /// # Errors
    ///
    /// - `EmptyDataset` if the data has no rows or no columns
    /// - `InvalidConfiguration` if `k` is 0 or exceeds the number of
    ///   samples, or iteration/tolerance/restart bounds are out of range
    /// - `DimensionMismatch` if the data width differs from a previous fit
    pub fn fit(&mut self, data: &ArrayView2<f32>) -> Result<FitResult, KMeansError> {
        let n_features = data.ncols();

        if self.d != 0 && n_features != self.d {
            return Err(KMeansError::DimensionMismatch(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let result = kmeans_fit(data, &self.config)?;

        self.d = n_features;
        self.centroids = Some(result.centroids.clone());
        Ok(result)
    }

    /// Predict cluster assignments for new data using the fitted centroids.
    ///
    /// The centroids are not modified.
    ///
    /// # Errors
    ///
    /// - `NotFitted` if the engine has not completed a fit
    /// - `DimensionMismatch` if the data width differs from the training data
    pub fn predict(&self, data: &ArrayView2<f32>) -> Result<Array1<i64>, KMeansError> {
        let centroids = self.centroids.as_ref().ok_or(KMeansError::NotFitted)?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(KMeansError::DimensionMismatch(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        Ok(assign_labels(
            data,
            &centroids.view(),
            self.config.chunk_size_data,
            self.config.chunk_size_centroids,
        ))
    }

    /// Fit the engine and return the cluster assignments in one call.
    pub fn fit_predict(&mut self, data: &ArrayView2<f32>) -> Result<Array1<i64>, KMeansError> {
        let result = self.fit(data)?;
        Ok(result.labels)
    }

    /// Negative inertia of the data against the fitted centroids.
    ///
    /// Reported with a negative sign so that higher is better, which is the
    /// convention elbow-method sweeps expect.
    pub fn score(&self, data: &ArrayView2<f32>) -> Result<f64, KMeansError> {
        let labels = self.predict(data)?;
        let centroids = self.centroids.as_ref().ok_or(KMeansError::NotFitted)?;
        Ok(-compute_inertia(data, &centroids.view(), &labels.view()))
    }

    /// Get the fitted centroids.
    ///
    /// Returns `None` if the engine has not been fitted.
    pub fn centroids(&self) -> Option<&Array2<f32>> {
        self.centroids.as_ref()
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features. Zero until the first successful fit.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
