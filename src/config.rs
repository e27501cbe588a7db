/// Centroid initialization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStrategy {
    /// Uniformly sample k distinct points from the dataset
    Random,
    /// k-means++ seeding: bias selection toward points far from already-chosen
    /// centroids to improve initial spread
    KMeansPlusPlus,
}

/// Configuration for the k-means engine
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of iterations (hard cap, must be >= 1)
    pub max_iters: usize,

    /// Convergence tolerance. The algorithm stops early when the maximum
    /// Euclidean displacement of any centroid between iterations is below
    /// this threshold. Must be >= 0.
    pub tol: f64,

    /// Random seed for centroid initialization
    pub seed: u64,

    /// Centroid initialization strategy
    pub init: InitStrategy,

    /// Number of independent restarts. Each restart runs the full algorithm
    /// with a seed derived from `seed`; the run with the lowest inertia wins.
    pub n_init: usize,

    /// Chunk size for data processing. Larger values use more memory but may be faster.
    pub chunk_size_data: usize,

    /// Chunk size for centroid processing. Larger values use more memory but may be faster.
    pub chunk_size_centroids: usize,

    /// Print verbose output during fitting
    pub verbose: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            max_iters: 100,
            tol: 1e-4,
            seed: 0,
            init: InitStrategy::KMeansPlusPlus,
            n_init: 1,
            chunk_size_data: 51_200,
            chunk_size_centroids: 10_240,
            verbose: false,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initialization strategy
    pub fn with_init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    /// Set the number of restarts
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the data chunk size
    pub fn with_chunk_size_data(mut self, chunk_size: usize) -> Self {
        self.chunk_size_data = chunk_size;
        self
    }

    /// Set the centroid chunk size
    pub fn with_chunk_size_centroids(mut self, chunk_size: usize) -> Self {
        self.chunk_size_centroids = chunk_size;
        self
    }
}
