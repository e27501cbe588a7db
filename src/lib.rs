//! # kmeans-rs
//!
//! A from-scratch k-means clustering engine in Rust, compatible with ndarray.
//!
//! ## Features
//!
//! - **Two initialization strategies**: uniform random sampling and
//!   k-means++ seeding for better initial spread
//! - **Chunked assignment step**: processes both data and centroids in
//!   chunks to bound memory usage on large inputs
//! - **Parallel computation**: uses rayon for multi-threaded processing
//! - **Deterministic**: identical data, configuration and seed always
//!   produce an identical result
//! - **Restarts**: optional `n_init` independent runs, keeping the result
//!   with the lowest inertia
//! - **Optional BLAS acceleration**: enable `accelerate` (macOS) or
//!   `openblas` features for faster matrix operations
//!
//! ## Example
//!
//! ```rust
//! use kmeans_rs::{KMeansConfig, KMeansEngine};
//! use ndarray::Array2;
//! use ndarray_rand::RandomExt;
//! use ndarray_rand::rand_distr::Uniform;
//!
//! // Generate random data
//! let data = Array2::random((1000, 16), Uniform::new(-1.0f32, 1.0));
//!
//! // Fit and inspect the result
//! let mut engine = KMeansEngine::new(KMeansConfig::new(10).with_seed(42));
//! let result = engine.fit(&data.view()).unwrap();
//! assert_eq!(result.labels.len(), 1000);
//! assert_eq!(result.centroids.nrows(), 10);
//!
//! // Assign new points to the fitted centroids
//! let labels = engine.predict(&data.view()).unwrap();
//! assert_eq!(labels.len(), 1000);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use kmeans_rs::{InitStrategy, KMeansConfig, KMeansEngine};
//! use ndarray::Array2;
//! use ndarray_rand::RandomExt;
//! use ndarray_rand::rand_distr::Uniform;
//!
//! let data = Array2::random((500, 8), Uniform::new(-1.0f32, 1.0));
//!
//! let config = KMeansConfig::new(5)
//!     .with_max_iters(50)
//!     .with_tol(1e-6)
//!     .with_seed(42)
//!     .with_init(InitStrategy::Random)
//!     .with_n_init(3);
//!
//! let mut engine = KMeansEngine::new(config);
//! let labels = engine.fit_predict(&data.view()).unwrap();
//! assert_eq!(labels.len(), 500);
//! ```
//!
//! ## BLAS Acceleration
//!
//! For improved performance on large datasets, enable a BLAS backend:
//!
//! ```toml
//! # macOS (recommended - uses Apple Accelerate)
//! kmeans-rs = { version = "0.1", features = ["accelerate"] }
//!
//! # Linux/Windows (requires OpenBLAS installed)
//! kmeans-rs = { version = "0.1", features = ["openblas"] }
//! ```

// Link BLAS libraries when features are enabled
#[cfg(feature = "accelerate")]
extern crate accelerate_src;

#[cfg(feature = "openblas")]
extern crate openblas_src;

mod algorithm;
mod config;
pub mod dataset;
mod distance;
mod error;
mod init;
mod kmeans;

pub use algorithm::FitResult;
pub use config::{InitStrategy, KMeansConfig};
pub use error::KMeansError;
pub use kmeans::KMeansEngine;
