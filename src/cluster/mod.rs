//! K-means fitting for dense vectors.
//!
//! This module implements the classic Lloyd iteration: assign each point to
//! the nearest centroid, then update centroids to the mean of their points.
//! Repeat until the total within-cluster cost stabilizes.
//!
//! ## Objective
//!
//! K-means minimizes the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Why it converges**: the cost decreases monotonically. Each step either
//! decreases it or leaves it unchanged, and it is bounded below by 0.
//!
//! ## What this module adds over a bare loop
//!
//! - A pluggable assignment [`Metric`], with graceful degradation to a
//!   single cluster when the metric cannot produce finite distances.
//! - Cost diagnostics: total (`tss`), per-cluster within (`wss`), and
//!   between (`bss`) sum of squares, plus a per-iteration [`FitSummary`].
//! - Canonical label numbering, so equivalent fits are comparable.
//! - An explicit, tested [`EmptyClusterPolicy`] instead of NaN centroids.
//! - [`KmeansModel`] for idempotent fit-once semantics under concurrency.
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{Clustering, Kmeans};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! // Facade: seed with k-means++ and return labels only.
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! // Full fit: supply seed centroids, keep the diagnostics.
//! let seeds = vec![vec![0.0, 0.0], vec![10.0, 10.0]];
//! let fit = Kmeans::new(2).fit(&data, &seeds).unwrap();
//! assert!(fit.converged());
//! assert_eq!(fit.centroids().len(), 2);
//! assert!(fit.bss() + fit.wss().iter().sum::<f64>() - fit.tss() < 1e-9);
//! ```

mod assign;
pub mod init;
mod kmeans;
mod metric;
mod summary;
mod traits;
mod util;

pub use assign::{Assignment, NearestAssigner};
pub use kmeans::{EmptyClusterPolicy, Kmeans, KmeansFit, KmeansModel};
pub use metric::{Euclidean, Metric, SquaredEuclidean};
pub use summary::{FitSnapshot, FitSummary};
pub use traits::Clustering;
