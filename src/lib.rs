//! Lloyd-iteration k-means fitting.
//!
//! `lloyd` is a small, backend-agnostic library implementing the iterative
//! partition-based clustering algorithm (Lloyd-style k-means) for dense
//! vectors, with convergence and variance diagnostics.
//!
//! The primary public API is under [`cluster`], which provides:
//! - the [`cluster::Kmeans`] fit loop (assign → update → converge), with
//!   TSS/WSS/BSS cost bookkeeping and a per-iteration fit summary
//! - pluggable assignment metrics and a nearest-centroid assigner
//! - k-means++ and random centroid seeding

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    Assignment, Clustering, EmptyClusterPolicy, Euclidean, FitSnapshot, FitSummary, Kmeans,
    KmeansFit, KmeansModel, Metric, NearestAssigner, SquaredEuclidean,
};
pub use error::{Error, Result};
