//! K-means fitting via Lloyd iterations.
//!
//! # The Objective
//!
//! K-means partitions m observations into k clusters by minimizing the
//! within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! # The Loop
//!
//! Each iteration assigns every row to its nearest centroid, then replaces
//! each centroid with the mean of its members. The iteration cost (`tss`) is
//! the total squared Euclidean distance of members to their *previous*
//! centroid; the loop stops when the cost improvement drops below the
//! configured tolerance, or when the iteration budget runs out.
//!
//! The cost is an internal proxy computed with squared Euclidean distance
//! regardless of the assignment metric, so a custom [`Metric`] changes which
//! centroid a row joins but not how progress is measured.
//!
//! # Degenerate paths
//!
//! - `k == 1` never enters the loop: every row gets label 0, the centroid is
//!   the global mean, and `tss` is the total squared distance to it.
//! - A metric that cannot produce finite distances
//!   ([`Assignment::NonFinite`]) permanently degrades the fit to `k = 1`,
//!   with a warning. This is a one-way transition, not an error.
//!
//! # Diagnostics
//!
//! After the loop, cluster numbering is canonicalized (first appearance in
//! row order), per-cluster `wss` is computed against the final centroids,
//! and `bss = tss - Σwss`. Note `tss` keeps its old-centroid bookkeeping
//! definition, so `bss` is the approximation inherent to Lloyd's algorithm,
//! not a recomputation. A [`FitSummary`] records one row per iteration.

use std::sync::Mutex;
use std::time::Instant;

use rand::prelude::*;

use super::assign::{Assignment, NearestAssigner};
use super::init;
use super::metric::{Euclidean, Metric};
use super::summary::{FitSnapshot, FitSummary};
use super::traits::Clustering;
use super::util::{mean_row, squared_euclidean_f64};
use crate::error::{Error, Result};

/// Policy for a cluster that finishes an iteration with zero members.
///
/// A memberless cluster has no mean; dividing by a zero count would plant a
/// NaN centroid. Both policies below are deterministic given the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// Keep the previous centroid unchanged.
    #[default]
    Retain,
    /// Replace the centroid with a data row drawn from the seeded RNG.
    Reseed,
}

/// K-means configuration (builder style).
///
/// `fit` takes the data and an externally supplied seed centroid set and
/// returns an immutable [`KmeansFit`] snapshot. The [`Clustering`] facade
/// (`fit_predict`) seeds centroids itself via k-means++.
#[derive(Debug, Clone)]
pub struct Kmeans<M: Metric = Euclidean> {
    /// Number of clusters.
    k: usize,
    /// Maximum Lloyd iterations.
    max_iter: usize,
    /// Convergence tolerance on the cost improvement.
    tol: f64,
    /// Random seed (k-means++ seeding, `Reseed` policy).
    seed: Option<u64>,
    /// What to do with a memberless cluster.
    empty_policy: EmptyClusterPolicy,
    /// Assignment metric.
    metric: M,
}

impl Kmeans<Euclidean> {
    /// Create a new k-means configuration with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            tol: 1e-4,
            seed: None,
            empty_policy: EmptyClusterPolicy::default(),
            metric: Euclidean,
        }
    }
}

impl<M: Metric> Kmeans<M> {
    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the empty-cluster policy.
    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Swap the assignment metric.
    pub fn with_metric<N: Metric>(self, metric: N) -> Kmeans<N> {
        Kmeans {
            k: self.k,
            max_iter: self.max_iter,
            tol: self.tol,
            seed: self.seed,
            empty_policy: self.empty_policy,
            metric,
        }
    }

    fn seeded_rng(&self) -> StdRng {
        // Explicit seed when configured; otherwise derive one from entropy.
        StdRng::seed_from_u64(self.seed.unwrap_or_else(|| rand::rng().random()))
    }

    fn validate(&self, data: &[Vec<f32>], init: &[Vec<f32>]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.k > data.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: data.len(),
            });
        }
        let n = data[0].len();
        for row in data {
            if row.len() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
        }
        if init.len() != self.k {
            return Err(Error::InvalidParameter {
                name: "init",
                message: "must supply exactly k seed centroids",
            });
        }
        for centroid in init {
            if centroid.len() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    found: centroid.len(),
                });
            }
        }
        Ok(())
    }

    /// Fit the model from an externally supplied seed centroid set.
    ///
    /// Returns an immutable snapshot; the configuration itself is never
    /// mutated, so one `Kmeans` value can fit many datasets concurrently.
    pub fn fit(&self, data: &[Vec<f32>], init: &[Vec<f32>]) -> Result<KmeansFit> {
        self.validate(data, init)?;
        let timer = Instant::now();

        if self.k == 1 {
            return Ok(finalize_singular(data, timer, FitSummary::default(), 0));
        }

        let m = data.len();
        let n = data[0].len();
        let k = self.k;
        let mut rng = self.seeded_rng();

        let mut centroids: Vec<Vec<f32>> = init.to_vec();
        let mut labels: Vec<usize> = vec![0; m];
        let mut summary = FitSummary::default();
        let mut tss = f64::INFINITY;
        let mut max_tss = f64::NEG_INFINITY;
        let mut converged = false;

        let mut iter = 0;
        while iter < self.max_iter {
            match NearestAssigner::new(&centroids, &self.metric).assign(data) {
                Assignment::Assigned {
                    labels: assigned, ..
                } => labels = assigned,
                Assignment::NonFinite => {
                    // One-way degradation: the metric cannot partition the
                    // space, so collapse to a single cluster and finish.
                    tracing::warn!(
                        "assignment metric produced an entirely non-finite distance matrix; \
                         returning one cluster"
                    );
                    return Ok(finalize_singular(data, timer, summary, iter));
                }
            }

            // Fold member rows into per-cluster sum, count, and cost against
            // the previous centroid.
            let mut sums = vec![vec![0.0f64; n]; k];
            let mut counts = vec![0usize; k];
            let mut costs = vec![0.0f64; k];
            for (row, &label) in data.iter().zip(&labels) {
                counts[label] += 1;
                costs[label] += squared_euclidean_f64(row, &centroids[label]);
                for (s, &x) in sums[label].iter_mut().zip(row) {
                    *s += f64::from(x);
                }
            }
            let system_cost: f64 = costs.iter().sum();

            let mut new_centroids: Vec<Vec<f32>> = Vec::with_capacity(k);
            for i in 0..k {
                if counts[i] == 0 {
                    match self.empty_policy {
                        EmptyClusterPolicy::Retain => {
                            tracing::debug!(cluster = i, "empty cluster, retaining centroid");
                            new_centroids.push(centroids[i].clone());
                        }
                        EmptyClusterPolicy::Reseed => {
                            let idx = rng.random_range(0..m);
                            tracing::debug!(cluster = i, row = idx, "empty cluster, reseeding");
                            new_centroids.push(data[idx].clone());
                        }
                    }
                } else {
                    let count = counts[i] as f64;
                    new_centroids.push(sums[i].iter().map(|&s| (s / count) as f32).collect());
                }
            }

            summary.push(FitSnapshot {
                iteration: iter,
                converged,
                max_tss,
                tss,
                wss_sum: f64::NAN,
                bss: f64::NAN,
                wall: timer.elapsed(),
            });

            // Infinite on the first pass, when tss is still +inf.
            let diff = tss - system_cost;
            centroids = new_centroids;
            tss = system_cost;
            if diff.is_infinite() {
                max_tss = tss;
            }
            tracing::debug!(iteration = iter, tss, "lloyd iteration complete");

            // An infinite diff never satisfies the tolerance, even an
            // infinite one: IEEE `inf < inf` is false.
            if diff.abs() < self.tol {
                converged = true;
                iter += 1;
                break;
            }
            iter += 1;
        }
        let iterations = iter;

        if !converged {
            tracing::warn!(
                max_iter = self.max_iter,
                "k-means did not converge within the iteration budget"
            );
        }

        reorder_labels_and_centroids(&mut labels, &mut centroids);

        let mut wss = vec![0.0f64; k];
        for (row, &label) in data.iter().zip(&labels) {
            wss[label] += squared_euclidean_f64(row, &centroids[label]);
        }
        let wss_sum: f64 = wss.iter().sum();
        let bss = tss - wss_sum;

        summary.push(FitSnapshot {
            iteration: iterations,
            converged,
            max_tss,
            tss,
            wss_sum,
            bss,
            wall: timer.elapsed(),
        });

        Ok(KmeansFit {
            labels,
            centroids,
            tss,
            wss,
            bss,
            converged,
            iterations,
            summary,
        })
    }
}

/// The shared single-cluster path: k = 1 at entry, or the non-finite-metric
/// fallback mid-loop. Everything lands in one cluster centered on the global
/// mean, and the fit counts as converged after one iteration.
fn finalize_singular(
    data: &[Vec<f32>],
    timer: Instant,
    mut summary: FitSummary,
    iters_before: usize,
) -> KmeansFit {
    let mean = mean_row(data);
    let tss: f64 = data
        .iter()
        .map(|row| squared_euclidean_f64(row, &mean))
        .sum();
    let iterations = iters_before + 1;

    // The summary table keeps NaN in the WSS/BSS columns on this path; the
    // fitted values themselves are exact: the centroid *is* the mean, so
    // wss = [tss] and bss = 0.
    summary.push(FitSnapshot {
        iteration: iterations,
        converged: true,
        max_tss: tss,
        tss,
        wss_sum: f64::NAN,
        bss: f64::NAN,
        wall: timer.elapsed(),
    });

    KmeansFit {
        labels: vec![0; data.len()],
        centroids: vec![mean],
        tss,
        wss: vec![tss],
        bss: 0.0,
        converged: true,
        iterations,
        summary,
    }
}

/// Renumber clusters by first appearance in row order, so equivalent fits
/// produce identical label numbering. Centroids are reordered in lockstep;
/// memberless clusters keep their relative order after the observed ones.
fn reorder_labels_and_centroids(labels: &mut [usize], centroids: &mut Vec<Vec<f32>>) {
    let k = centroids.len();
    let mut remap = vec![usize::MAX; k];
    let mut next = 0;
    for &label in labels.iter() {
        if remap[label] == usize::MAX {
            remap[label] = next;
            next += 1;
        }
    }
    for slot in remap.iter_mut() {
        if *slot == usize::MAX {
            *slot = next;
            next += 1;
        }
    }

    for label in labels.iter_mut() {
        *label = remap[*label];
    }
    let mut reordered: Vec<Vec<f32>> = vec![Vec::new(); k];
    for (old, centroid) in centroids.iter_mut().enumerate() {
        reordered[remap[old]] = std::mem::take(centroid);
    }
    *centroids = reordered;
}

/// An immutable fitted k-means model.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    labels: Vec<usize>,
    centroids: Vec<Vec<f32>>,
    tss: f64,
    wss: Vec<f64>,
    bss: f64,
    converged: bool,
    iterations: usize,
    summary: FitSummary,
}

impl KmeansFit {
    /// Final cluster label per row, in canonical numbering.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Final centroids, ordered to match the labels.
    pub fn centroids(&self) -> &[Vec<f32>] {
        &self.centroids
    }

    /// Total within-cluster cost of the last iteration (against the
    /// pre-update centroids).
    pub fn tss(&self) -> f64 {
        self.tss
    }

    /// Per-cluster within-cluster sum of squares against the final centroids.
    pub fn wss(&self) -> &[f64] {
        &self.wss
    }

    /// Between-cluster sum of squares, `tss - Σwss`.
    pub fn bss(&self) -> f64 {
        self.bss
    }

    /// Whether the tolerance was met within the iteration budget.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of Lloyd iterations executed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Per-iteration diagnostic log.
    pub fn summary(&self) -> &FitSummary {
        &self.summary
    }

    /// Consume the fit, keeping only the labels.
    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }
}

/// A k-means model with an idempotent, lock-guarded fit.
///
/// Holds the configuration together with its seed centroids and caches the
/// first successful fit. Concurrent `fit` calls on the same model serialize
/// on an internal mutex; later callers observe the already-completed result
/// rather than recomputing (the stored iteration count never changes).
#[derive(Debug)]
pub struct KmeansModel<M: Metric = Euclidean> {
    config: Kmeans<M>,
    init: Vec<Vec<f32>>,
    fitted: Mutex<Option<KmeansFit>>,
}

impl<M: Metric> KmeansModel<M> {
    /// Create an unfitted model from a configuration and seed centroids.
    pub fn new(config: Kmeans<M>, init: Vec<Vec<f32>>) -> Self {
        Self {
            config,
            init,
            fitted: Mutex::new(None),
        }
    }

    /// Fit once; subsequent calls return the stored result.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let mut guard = match self.fitted.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(fit) = guard.as_ref() {
            return Ok(fit.clone());
        }
        let fit = self.config.fit(data, &self.init)?;
        *guard = Some(fit.clone());
        Ok(fit)
    }

    /// The stored fit, if `fit` has completed successfully.
    pub fn fitted(&self) -> Option<KmeansFit> {
        match self.fitted.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl<M: Metric> Clustering for Kmeans<M> {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let init = init::kmeans_pp(data, self.k, &mut self.seeded_rng())?;
        Ok(self.fit(data, &init)?.into_labels())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two tight pairs: {(0,0),(0,1)} and {(10,0),(10,1)}.
    fn two_pairs() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ]
    }

    fn seeds() -> Vec<Vec<f32>> {
        vec![vec![0.0, 0.0], vec![10.0, 0.0]]
    }

    #[test]
    fn two_cluster_scenario() {
        let fit = Kmeans::new(2).fit(&two_pairs(), &seeds()).unwrap();

        assert_eq!(fit.labels(), &[0, 0, 1, 1]);
        assert_eq!(fit.centroids()[0], vec![0.0, 0.5]);
        assert_eq!(fit.centroids()[1], vec![10.0, 0.5]);

        // Iteration costs: 2.0 against the seeds, then 1.0 against the
        // updated centroids, then 1.0 again (diff 0 -> converged).
        assert!(fit.converged());
        assert_eq!(fit.iterations(), 3);
        assert!((fit.tss() - 1.0).abs() < 1e-9);
        assert!((fit.wss()[0] - 0.5).abs() < 1e-9);
        assert!((fit.wss()[1] - 0.5).abs() < 1e-9);
        assert!(fit.bss().abs() < 1e-9);

        // Three in-loop rows plus the final one.
        assert_eq!(fit.summary().len(), 4);
        let rows = fit.summary().rows();
        assert!(rows[0].tss.is_infinite());
        assert!((rows[1].max_tss - 2.0).abs() < 1e-9);
        let last = rows.last().unwrap();
        assert!(last.converged);
        assert!((last.wss_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn singular_k_skips_the_loop() {
        let data = two_pairs();
        let fit = Kmeans::new(1).fit(&data, &[vec![3.0, 3.0]]).unwrap();

        assert_eq!(fit.labels(), &[0, 0, 0, 0]);
        assert_eq!(fit.centroids().len(), 1);
        assert!(fit.converged());
        assert_eq!(fit.iterations(), 1);

        // tss = total squared distance to the global mean (5, 0.5).
        let expected = 4.0 * 25.0 + 4.0 * 0.25;
        assert!((fit.tss() - expected).abs() < 1e-6);
        assert_eq!(fit.wss().len(), 1);
        assert!((fit.wss()[0] - fit.tss()).abs() < 1e-9);
        assert_eq!(fit.bss(), 0.0);
        assert_eq!(fit.summary().len(), 1);
    }

    #[test]
    fn infinite_tolerance_converges_on_the_second_pass() {
        // The first pass always sees an infinite improvement, and
        // |inf| < inf is false, so even an infinite tolerance needs one
        // more pass.
        let fit = Kmeans::new(2)
            .with_tol(f64::INFINITY)
            .fit(&two_pairs(), &seeds())
            .unwrap();

        assert!(fit.converged());
        assert_eq!(fit.iterations(), 2);
    }

    #[test]
    fn exhausted_budget_reports_not_converged() {
        let fit = Kmeans::new(2)
            .with_max_iter(1)
            .fit(&two_pairs(), &seeds())
            .unwrap();

        assert!(!fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert_eq!(fit.labels(), &[0, 0, 1, 1]);

        // Statistics are still computed on this path: tss is the cost
        // against the seeds, wss against the updated centroids.
        assert!((fit.tss() - 2.0).abs() < 1e-9);
        let wss_sum: f64 = fit.wss().iter().sum();
        assert!((fit.bss() + wss_sum - fit.tss()).abs() < 1e-9);
    }

    #[test]
    fn non_finite_metric_degrades_to_one_cluster() {
        let broken = |_: &[f32], _: &[f32]| f32::INFINITY;
        let fit = Kmeans::new(2)
            .with_metric(broken)
            .fit(&two_pairs(), &seeds())
            .unwrap();

        assert_eq!(fit.labels(), &[0, 0, 0, 0]);
        assert_eq!(fit.centroids().len(), 1);
        assert!(fit.converged());
        assert_eq!(fit.iterations(), 1);
        assert!(fit.tss().is_finite());
    }

    #[test]
    fn empty_cluster_retains_previous_centroid() {
        // Both rows sit next to the first seed; the second never attracts
        // a member.
        let data = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        let init = vec![vec![0.5, 0.0], vec![100.0, 0.0]];

        let fit = Kmeans::new(2).fit(&data, &init).unwrap();

        assert_eq!(fit.labels(), &[0, 0]);
        assert_eq!(fit.centroids()[0], vec![0.5, 0.0]);
        assert_eq!(fit.centroids()[1], vec![100.0, 0.0]);
        assert_eq!(fit.wss()[1], 0.0);
        assert!(fit.converged());
    }

    #[test]
    fn empty_cluster_reseeds_from_data() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        let init = vec![vec![0.5, 0.0], vec![100.0, 0.0]];

        let fit = Kmeans::new(2)
            .with_seed(42)
            .with_empty_cluster_policy(EmptyClusterPolicy::Reseed)
            .fit(&data, &init)
            .unwrap();

        for centroid in fit.centroids() {
            for &x in centroid {
                assert!(x.is_finite());
            }
            // Reseeded centroids come from the data, so nothing is left
            // near the unreachable seed.
            assert!(centroid[0] <= 1.0);
        }
        for &label in fit.labels() {
            assert!(label < 2);
        }
    }

    #[test]
    fn relabeling_is_first_appearance_order() {
        // Rows near the *second* seed come first, so raw labels would be
        // [1, 1, 0, 0]; canonical numbering flips them.
        let data = vec![
            vec![10.0, 0.0],
            vec![10.0, 1.0],
            vec![0.0, 0.0],
            vec![0.0, 1.0],
        ];
        let fit = Kmeans::new(2).fit(&data, &seeds()).unwrap();

        assert_eq!(fit.labels(), &[0, 0, 1, 1]);
        assert_eq!(fit.centroids()[0], vec![10.0, 0.5]);
        assert_eq!(fit.centroids()[1], vec![0.0, 0.5]);
    }

    #[test]
    fn repeated_fits_are_identical() {
        let config = Kmeans::new(2).with_seed(7);
        let a = config.fit(&two_pairs(), &seeds()).unwrap();
        let b = config.fit(&two_pairs(), &seeds()).unwrap();

        assert_eq!(a.labels(), b.labels());
        assert_eq!(a.centroids(), b.centroids());
        assert_eq!(a.iterations(), b.iterations());
        assert_eq!(a.tss(), b.tss());
    }

    #[test]
    fn model_fit_is_idempotent() {
        let model = KmeansModel::new(Kmeans::new(2), seeds());
        let data = two_pairs();

        assert!(model.fitted().is_none());
        let first = model.fit(&data).unwrap();
        let second = model.fit(&data).unwrap();

        assert_eq!(first.labels(), second.labels());
        assert_eq!(first.centroids(), second.centroids());
        assert_eq!(first.iterations(), second.iterations());
        assert_eq!(first.summary().len(), second.summary().len());
        assert!(model.fitted().is_some());
    }

    #[test]
    fn fit_predict_separates_obvious_clusters() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];
        let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();

        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn validation_errors() {
        let data = two_pairs();

        assert!(matches!(
            Kmeans::new(2).fit(&[], &seeds()),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            Kmeans::new(0).fit(&data, &[]),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
        assert!(matches!(
            Kmeans::new(2).with_max_iter(0).fit(&data, &seeds()),
            Err(Error::InvalidParameter { name: "max_iter", .. })
        ));
        assert!(matches!(
            Kmeans::new(5).fit(&data, &seeds()),
            Err(Error::InvalidClusterCount { requested: 5, .. })
        ));
        assert!(matches!(
            Kmeans::new(2).fit(&data, &[vec![0.0, 0.0]]),
            Err(Error::InvalidParameter { name: "init", .. })
        ));
        assert!(matches!(
            Kmeans::new(2).fit(&data, &[vec![0.0, 0.0], vec![1.0]]),
            Err(Error::DimensionMismatch { .. })
        ));

        let ragged = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            Kmeans::new(1).fit(&ragged, &[vec![0.0, 0.0]]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn tss_is_monotone_across_iterations() {
        // A blob plus two satellites; several iterations to settle.
        let data = vec![
            vec![0.0, 0.0],
            vec![0.5, 0.5],
            vec![1.0, 0.0],
            vec![5.0, 5.0],
            vec![5.5, 5.5],
            vec![9.0, 0.0],
            vec![9.5, 0.5],
        ];
        let init = vec![vec![0.0, 0.0], vec![0.5, 0.5], vec![1.0, 0.0]];
        let fit = Kmeans::new(3).fit(&data, &init).unwrap();

        let rows = fit.summary().rows();
        let mut prev = f64::INFINITY;
        for row in rows {
            assert!(row.tss <= prev + 1e-6);
            prev = row.tss;
        }
    }
}
