//! Nearest-centroid assignment.
//!
//! Maps a data matrix and a centroid set to per-row labels and distances.
//! This is the labeling half of a Lloyd iteration; it is pure (no logging,
//! no mutation) and reports the ill-defined case as data, not as a panic or
//! an error: when the metric floods the distance matrix with non-finite
//! values the caller receives [`Assignment::NonFinite`] and decides what to
//! do about it.

use super::metric::Metric;

/// Outcome of one assignment pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// Every row found a nearest centroid at a finite distance.
    Assigned {
        /// Index of the nearest centroid, one per row.
        labels: Vec<usize>,
        /// Distance to that centroid under the assignment metric, one per row.
        distances: Vec<f32>,
    },
    /// The distance matrix is entirely non-finite for at least one centroid,
    /// or some row has no finite distance to any centroid. Assignment is
    /// ill-defined; recoverable at the caller's discretion.
    NonFinite,
}

/// Nearest-centroid labeler over a fixed centroid set.
///
/// Centroid indices double as cluster labels, so a separate label set is not
/// carried. Ties break to the lowest centroid index, which keeps assignment
/// fully deterministic without any RNG.
#[derive(Debug)]
pub struct NearestAssigner<'a, M: Metric> {
    centroids: &'a [Vec<f32>],
    metric: &'a M,
}

impl<'a, M: Metric> NearestAssigner<'a, M> {
    /// Create an assigner over `centroids` using `metric`.
    pub fn new(centroids: &'a [Vec<f32>], metric: &'a M) -> Self {
        Self { centroids, metric }
    }

    /// Label every row of `data` with its nearest centroid.
    pub fn assign(&self, data: &[Vec<f32>]) -> Assignment {
        let k = self.centroids.len();
        let mut labels = Vec::with_capacity(data.len());
        let mut distances = Vec::with_capacity(data.len());
        // A centroid whose distance column is entirely non-finite can never
        // receive a member; that makes the partition ill-defined.
        let mut centroid_finite = vec![false; k];
        let mut all_rows_assigned = true;

        for row in data {
            let mut best: Option<(usize, f32)> = None;
            for (i, centroid) in self.centroids.iter().enumerate() {
                let d = self.metric.distance(row, centroid);
                if !d.is_finite() {
                    continue;
                }
                centroid_finite[i] = true;
                match best {
                    Some((_, best_d)) if d >= best_d => {}
                    _ => best = Some((i, d)),
                }
            }
            match best {
                Some((label, dist)) => {
                    labels.push(label);
                    distances.push(dist);
                }
                None => {
                    all_rows_assigned = false;
                    break;
                }
            }
        }

        if !all_rows_assigned || centroid_finite.iter().any(|&finite| !finite) {
            return Assignment::NonFinite;
        }
        Assignment::Assigned { labels, distances }
    }
}
