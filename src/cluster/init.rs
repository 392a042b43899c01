//! Centroid seeding strategies.
//!
//! The fit loop itself takes a ready-made seed centroid set; these helpers
//! produce one. [`kmeans_pp`] is the k-means++ scheme of Arthur and
//! Vassilvitskii (2007): spread the seeds out by sampling each next centroid
//! with probability proportional to its squared distance from the nearest
//! centroid chosen so far. [`random`] draws k distinct data rows uniformly.

use rand::prelude::*;

use super::util::squared_euclidean;
use crate::error::{Error, Result};

fn check_shape(data: &[Vec<f32>], k: usize) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if k > data.len() {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: data.len(),
        });
    }
    Ok(())
}

/// Draw `k` distinct rows of `data` uniformly at random.
pub fn random(data: &[Vec<f32>], k: usize, rng: &mut impl Rng) -> Result<Vec<Vec<f32>>> {
    check_shape(data, k)?;
    let picks = rand::seq::index::sample(rng, data.len(), k);
    Ok(picks.into_iter().map(|i| data[i].clone()).collect())
}

/// Seed `k` centroids with k-means++.
pub fn kmeans_pp(data: &[Vec<f32>], k: usize, rng: &mut impl Rng) -> Result<Vec<Vec<f32>>> {
    check_shape(data, k)?;
    let n = data.len();
    let mut centroids: Vec<Vec<f32>> = Vec::with_capacity(k);

    // First centroid: uniform random row.
    let first = rng.random_range(0..n);
    centroids.push(data[first].clone());

    // Remaining centroids: sample proportional to D(x)^2.
    while centroids.len() < k {
        let weights: Vec<f32> = data
            .iter()
            .map(|row| {
                centroids
                    .iter()
                    .map(|c| squared_euclidean(row, c))
                    .fold(f32::MAX, f32::min)
            })
            .collect();

        let total: f32 = weights.iter().sum();
        if total == 0.0 {
            // All rows coincide with chosen centroids; fall back to uniform.
            let idx = rng.random_range(0..n);
            centroids.push(data[idx].clone());
            continue;
        }

        let threshold = rng.random::<f32>() * total;
        let mut cumsum = 0.0;
        let mut selected = n - 1;
        for (i, &w) in weights.iter().enumerate() {
            cumsum += w;
            if cumsum >= threshold {
                selected = i;
                break;
            }
        }
        centroids.push(data[selected].clone());
    }

    Ok(centroids)
}
