#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Squared Euclidean distance accumulated in `f64`.
///
/// Cost bookkeeping (TSS/WSS/BSS) sums many of these across a dataset, so the
/// accumulation is widened even though the data itself is `f32`.
#[inline]
pub(crate) fn squared_euclidean_f64(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum()
}

/// Coordinate-wise mean over all rows.
///
/// Callers must ensure `data` is non-empty and rectangular.
pub(crate) fn mean_row(data: &[Vec<f32>]) -> Vec<f32> {
    debug_assert!(!data.is_empty());
    let n = data[0].len();
    let mut mean = vec![0.0f64; n];
    for row in data {
        debug_assert_eq!(row.len(), n);
        for (m, &x) in mean.iter_mut().zip(row) {
            *m += f64::from(x);
        }
    }
    let count = data.len() as f64;
    mean.into_iter().map(|m| (m / count) as f32).collect()
}
