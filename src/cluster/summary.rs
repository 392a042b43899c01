//! Per-iteration fit diagnostics.
//!
//! The fit loop appends one [`FitSnapshot`] per Lloyd iteration plus a final
//! row once the statistics are in. The log is purely diagnostic; nothing in
//! the loop reads it back.

use std::fmt;
use std::time::Duration;

/// One row of the fit summary table.
///
/// `wss_sum` and `bss` are only known once fitting has finished, so every row
/// but the last carries `NaN` in those columns. The first in-loop row records
/// the pre-iteration state: `max_tss = -inf`, `tss = +inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSnapshot {
    /// Iteration counter at the time the row was recorded.
    pub iteration: usize,
    /// Whether the fit had converged when the row was recorded.
    pub converged: bool,
    /// Cost of the first iteration (the historical maximum).
    pub max_tss: f64,
    /// Current total within-cluster cost against the old centroids.
    pub tss: f64,
    /// Sum of final per-cluster within-cluster squared distances.
    pub wss_sum: f64,
    /// Between-cluster sum of squares, `tss - wss_sum`.
    pub bss: f64,
    /// Wall time elapsed since the fit started.
    pub wall: Duration,
}

/// Append-only log of per-iteration snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitSummary {
    rows: Vec<FitSnapshot>,
}

impl FitSummary {
    /// Fixed column headers of the summary table.
    pub const HEADERS: [&'static str; 7] = [
        "Iter. #",
        "Converged",
        "Max TSS",
        "Min TSS",
        "End WSS",
        "End BSS",
        "Wall",
    ];

    pub(crate) fn push(&mut self, row: FitSnapshot) {
        self.rows.push(row);
    }

    /// All recorded rows, in append order.
    pub fn rows(&self) -> &[FitSnapshot] {
        &self.rows
    }

    /// Number of recorded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether any rows have been recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for FitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = Self::HEADERS;
        writeln!(
            f,
            "{:>8} {:>10} {:>14} {:>14} {:>14} {:>14} {:>12}",
            h[0], h[1], h[2], h[3], h[4], h[5], h[6]
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>8} {:>10} {:>14.6} {:>14.6} {:>14.6} {:>14.6} {:>12}",
                row.iteration,
                row.converged,
                row.max_tss,
                row.tss,
                row.wss_sum,
                row.bss,
                format!("{:?}", row.wall),
            )?;
        }
        Ok(())
    }
}
