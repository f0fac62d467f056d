#![forbid(unsafe_code)]

//! Deterministic scoring over finalized collector state.
//!
//! Pure functions: a rank correlation for the sorting task and a pairwise
//! distance matrix for the placement task. Both operate on plain slices so
//! they are trivially testable in isolation.

use crate::geometry::NormPoint;

/// Kendall tau-a rank correlation, in [-1, 1].
///
/// `ranks` are the canonical ranks read in submission order. Counts
/// concordant pairs C (i < j, rᵢ < rⱼ) and discordant pairs D (i < j,
/// rᵢ > rⱼ); tau = (C − D) / (n·(n−1)/2). No tie correction. Defined as 0
/// by convention when n ≤ 1, where no pairs exist.
#[must_use]
pub fn kendall_tau(ranks: &[usize]) -> f64 {
    let n = ranks.len();
    if n <= 1 {
        return 0.0;
    }
    let mut concordant: i64 = 0;
    let mut discordant: i64 = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if ranks[i] < ranks[j] {
                concordant += 1;
            } else if ranks[i] > ranks[j] {
                discordant += 1;
            }
        }
    }
    let pairs = (n * (n - 1) / 2) as f64;
    (concordant - discordant) as f64 / pairs
}

/// Pairwise Euclidean distance matrix over normalized placements.
///
/// Distances are computed in [0,1]² space, never pixel space, so results
/// are comparable across participants with differing screen sizes. The
/// matrix is symmetric with a zero diagonal.
#[must_use]
pub fn distance_matrix(points: &[NormPoint]) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = points[i].distance(points[j]);
            matrix[i][j] = d;
            matrix[j][i] = d;
        }
    }
    matrix
}
