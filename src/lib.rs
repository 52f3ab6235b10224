pub mod criteria;
mod error;
pub mod num;
pub mod rank;
pub mod table;

pub use crate::criteria::{parse_impacts, parse_weights, Impact};
pub use crate::error::Error;
pub use crate::num::{Normalized, Weight};
pub use crate::rank::RankMethod;
pub use crate::table::{Alternative, Table};

/// Every intermediate stage of a TOPSIS evaluation. Matrices are indexed `[row][criterion]`, and
/// per-row vectors are aligned with the rows of the evaluated table.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub norms: Vec<f64>,
    pub normalized: Vec<Vec<f64>>,
    pub weighted: Vec<Vec<f64>>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    pub distance_best: Vec<f64>,
    pub distance_worst: Vec<f64>,
    pub scores: Vec<Normalized>,
}

/// The input table with a score and a rank attached to every alternative, in input row order.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedTable {
    pub table: Table,
    pub scores: Vec<Normalized>,
    pub ranks: Vec<usize>,
}

impl RankedTable {
    /// Iterate over `(alternative, score, rank)` in input row order.
    pub fn iter(&self) -> impl Iterator<Item = (&Alternative, Normalized, usize)> + '_ {
        self.table
            .rows()
            .iter()
            .zip(&self.scores)
            .zip(&self.ranks)
            .map(|((row, score), rank)| (row, *score, *rank))
    }
}

/// Score every alternative of `table` with TOPSIS and rank them by descending score, ties being
/// resolved by `method`.
///
/// Either the whole table is ranked or the first violated input condition is returned. `table`
/// is left untouched in both cases.
pub fn score(
    table: &Table,
    weights: &[Weight],
    impacts: &[Impact],
    method: RankMethod,
) -> Result<RankedTable, Error> {
    let Evaluation { scores, .. } = evaluate(table, weights, impacts)?;
    let ranks = rank::rank(&scores, method);
    tracing::debug!(alternatives = table.len(), ?method, "ranked alternatives");
    Ok(RankedTable {
        table: table.clone(),
        scores,
        ranks,
    })
}

/// Run the TOPSIS stages over `table`:
/// 1. Divide each criterion column by its Euclidean norm.
/// 2. Multiply each normalized column by its weight.
/// 3. Take the ideal best and worst value of each column, according to its impact.
/// 4. Measure each row's Euclidean distance to the ideal best and worst points.
/// 5. Score each row as `distance_worst / (distance_best + distance_worst)`.
///
/// Any finite table and weights are accepted. Columns are normalized after dividing them by their
/// largest magnitude, and scores are computed from distances measured with the weights divided by
/// the largest weight. The reported norms and distances are scaled back, so they may be infinite
/// when the raw values or the weights are close to `f64::MAX`.
pub fn evaluate(
    table: &Table,
    weights: &[Weight],
    impacts: &[Impact],
) -> Result<Evaluation, Error> {
    let criteria = table.criteria();
    if table.column_count() < 3 {
        return Err(Error::InsufficientColumns {
            found: table.column_count(),
        });
    }
    if table.is_empty() {
        return Err(Error::NoAlternatives);
    }
    if weights.len() != criteria.len() {
        return Err(Error::ShapeMismatch {
            what: "weights",
            expected: criteria.len(),
            found: weights.len(),
        });
    }
    if impacts.len() != criteria.len() {
        return Err(Error::ShapeMismatch {
            what: "impacts",
            expected: criteria.len(),
            found: impacts.len(),
        });
    }

    // Each column is divided by its largest magnitude before its norm is taken, so the scaled
    // norm lies in [1, sqrt(rows)] even when the true norm is not representable.
    let magnitudes = (0..criteria.len())
        .map(|i| {
            let magnitude = table.column(i).map(f64::abs).fold(0.0, f64::max);
            if magnitude == 0.0 {
                return Err(Error::DegenerateColumn {
                    column: criteria[i].clone(),
                });
            }
            Ok(magnitude)
        })
        .collect::<Result<Vec<f64>, Error>>()?;
    let scaled_norms: Vec<f64> = magnitudes
        .iter()
        .enumerate()
        .map(|(i, m)| table.column(i).map(|x| x / m).fold(0.0, f64::hypot))
        .collect();
    let norms: Vec<f64> = magnitudes
        .iter()
        .zip(&scaled_norms)
        .map(|(m, n)| m * n)
        .collect();

    let normalized: Vec<Vec<f64>> = table
        .rows()
        .iter()
        .map(|row| {
            row.values
                .iter()
                .zip(magnitudes.iter().zip(&scaled_norms))
                .map(|(x, (m, n))| x / m / n)
                .collect()
        })
        .collect();
    let weighted: Vec<Vec<f64>> = normalized
        .iter()
        .map(|row| {
            row.iter()
                .zip(weights)
                .map(|(x, w)| x * w.as_f64())
                .collect()
        })
        .collect();

    let (ideal_best, ideal_worst): (Vec<f64>, Vec<f64>) = impacts
        .iter()
        .enumerate()
        .filter_map(|(i, impact)| impact.ideal_points(weighted.iter().map(|row| row[i])))
        .unzip();
    tracing::trace!(?norms, ?ideal_best, ?ideal_worst, "ideal points");

    // Every weighted value divided by the largest weight lies in [-1, 1].
    let scale = weights
        .iter()
        .map(Weight::as_f64)
        .fold(0.0, f64::max);
    let scale = if scale == 0.0 { 1.0 } else { scale };
    let (scaled_best, scaled_worst): (Vec<f64>, Vec<f64>) = weighted
        .iter()
        .map(|row| {
            (
                scaled_distance(row, &ideal_best, scale),
                scaled_distance(row, &ideal_worst, scale),
            )
        })
        .unzip();

    let scores = table
        .rows()
        .iter()
        .zip(scaled_best.iter().zip(&scaled_worst))
        .map(|(row, (&best, &worst))| {
            if best == 0.0 && worst == 0.0 {
                return Err(Error::DegenerateRow {
                    row: row.label.clone(),
                });
            }
            // Both distances are finite and non-negative, and at least one is positive.
            Ok(Normalized::clamp(worst / (best + worst)).unwrap())
        })
        .collect::<Result<Vec<Normalized>, Error>>()?;

    let distance_best = scaled_best.iter().map(|d| d * scale).collect();
    let distance_worst = scaled_worst.iter().map(|d| d * scale).collect();

    Ok(Evaluation {
        norms,
        normalized,
        weighted,
        ideal_best,
        ideal_worst,
        distance_best,
        distance_worst,
        scores,
    })
}

/// Euclidean distance between `row` and `ideal` after dividing both by `scale`.
fn scaled_distance(row: &[f64], ideal: &[f64], scale: f64) -> f64 {
    row.iter()
        .zip(ideal)
        .map(|(x, y)| x / scale - y / scale)
        .fold(0.0, f64::hypot)
}
