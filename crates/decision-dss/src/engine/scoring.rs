//! The seven scoring methods and the dense payoff matrix they share.
//!
//! Every method takes the validated alternative × criterion matrix and
//! returns one raw score per alternative, preserving request order, with
//! the shared convention that a higher score means more preferred.

use indexmap::IndexMap;

use super::domain::{CriterionKind, DecisionMode, DecisionRequest};
use super::{math, weights};

/// Effective optimism coefficient when a Hurwicz request omits `alpha`.
pub const DEFAULT_HURWICZ_ALPHA: f64 = 0.5;

/// Raised when scoring is reached with data the validator should have
/// rejected. Clients only ever see this as an internal error.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("missing payoff for alternative '{alternative}' and criterion '{criterion}'")]
    MissingPayoff {
        alternative: String,
        criterion: String,
    },
    #[error("unrecognized type '{kind}' for criterion '{criterion}'")]
    UnknownKind { criterion: String, kind: String },
}

/// Compute raw scores for every alternative under the selected mode.
pub(crate) fn score(
    mode: DecisionMode,
    request: &DecisionRequest,
) -> Result<Vec<(String, f64)>, ScoringError> {
    let matrix = Matrix::from_request(request)?;

    let scores = match mode {
        DecisionMode::Ranking => saw(&matrix, &weights::normalize(&request.criteria)),
        DecisionMode::ExpectedValue => {
            expected_value(&matrix, &weights::normalize(&request.criteria))
        }
        DecisionMode::Maximin => per_alternative(&matrix, math::min),
        DecisionMode::Maximax => per_alternative(&matrix, math::max),
        DecisionMode::Laplace => per_alternative(&matrix, math::average),
        DecisionMode::Hurwicz => hurwicz(&matrix, request.alpha.unwrap_or(DEFAULT_HURWICZ_ALPHA)),
        DecisionMode::MinimaxRegret => minimax_regret(&matrix),
    };

    Ok(scores)
}

/// Typed criterion column retained after validation.
struct Column {
    name: String,
    kind: CriterionKind,
}

/// Dense alternative × criterion payoff matrix in declaration order.
struct Matrix {
    alternatives: Vec<String>,
    columns: Vec<Column>,
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Build from a validated request. A hole in the payoff map at this
    /// point is an internal contract violation, not a client error.
    fn from_request(request: &DecisionRequest) -> Result<Self, ScoringError> {
        let mut columns = Vec::with_capacity(request.criteria.len());
        for criterion in &request.criteria {
            let name = criterion.name.trim().to_string();
            let kind = CriterionKind::parse(&criterion.kind).ok_or_else(|| {
                ScoringError::UnknownKind {
                    criterion: name.clone(),
                    kind: criterion.kind.clone(),
                }
            })?;
            columns.push(Column { name, kind });
        }

        let mut alternatives = Vec::with_capacity(request.alternatives.len());
        let mut rows = Vec::with_capacity(request.alternatives.len());
        for alternative in &request.alternatives {
            let mut row = Vec::with_capacity(columns.len());
            for column in &columns {
                let payoff = alternative
                    .values
                    .get(&column.name)
                    .copied()
                    .flatten()
                    .ok_or_else(|| ScoringError::MissingPayoff {
                        alternative: alternative.name.clone(),
                        criterion: column.name.clone(),
                    })?;
                row.push(payoff);
            }
            alternatives.push(alternative.name.clone());
            rows.push(row);
        }

        Ok(Self {
            alternatives,
            columns,
            rows,
        })
    }

    fn oriented_row(&self, row: usize) -> Vec<f64> {
        self.columns
            .iter()
            .zip(&self.rows[row])
            .map(|(column, &value)| column.kind.oriented(value))
            .collect()
    }

    fn raw_column(&self, col: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[col]).collect()
    }
}

/// Score every alternative from its oriented payoff row.
fn per_alternative(matrix: &Matrix, score: impl Fn(&[f64]) -> f64) -> Vec<(String, f64)> {
    matrix
        .alternatives
        .iter()
        .enumerate()
        .map(|(row, name)| (name.clone(), score(&matrix.oriented_row(row))))
        .collect()
}

/// Simple additive weighting over min-max normalized payoffs.
fn saw(matrix: &Matrix, weights: &IndexMap<String, f64>) -> Vec<(String, f64)> {
    let spans: Vec<(f64, f64)> = (0..matrix.columns.len())
        .map(|col| {
            let column = matrix.raw_column(col);
            (math::min(&column), math::max(&column))
        })
        .collect();

    matrix
        .alternatives
        .iter()
        .enumerate()
        .map(|(row, name)| {
            let mut score = 0.0;
            for (col, column) in matrix.columns.iter().enumerate() {
                let value = matrix.rows[row][col];
                let (min, max) = spans[col];

                let normalized = if max == min {
                    // Every alternative ties on this criterion.
                    1.0
                } else if column.kind == CriterionKind::Cost {
                    (max - value) / (max - min)
                } else {
                    (value - min) / (max - min)
                };

                score += weights.get(&column.name).copied().unwrap_or(0.0) * normalized;
            }
            (name.clone(), score)
        })
        .collect()
}

/// Weighted sum of oriented raw payoffs, no range normalization.
fn expected_value(matrix: &Matrix, weights: &IndexMap<String, f64>) -> Vec<(String, f64)> {
    matrix
        .alternatives
        .iter()
        .enumerate()
        .map(|(row, name)| {
            let score = matrix
                .columns
                .iter()
                .enumerate()
                .map(|(col, column)| {
                    weights.get(&column.name).copied().unwrap_or(0.0)
                        * column.kind.oriented(matrix.rows[row][col])
                })
                .sum();
            (name.clone(), score)
        })
        .collect()
}

fn hurwicz(matrix: &Matrix, alpha: f64) -> Vec<(String, f64)> {
    per_alternative(matrix, |oriented| {
        alpha * math::max(oriented) + (1.0 - alpha) * math::min(oriented)
    })
}

/// Negated worst regret against the per-criterion oriented ideal, keeping
/// "higher score wins": zero regret ranks first, larger regrets sink.
fn minimax_regret(matrix: &Matrix) -> Vec<(String, f64)> {
    let ideals: Vec<f64> = (0..matrix.columns.len())
        .map(|col| {
            let kind = matrix.columns[col].kind;
            matrix
                .rows
                .iter()
                .map(|row| kind.oriented(row[col]))
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect();

    matrix
        .alternatives
        .iter()
        .enumerate()
        .map(|(row, name)| {
            let worst_regret = matrix
                .columns
                .iter()
                .enumerate()
                .map(|(col, column)| ideals[col] - column.kind.oriented(matrix.rows[row][col]))
                .fold(f64::NEG_INFINITY, f64::max);
            (name.clone(), -worst_regret)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::domain::{Alternative, Criterion};

    fn criterion(name: &str, weight: Option<f64>, kind: &str) -> Criterion {
        Criterion {
            name: name.to_string(),
            weight,
            kind: kind.to_string(),
        }
    }

    fn alternative(name: &str, values: &[(&str, f64)]) -> Alternative {
        Alternative {
            name: name.to_string(),
            values: values
                .iter()
                .map(|(key, value)| (key.to_string(), Some(*value)))
                .collect(),
        }
    }

    fn request(mode: &str, alpha: Option<f64>) -> DecisionRequest {
        DecisionRequest {
            mode: Some(mode.to_string()),
            alpha,
            alternatives: vec![
                alternative("A", &[("costo1", 10.0), ("beneficio1", 5.0)]),
                alternative("B", &[("costo1", 20.0), ("beneficio1", 15.0)]),
            ],
            criteria: vec![
                criterion("costo1", Some(0.5), "costo"),
                criterion("beneficio1", Some(0.5), "beneficio"),
            ],
        }
    }

    fn scores_for(mode: DecisionMode, request: &DecisionRequest) -> Vec<(String, f64)> {
        score(mode, request).expect("request scores")
    }

    #[test]
    fn saw_normalizes_against_column_extremes() {
        // A wins the cost column outright, B the benefit column: both land
        // on 0.5 with equal weights.
        let scores = scores_for(DecisionMode::Ranking, &request("ranking", None));
        assert_eq!(scores[0], ("A".to_string(), 0.5));
        assert_eq!(scores[1], ("B".to_string(), 0.5));
    }

    #[test]
    fn saw_treats_flat_columns_as_full_contribution() {
        let mut request = request("ranking", None);
        for alternative in &mut request.alternatives {
            alternative
                .values
                .insert("costo1".to_string(), Some(12.0));
        }

        let scores = scores_for(DecisionMode::Ranking, &request);
        // Flat cost column contributes its entire weight to both rows.
        assert_eq!(scores[0].1, 0.5 + 0.0);
        assert_eq!(scores[1].1, 0.5 + 0.5);
    }

    #[test]
    fn expected_value_weights_oriented_payoffs() {
        let scores = scores_for(DecisionMode::ExpectedValue, &request("valor_esperado", None));
        assert_eq!(scores[0].1, 0.5 * -10.0 + 0.5 * 5.0);
        assert_eq!(scores[1].1, 0.5 * -20.0 + 0.5 * 15.0);
    }

    #[test]
    fn maximin_takes_the_worst_oriented_outcome() {
        let scores = scores_for(DecisionMode::Maximin, &request("maximin", None));
        assert_eq!(scores[0].1, -10.0);
        assert_eq!(scores[1].1, -20.0);
    }

    #[test]
    fn maximax_takes_the_best_oriented_outcome() {
        let scores = scores_for(DecisionMode::Maximax, &request("maximax", None));
        assert_eq!(scores[0].1, 5.0);
        assert_eq!(scores[1].1, 15.0);
    }

    #[test]
    fn laplace_averages_oriented_outcomes() {
        let scores = scores_for(DecisionMode::Laplace, &request("laplace", None));
        assert_eq!(scores[0].1, (-10.0 + 5.0) / 2.0);
        assert_eq!(scores[1].1, (-20.0 + 15.0) / 2.0);
    }

    #[test]
    fn hurwicz_blends_extremes_and_defaults_alpha() {
        let scores = scores_for(DecisionMode::Hurwicz, &request("hurwicz", None));
        assert_eq!(scores[0].1, 0.5 * 5.0 + 0.5 * -10.0);

        let optimist = scores_for(DecisionMode::Hurwicz, &request("hurwicz", Some(1.0)));
        let maximax = scores_for(DecisionMode::Maximax, &request("maximax", None));
        assert_eq!(optimist, maximax);

        let pessimist = scores_for(DecisionMode::Hurwicz, &request("hurwicz", Some(0.0)));
        let maximin = scores_for(DecisionMode::Maximin, &request("maximin", None));
        assert_eq!(pessimist, maximin);
    }

    #[test]
    fn minimax_regret_scores_are_nonpositive() {
        let scores = scores_for(DecisionMode::MinimaxRegret, &request("minimax_regret", None));
        for (_, score) in &scores {
            assert!(*score <= 0.0);
        }
        // Neither alternative dominates, so neither reaches zero.
        assert!(scores.iter().all(|(_, score)| *score < 0.0));
    }

    #[test]
    fn minimax_regret_is_zero_only_for_a_dominant_alternative() {
        let request = DecisionRequest {
            mode: Some("minimax_regret".to_string()),
            alpha: None,
            alternatives: vec![
                alternative("dominante", &[("costo1", 5.0), ("beneficio1", 20.0)]),
                alternative("dominada", &[("costo1", 9.0), ("beneficio1", 12.0)]),
            ],
            criteria: vec![
                criterion("costo1", None, "costo"),
                criterion("beneficio1", None, "beneficio"),
            ],
        };

        let scores = scores_for(DecisionMode::MinimaxRegret, &request);
        assert_eq!(scores[0].1, 0.0);
        assert!(scores[1].1 < 0.0);
    }

    #[test]
    fn missing_payoff_is_an_internal_error() {
        let mut request = request("maximin", None);
        request.alternatives[0]
            .values
            .shift_remove("costo1");

        let error = score(DecisionMode::Maximin, &request).expect_err("hole detected");
        assert!(matches!(error, ScoringError::MissingPayoff { .. }));
    }
}
