use std::cmp::Ordering;

use tracing::debug;

use super::domain::{DecisionMode, DecisionRequest, DecisionResponse, RankingItem};
use super::scoring::{self, ScoringError, DEFAULT_HURWICZ_ALPHA};
use super::validation::{self, ValidationError};
use super::math;

/// Decimal places kept on every published score.
const SCORE_DECIMALS: usize = 6;

/// Failure surfaced by [`DecisionEngine::evaluate`].
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Client-caused: the request failed structural or cross validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Defensive: a mode survived validation that the dispatcher cannot
    /// place. Validation is the authority, so this is an internal fault.
    #[error("mode '{0}' passed validation but has no scoring strategy")]
    UnsupportedMode(String),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Stateless evaluator dispatching a validated request to the scoring
/// strategy selected by its mode.
///
/// Every evaluation is request-local: no state survives between calls, so
/// one engine instance can serve concurrent requests without locking.
#[derive(Debug, Default)]
pub struct DecisionEngine;

impl DecisionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, request: &DecisionRequest) -> Result<DecisionResponse, EngineError> {
        validation::validate(request)?;

        let mode = DecisionMode::parse(request.mode.as_deref()).ok_or_else(|| {
            EngineError::UnsupportedMode(DecisionMode::normalize(request.mode.as_deref()))
        })?;

        let scores = scoring::score(mode, request)?;
        let ranking = assemble_ranking(scores);

        debug!(
            mode = %DecisionMode::normalize(request.mode.as_deref()),
            alternatives = ranking.len(),
            "decision request evaluated"
        );

        Ok(DecisionResponse {
            message: summary_message(mode, request.alpha),
            ranking,
        })
    }
}

/// Round scores and sort descending; NaN sorts last, ties keep request
/// order (the sort is stable).
fn assemble_ranking(scores: Vec<(String, f64)>) -> Vec<RankingItem> {
    let mut ranking: Vec<RankingItem> = scores
        .into_iter()
        .map(|(alternative, score)| RankingItem {
            alternative,
            score: math::round_half_up(score, SCORE_DECIMALS),
        })
        .collect();

    ranking.sort_by(|a, b| match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.total_cmp(&a.score),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    });

    ranking
}

/// Deterministic summary sentence per mode, kept verbatim from the legacy
/// service so existing clients see the same wording.
fn summary_message(mode: DecisionMode, alpha: Option<f64>) -> String {
    match mode {
        DecisionMode::Ranking => {
            "Evaluación DSS realizada correctamente con método de ranking ponderado (SAW)."
                .to_string()
        }
        DecisionMode::ExpectedValue => {
            "Evaluación DSS realizada correctamente con criterio de valor esperado.".to_string()
        }
        DecisionMode::Maximin => {
            "Evaluación DSS realizada correctamente con criterio Maximin.".to_string()
        }
        DecisionMode::Maximax => {
            "Evaluación DSS realizada correctamente con criterio Maximax.".to_string()
        }
        DecisionMode::Laplace => {
            "Evaluación DSS realizada correctamente con criterio de Laplace.".to_string()
        }
        DecisionMode::Hurwicz => format!(
            "Evaluación DSS realizada correctamente con criterio de Hurwicz (alpha={}).",
            alpha.unwrap_or(DEFAULT_HURWICZ_ALPHA)
        ),
        DecisionMode::MinimaxRegret => {
            "Evaluación DSS realizada correctamente con criterio Minimax Regret.".to_string()
        }
    }
}
