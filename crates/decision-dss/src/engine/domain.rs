use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Evaluation strategy selected by the request's `modo` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionMode {
    /// Weighted normalized ranking (SAW).
    Ranking,
    /// Weighted sum of oriented raw payoffs.
    ExpectedValue,
    /// Worst oriented outcome per alternative.
    Maximin,
    /// Best oriented outcome per alternative.
    Maximax,
    /// Mean oriented outcome, criteria treated as equally likely.
    Laplace,
    /// Optimism-weighted blend of best and worst oriented outcomes.
    Hurwicz,
    /// Negated worst regret against the per-criterion ideal.
    MinimaxRegret,
}

impl DecisionMode {
    /// Mode literals accepted on the wire, in the order they are echoed
    /// back on an unsupported-mode violation.
    pub const ACCEPTED: [&'static str; 9] = [
        "ranking",
        "saw",
        "valor_esperado",
        "expected_value",
        "maximin",
        "maximax",
        "laplace",
        "hurwicz",
        "minimax_regret",
    ];

    /// Trimmed, lowercased mode literal. A blank or missing mode selects
    /// the ranking method.
    pub fn normalize(raw: Option<&str>) -> String {
        match raw {
            Some(value) if !value.trim().is_empty() => value.trim().to_lowercase(),
            _ => "ranking".to_string(),
        }
    }

    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match Self::normalize(raw).as_str() {
            "ranking" | "saw" => Some(Self::Ranking),
            "valor_esperado" | "expected_value" => Some(Self::ExpectedValue),
            "maximin" => Some(Self::Maximin),
            "maximax" => Some(Self::Maximax),
            "laplace" => Some(Self::Laplace),
            "hurwicz" => Some(Self::Hurwicz),
            "minimax_regret" => Some(Self::MinimaxRegret),
            _ => None,
        }
    }

    /// Weight-based modes require a weight on every criterion.
    pub const fn requires_weights(self) -> bool {
        matches!(self, Self::Ranking | Self::ExpectedValue)
    }
}

/// Orientation of a criterion: whether larger raw payoffs are desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Benefit,
    Cost,
}

impl CriterionKind {
    /// Parse the wire literal (`beneficio` | `costo`), case-insensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "beneficio" => Some(Self::Benefit),
            "costo" => Some(Self::Cost),
            _ => None,
        }
    }

    /// Orient a payoff so that a larger value always means more preferred.
    pub fn oriented(self, value: f64) -> f64 {
        match self {
            Self::Benefit => value,
            Self::Cost => -value,
        }
    }
}

/// One evaluation criterion as sent by the client.
///
/// `kind` stays a raw string so that an unrecognized orientation literal
/// surfaces as a field violation from the validator rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(default, rename = "criterio")]
    pub name: String,
    #[serde(default, rename = "peso")]
    pub weight: Option<f64>,
    #[serde(default, rename = "tipo")]
    pub kind: String,
}

/// One decision alternative and its payoff per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default, rename = "nombre")]
    pub name: String,
    /// Payoffs keyed by criterion name; document order is preserved so
    /// diagnostics stay deterministic.
    #[serde(default, rename = "valores")]
    pub values: IndexMap<String, Option<f64>>,
}

/// Inbound evaluation request. Field names follow the legacy Spanish wire
/// contract via serde renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(default, rename = "modo")]
    pub mode: Option<String>,
    /// Optimism coefficient, only meaningful for the Hurwicz mode.
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default, rename = "alternativas")]
    pub alternatives: Vec<Alternative>,
    #[serde(default, rename = "criterios")]
    pub criteria: Vec<Criterion>,
}

/// Scored alternative in the response ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingItem {
    #[serde(rename = "alternativa")]
    pub alternative: String,
    #[serde(rename = "puntaje")]
    pub score: f64,
}

/// Outcome of one evaluation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResponse {
    #[serde(rename = "mensaje")]
    pub message: String,
    pub ranking: Vec<RankingItem>,
}
