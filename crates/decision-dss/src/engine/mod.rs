//! Multi-criteria decision engine: request validation, the seven scoring
//! methods, and ranking assembly behind a single evaluator facade.

pub mod domain;
pub mod router;
pub mod scoring;
pub mod validation;
pub mod weights;

mod evaluator;
mod math;

pub use domain::{
    Alternative, Criterion, CriterionKind, DecisionMode, DecisionRequest, DecisionResponse,
    RankingItem,
};
pub use evaluator::{DecisionEngine, EngineError};
pub use router::decision_router;
pub use scoring::ScoringError;
pub use validation::{FieldViolation, ValidationError};
