//! Structural and cross-consistency checks run before any scoring.
//!
//! Violations accumulate so a client can fix every problem from a single
//! response; only the missing-collections check aborts early, because the
//! deeper rules dereference both lists.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::domain::{CriterionKind, DecisionMode, DecisionRequest};

/// Single field-level violation using the legacy path convention
/// (`criterios[2].peso`, `alternativas.nombre`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    #[serde(rename = "campo")]
    pub field: String,
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// Client-caused rejection carrying every violation found.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Request inválido")]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

fn violation(field: impl Into<String>, message: impl Into<String>) -> FieldViolation {
    FieldViolation {
        field: field.into(),
        message: message.into(),
    }
}

pub fn validate(request: &DecisionRequest) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    let mode = DecisionMode::parse(request.mode.as_deref());
    if mode.is_none() {
        violations.push(violation(
            "modo",
            format!(
                "Modo no soportado: '{}'. Permitidos: {}",
                request.mode.as_deref().unwrap_or(""),
                DecisionMode::ACCEPTED.join(", ")
            ),
        ));
    }

    if request.criteria.is_empty() {
        violations.push(violation("criterios", "Debe enviar al menos 1 criterio"));
    }
    if request.alternatives.is_empty() {
        violations.push(violation(
            "alternativas",
            "Debe enviar al menos 1 alternativa",
        ));
    }
    // Everything below dereferences both collections.
    if request.criteria.is_empty() || request.alternatives.is_empty() {
        return Err(ValidationError { violations });
    }

    let weight_based = mode.is_some_and(DecisionMode::requires_weights);
    let mode_label = DecisionMode::normalize(request.mode.as_deref());

    let mut criterion_names = Vec::new();
    for (i, criterion) in request.criteria.iter().enumerate() {
        let path = format!("criterios[{i}]");

        if criterion.name.trim().is_empty() {
            violations.push(violation(format!("{path}.criterio"), "No puede ser vacío"));
        } else {
            criterion_names.push(criterion.name.trim().to_string());
        }

        // Weights only matter for ranking/SAW and expected value; the
        // ordinal modes ignore them entirely.
        if weight_based {
            match criterion.weight {
                None => violations.push(violation(
                    format!("{path}.peso"),
                    format!("Es obligatorio en modo {mode_label}"),
                )),
                Some(weight) if weight < 0.0 => {
                    violations.push(violation(format!("{path}.peso"), "No puede ser negativo"));
                }
                Some(_) => {}
            }
        }

        if criterion.kind.trim().is_empty() {
            violations.push(violation(
                format!("{path}.tipo"),
                "Es obligatorio (beneficio|costo)",
            ));
        } else if CriterionKind::parse(&criterion.kind).is_none() {
            violations.push(violation(
                format!("{path}.tipo"),
                "Debe ser 'beneficio' o 'costo'",
            ));
        }
    }

    push_duplicates("criterios", &criterion_names, &mut violations);

    let mut alternative_names = Vec::new();
    for (i, alternative) in request.alternatives.iter().enumerate() {
        if alternative.name.trim().is_empty() {
            violations.push(violation(
                format!("alternativas[{i}].nombre"),
                "No puede ser vacío",
            ));
        } else {
            alternative_names.push(alternative.name.trim().to_string());
        }
    }
    push_duplicates("alternativas.nombre", &alternative_names, &mut violations);

    if mode == Some(DecisionMode::Hurwicz) {
        // Absence is fine: scoring falls back to 0.5.
        if let Some(alpha) = request.alpha {
            if !(0.0..=1.0).contains(&alpha) {
                violations.push(violation("alpha", "Debe estar entre 0 y 1"));
            }
        }
    }

    let declared: IndexSet<&str> = criterion_names.iter().map(String::as_str).collect();
    for (i, alternative) in request.alternatives.iter().enumerate() {
        let path = format!("alternativas[{i}].valores");

        if alternative.values.is_empty() {
            violations.push(violation(path, "Debe incluir valores por criterio"));
            continue;
        }

        for name in &declared {
            match alternative.values.get(*name) {
                None => violations.push(violation(
                    path.clone(),
                    format!("Falta valor para criterio: {name}"),
                )),
                Some(None) => {
                    violations.push(violation(format!("{path}.{name}"), "No puede ser null"));
                }
                Some(Some(_)) => {}
            }
        }

        for key in alternative.values.keys() {
            if !declared.contains(key.as_str()) {
                violations.push(violation(
                    path.clone(),
                    format!("Criterio extra no definido: {key}"),
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// One violation per duplicated (case-insensitive) value, first-seen order.
fn push_duplicates(field: &str, names: &[String], violations: &mut Vec<FieldViolation>) {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for name in names {
        *counts.entry(name.to_lowercase()).or_default() += 1;
    }

    for (name, count) in counts {
        if count > 1 {
            violations.push(violation(field, format!("Duplicado encontrado: '{name}'")));
        }
    }
}
