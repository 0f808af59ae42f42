use indexmap::IndexMap;

use super::domain::Criterion;

/// Normalize raw criterion weights into a distribution that sums to 1,
/// keyed by trimmed criterion name in declaration order.
///
/// Missing weights count as zero. When nothing positive remains, every
/// criterion receives an equal share so the weighted modes still rank.
pub fn normalize(criteria: &[Criterion]) -> IndexMap<String, f64> {
    let total: f64 = criteria.iter().filter_map(|criterion| criterion.weight).sum();

    let mut weights = IndexMap::with_capacity(criteria.len());
    if total <= 0.0 {
        let uniform = 1.0 / criteria.len() as f64;
        for criterion in criteria {
            weights.insert(criterion.name.trim().to_string(), uniform);
        }
        return weights;
    }

    for criterion in criteria {
        let weight = criterion.weight.unwrap_or(0.0);
        weights.insert(criterion.name.trim().to_string(), weight / total);
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(name: &str, weight: Option<f64>) -> Criterion {
        Criterion {
            name: name.to_string(),
            weight,
            kind: "beneficio".to_string(),
        }
    }

    #[test]
    fn positive_weights_sum_to_one() {
        let criteria = vec![
            criterion("a", Some(2.0)),
            criterion("b", Some(1.0)),
            criterion("c", Some(1.0)),
        ];

        let weights = normalize(&criteria);
        let total: f64 = weights.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(weights["a"], 0.5);
        assert_eq!(weights["b"], 0.25);
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let criteria = vec![
            criterion("a", Some(0.0)),
            criterion("b", None),
            criterion("c", Some(0.0)),
            criterion("d", Some(0.0)),
        ];

        let weights = normalize(&criteria);
        for share in weights.values() {
            assert_eq!(*share, 0.25);
        }
    }

    #[test]
    fn keys_are_trimmed_and_ordered() {
        let criteria = vec![criterion(" b ", Some(1.0)), criterion("a", Some(3.0))];

        let weights = normalize(&criteria);
        let keys: Vec<&String> = weights.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(weights["b"], 0.25);
    }
}
