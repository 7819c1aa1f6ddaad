//! Label and remedy resolution from classifier output.
//!
//! Maps a probability vector onto the compiled-in class label list and
//! remedy table: argmax (first occurrence wins on ties), confidence at the
//! argmax index, and a total remedy lookup with a fixed fallback.

use crate::core::{DEFAULT_TOPK, LeafError};
use crate::labels::{CLASS_LABELS, remedy_for};
use crate::processors::Topk;

/// A resolved prediction for one leaf image.
#[derive(Debug, Clone)]
pub struct LeafPrediction {
    /// Index of the predicted class in the label list.
    pub class_id: usize,
    /// Species name of the predicted class.
    pub label: &'static str,
    /// Probability at the predicted index, in [0, 1].
    pub confidence: f32,
    /// Medicinal-use description for the predicted species.
    pub remedy: &'static str,
    /// Ranked predictions as (class_id, label, score), best first.
    /// Holds one entry unless a larger top-k was requested.
    pub ranked: Vec<(usize, &'static str, f32)>,
}

impl LeafPrediction {
    /// Confidence as a percentage string with two-decimal precision.
    ///
    /// Formatting lives at the display boundary only; `confidence` stays a
    /// float internally.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}", self.confidence * 100.0)
    }
}

/// Resolves a probability vector into a species prediction.
///
/// The predicted class is the index of the maximum probability; when
/// several indexes share the maximum, the lowest index wins (first
/// occurrence, the natural argmax scan order). The remedy lookup is total:
/// a species missing from the remedy table resolves to the fixed fallback
/// string rather than an error.
///
/// # Arguments
///
/// * `probabilities` - One score per class, in label-list order
/// * `k` - Number of ranked entries to retain (top-1 for the plain pipeline)
///
/// # Errors
///
/// Returns `LeafError::ClassCountMismatch` if the vector length differs
/// from the class label list length. That indicates a model/label-list
/// inconsistency and aborts the request rather than indexing out of
/// bounds.
pub fn resolve_topk(probabilities: &[f32], k: usize) -> Result<LeafPrediction, LeafError> {
    if probabilities.len() != CLASS_LABELS.len() {
        return Err(LeafError::ClassCountMismatch {
            expected: CLASS_LABELS.len(),
            actual: probabilities.len(),
        });
    }

    let topk = Topk::without_class_names();
    let result = topk
        .process_single(probabilities, k.max(1))
        .map_err(|msg| LeafError::post_processing(
            "top-k extraction failed",
            crate::core::errors::SimpleError::new(msg),
        ))?;

    let ranked: Vec<(usize, &'static str, f32)> = result.indexes[0]
        .iter()
        .zip(result.scores[0].iter())
        .map(|(&id, &score)| (id, CLASS_LABELS[id], score))
        .collect();

    let (class_id, label, confidence) = ranked[0];

    Ok(LeafPrediction {
        class_id,
        label,
        confidence,
        remedy: remedy_for(label),
        ranked,
    })
}

/// Resolves a probability vector into a top-1 species prediction.
pub fn resolve(probabilities: &[f32]) -> Result<LeafPrediction, LeafError> {
    resolve_topk(probabilities, DEFAULT_TOPK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::FALLBACK_REMEDY;

    fn uniform_with(overrides: &[(usize, f32)]) -> Vec<f32> {
        let n = CLASS_LABELS.len();
        let override_sum: f32 = overrides.iter().map(|(_, v)| v).sum();
        let rest = (1.0 - override_sum) / (n - overrides.len()) as f32;
        let mut probs = vec![rest; n];
        for &(i, v) in overrides {
            probs[i] = v;
        }
        probs
    }

    #[test]
    fn test_max_at_index_zero_is_aloe_vera() {
        let probs = uniform_with(&[(0, 0.92)]);
        let prediction = resolve(&probs).unwrap();

        assert_eq!(prediction.class_id, 0);
        assert_eq!(prediction.label, "Aloe Vera");
        assert!((prediction.confidence - 0.92).abs() < 1e-6);
        assert_eq!(prediction.confidence_percent(), "92.00");
        assert_eq!(prediction.remedy, "Soothes burns and aids digestion.");
    }

    #[test]
    fn test_tie_break_prefers_index_three_over_five() {
        let probs = uniform_with(&[(3, 0.3), (5, 0.3)]);
        let prediction = resolve(&probs).unwrap();

        assert_eq!(prediction.class_id, 3);
        assert_eq!(prediction.label, CLASS_LABELS[3]);
    }

    #[test]
    fn test_label_absent_from_remedy_table_gets_fallback() {
        // "Astma Weed" is index 4 in the label list; the remedy table only
        // knows the "Astma weed" spelling.
        let probs = uniform_with(&[(4, 0.9)]);
        let prediction = resolve(&probs).unwrap();

        assert_eq!(prediction.label, "Astma Weed");
        assert_eq!(prediction.remedy, FALLBACK_REMEDY);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let probs = vec![0.5, 0.5];
        match resolve(&probs) {
            Err(LeafError::ClassCountMismatch { expected, actual }) => {
                assert_eq!(expected, CLASS_LABELS.len());
                assert_eq!(actual, 2);
            }
            other => panic!("expected ClassCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let probs = uniform_with(&[(17, 0.4), (42, 0.2)]);
        let first = resolve(&probs).unwrap();
        let second = resolve(&probs).unwrap();

        assert_eq!(first.class_id, second.class_id);
        assert_eq!(first.label, second.label);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.remedy, second.remedy);
    }

    #[test]
    fn test_topk_ranking_is_descending() {
        let probs = uniform_with(&[(10, 0.5), (20, 0.3), (30, 0.1)]);
        let prediction = resolve_topk(&probs, 3).unwrap();

        assert_eq!(prediction.ranked.len(), 3);
        assert_eq!(prediction.ranked[0].0, 10);
        assert_eq!(prediction.ranked[1].0, 20);
        assert!(prediction.ranked[0].2 >= prediction.ranked[1].2);
        assert!(prediction.ranked[1].2 >= prediction.ranked[2].2);
    }

    #[test]
    fn test_every_class_resolves_with_nonempty_remedy() {
        for i in 0..CLASS_LABELS.len() {
            let probs = uniform_with(&[(i, 0.8)]);
            let prediction = resolve(&probs).unwrap();
            assert_eq!(prediction.class_id, i);
            assert!(!prediction.remedy.is_empty());
        }
    }
}
