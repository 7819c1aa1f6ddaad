//! Top-k classification result processing.

use std::collections::HashMap;

/// Result structure for top-k classification processing.
///
/// Contains the top-k class indexes and their corresponding confidence
/// scores for each prediction in a batch.
#[derive(Debug, Clone)]
pub struct TopkResult {
    /// Vector of vectors containing the class indexes for each prediction.
    /// Each inner vector contains the top-k class indexes for one prediction.
    pub indexes: Vec<Vec<usize>>,
    /// Vector of vectors containing the confidence scores for each prediction.
    /// Each inner vector contains the top-k scores corresponding to the indexes.
    pub scores: Vec<Vec<f32>>,
    /// Optional vector of vectors containing class names for each prediction.
    /// Only populated if class name mapping is provided.
    pub class_names: Option<Vec<Vec<String>>>,
}

/// A processor for extracting top-k results from classification outputs.
///
/// Ranking is by descending score; equal scores keep their original index
/// order (stable sort), so the top entry of a tied maximum is always the
/// lowest index. The resolver depends on that for deterministic argmax.
#[derive(Debug)]
pub struct Topk {
    /// Optional mapping from class IDs to class names.
    class_id_map: Option<HashMap<usize, String>>,
}

impl Topk {
    /// Creates a new Topk processor with optional class name mapping.
    pub fn new(class_id_map: Option<HashMap<usize, String>>) -> Self {
        Self { class_id_map }
    }

    /// Creates a new Topk processor without class name mapping.
    pub fn without_class_names() -> Self {
        Self::new(None)
    }

    /// Creates a new Topk processor with class names from a slice.
    ///
    /// The slice index corresponds to the class ID.
    pub fn from_class_names(class_names: &[&str]) -> Self {
        let class_id_map: HashMap<usize, String> = class_names
            .iter()
            .enumerate()
            .map(|(id, name)| (id, name.to_string()))
            .collect();
        Self::new(Some(class_id_map))
    }

    /// Processes classification outputs to extract top-k results.
    ///
    /// # Arguments
    ///
    /// * `predictions` - 2D vector where each inner vector contains the
    ///   confidence scores for all classes for one prediction.
    /// * `k` - Number of top predictions to extract (must be > 0).
    ///
    /// # Errors
    ///
    /// Returns an error message if k is 0 or a prediction vector is empty.
    pub fn process(&self, predictions: &[Vec<f32>], k: usize) -> Result<TopkResult, String> {
        if k == 0 {
            return Err("k must be greater than 0".to_string());
        }

        let mut all_indexes = Vec::with_capacity(predictions.len());
        let mut all_scores = Vec::with_capacity(predictions.len());
        let mut all_class_names = self.class_id_map.is_some().then(Vec::new);

        for prediction in predictions {
            if prediction.is_empty() {
                return Err("empty prediction vector".to_string());
            }

            let effective_k = k.min(prediction.len());
            let (top_indexes, top_scores) = extract_topk(prediction, effective_k);

            if let Some(ref mut class_names_vec) = all_class_names {
                class_names_vec.push(self.map_indexes_to_names(&top_indexes));
            }
            all_indexes.push(top_indexes);
            all_scores.push(top_scores);
        }

        Ok(TopkResult {
            indexes: all_indexes,
            scores: all_scores,
            class_names: all_class_names,
        })
    }

    /// Processes a single prediction vector.
    pub fn process_single(&self, prediction: &[f32], k: usize) -> Result<TopkResult, String> {
        self.process(&[prediction.to_vec()], k)
    }

    /// Gets the class name for a given class ID.
    pub fn get_class_name(&self, class_id: usize) -> Option<&String> {
        self.class_id_map.as_ref()?.get(&class_id)
    }

    /// Gets the number of classes in the mapping.
    pub fn num_classes(&self) -> Option<usize> {
        self.class_id_map.as_ref().map(|map| map.len())
    }

    fn map_indexes_to_names(&self, indexes: &[usize]) -> Vec<String> {
        if let Some(ref class_map) = self.class_id_map {
            indexes
                .iter()
                .map(|&idx| {
                    class_map
                        .get(&idx)
                        .cloned()
                        .unwrap_or_else(|| format!("Unknown({})", idx))
                })
                .collect()
        } else {
            indexes.iter().map(|&idx| idx.to_string()).collect()
        }
    }
}

impl Default for Topk {
    fn default() -> Self {
        Self::without_class_names()
    }
}

/// Extracts top-k indexes and scores from a single prediction.
fn extract_topk(prediction: &[f32], k: usize) -> (Vec<usize>, Vec<f32>) {
    let mut indexed_scores: Vec<(usize, f32)> = prediction.iter().copied().enumerate().collect();

    // Stable sort: ties stay in ascending index order.
    indexed_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    indexed_scores.into_iter().take(k).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topk_without_class_names() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8, 0.1], vec![0.7, 0.2, 0.1]];

        let result = topk.process(&predictions, 2).unwrap();
        assert_eq!(result.indexes.len(), 2);
        assert_eq!(result.indexes[0], vec![1, 0]); // Class 1 (0.8), Class 0 (0.1)
        assert_eq!(result.indexes[1], vec![0, 1]); // Class 0 (0.7), Class 1 (0.2)
        assert!(result.class_names.is_none());
    }

    #[test]
    fn test_topk_with_class_names() {
        let topk = Topk::from_class_names(&["cat", "dog", "bird"]);
        let predictions = vec![vec![0.1, 0.8, 0.1]];

        let result = topk.process(&predictions, 2).unwrap();
        assert_eq!(result.indexes[0], vec![1, 0]);
        assert_eq!(result.class_names.as_ref().unwrap()[0], vec!["dog", "cat"]);
        assert_eq!(topk.num_classes(), Some(3));
        assert_eq!(topk.get_class_name(2), Some(&"bird".to_string()));
    }

    #[test]
    fn test_tie_break_selects_lowest_index() {
        let topk = Topk::without_class_names();
        // Equal maxima at indexes 3 and 5.
        let prediction = vec![0.05, 0.1, 0.05, 0.3, 0.1, 0.3, 0.1];

        let result = topk.process_single(&prediction, 1).unwrap();
        assert_eq!(result.indexes[0], vec![3]);
        assert!((result.scores[0][0] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_topk_k_larger_than_classes() {
        let topk = Topk::without_class_names();
        let predictions = vec![vec![0.1, 0.8]];

        let result = topk.process(&predictions, 5).unwrap();
        assert_eq!(result.indexes[0].len(), 2);
    }

    #[test]
    fn test_topk_invalid_k() {
        let topk = Topk::without_class_names();
        assert!(topk.process(&[vec![0.1, 0.8, 0.1]], 0).is_err());
    }

    #[test]
    fn test_topk_empty_predictions() {
        let topk = Topk::without_class_names();
        let result = topk.process(&[], 2).unwrap();
        assert!(result.indexes.is_empty());
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_topk_is_deterministic() {
        let topk = Topk::without_class_names();
        let prediction = vec![0.2, 0.5, 0.1, 0.2];

        let first = topk.process_single(&prediction, 4).unwrap();
        let second = topk.process_single(&prediction, 4).unwrap();
        assert_eq!(first.indexes, second.indexes);
        assert_eq!(first.scores, second.scores);
    }
}
