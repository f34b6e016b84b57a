//! Classification result for a single uploaded image.

use serde::Serialize;

/// A resolved classification: the argmax class index, the species label it
/// maps to, and the winning score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Index of the maximum-scoring class in the model output vector.
    pub class_index: usize,
    /// Species name resolved from the class table, or the unknown sentinel.
    pub label: String,
    /// Score of the winning class.
    pub confidence: f32,
}
