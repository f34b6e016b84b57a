//! AI inference layer: image preprocessing and ONNX Runtime classification.

mod preprocess;
pub use preprocess::{PreprocessError, preprocess_image};

mod scores;
pub use scores::{argmax, decode_prediction};

mod species;
pub use species::{SpeciesTable, UNKNOWN_LABEL};

#[cfg(feature = "onnx")]
mod classifier;
#[cfg(feature = "onnx")]
pub use classifier::ImageClassifier;

use morpho_core::{ImageTensor, Prediction};

/// Seam between the HTTP surface and the model.
///
/// Takes `&mut self` because the underlying ONNX session needs exclusive
/// access per invocation; callers serialise calls behind a mutex.
pub trait Classify: Send {
    fn classify(&mut self, image: &ImageTensor) -> anyhow::Result<Prediction>;
}
