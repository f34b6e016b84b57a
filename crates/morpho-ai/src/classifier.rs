//! ONNX Runtime classifier for the pretrained butterfly model.
//!
//! Model contract: input `[1, 224, 224, 3]` f32 scaled to [0, 1], output a
//! 75-length class score vector. The artifact is opaque beyond that.

use std::path::Path;

use ort::session::Session;
use ort::value::Tensor;
use tracing::info;

use morpho_core::{ImageTensor, Prediction};

use crate::Classify;
use crate::scores::decode_prediction;
use crate::species::SpeciesTable;

/// Butterfly species classifier backed by ONNX Runtime.
///
/// Loaded once at startup; a load failure is a hard error, never a
/// classifier that silently serves failures later.
pub struct ImageClassifier {
    session: Session,
    input_name: String,
    species: SpeciesTable,
    class_count: usize,
}

impl ImageClassifier {
    /// Load the pretrained model from an `.onnx` file.
    pub fn load(model_path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(
            model_path.exists(),
            "model file not found: {model_path:?}"
        );

        let session = Session::builder()?.commit_from_file(model_path)?;
        let input_name = session.inputs()[0].name().to_string();
        let species = SpeciesTable::builtin();

        // Read the class count from the model output shape; fall back to
        // the table size when the model leaves the dimension dynamic.
        let class_count =
            infer_class_count(session.outputs()[0].dtype()).unwrap_or(species.len());
        anyhow::ensure!(
            class_count == species.len(),
            "model predicts {class_count} classes, species table has {}",
            species.len()
        );

        info!(
            classes = class_count,
            model = %model_path.display(),
            "loaded classifier model"
        );
        Ok(Self {
            session,
            input_name,
            species,
            class_count,
        })
    }

    /// Number of classes the model predicts.
    pub fn class_count(&self) -> usize {
        self.class_count
    }
}

impl Classify for ImageClassifier {
    fn classify(&mut self, image: &ImageTensor) -> anyhow::Result<Prediction> {
        let pixels = image.as_slice().to_vec().into_boxed_slice();
        let tensor = Tensor::from_array((ImageTensor::SHAPE, pixels))?;

        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => tensor])?;

        let (shape, data) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: &[i64] = shape;
        anyhow::ensure!(
            data.len() == self.class_count,
            "unexpected output shape: {dims:?}, expected [1, {}]",
            self.class_count
        );

        decode_prediction(data, &self.species)
            .ok_or_else(|| anyhow::anyhow!("model returned no comparable scores"))
    }
}

/// Try to read the class count from the ONNX model output type.
fn infer_class_count(output_type: &ort::value::ValueType) -> Option<usize> {
    match output_type {
        ort::value::ValueType::Tensor { shape, .. } => {
            // Last dimension is the class dimension.
            shape
                .last()
                .and_then(|&d| if d > 0 { Some(d as usize) } else { None })
        }
        _ => None,
    }
}
