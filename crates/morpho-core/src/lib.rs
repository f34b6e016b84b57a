pub mod prediction;
pub mod tensor;
pub mod upload_key;

pub use prediction::Prediction;
pub use tensor::{ImageTensor, TensorShapeError};
pub use upload_key::sanitize_filename;
