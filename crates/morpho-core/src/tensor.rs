//! Fixed-shape input tensor for the butterfly classifier.
//!
//! The model contract is a single 224×224 RGB image in HWC channel order
//! with a leading batch dimension, pixel values scaled to [0, 1].

use thiserror::Error;

#[derive(Debug, Error)]
#[error("expected {expected} pixel values, got {actual}")]
pub struct TensorShapeError {
    pub expected: usize,
    pub actual: usize,
}

/// A preprocessed `1×224×224×3` f32 image buffer, scaled to [0, 1].
///
/// Stored flat in HWC order; [`ImageTensor::SHAPE`] carries the batch
/// dimension the model expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    data: Vec<f32>,
}

impl ImageTensor {
    pub const WIDTH: usize = 224;
    pub const HEIGHT: usize = 224;
    pub const CHANNELS: usize = 3;
    /// Number of f32 values in the flat buffer.
    pub const LEN: usize = Self::WIDTH * Self::HEIGHT * Self::CHANNELS;
    /// Model input shape: `[batch, height, width, channels]`.
    pub const SHAPE: [i64; 4] = [
        1,
        Self::HEIGHT as i64,
        Self::WIDTH as i64,
        Self::CHANNELS as i64,
    ];

    /// Wrap a flat pixel buffer, rejecting anything that is not exactly
    /// 224×224×3 values.
    pub fn new(data: Vec<f32>) -> Result<Self, TensorShapeError> {
        if data.len() != Self::LEN {
            return Err(TensorShapeError {
                expected: Self::LEN,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// The flat HWC pixel buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consume the tensor, returning the flat buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_size() {
        let t = ImageTensor::new(vec![0.5; ImageTensor::LEN]).unwrap();
        assert_eq!(t.as_slice().len(), ImageTensor::LEN);
    }

    #[test]
    fn rejects_wrong_size() {
        let err = ImageTensor::new(vec![0.5; 7]).unwrap_err();
        assert_eq!(err.expected, ImageTensor::LEN);
        assert_eq!(err.actual, 7);
    }

    #[test]
    fn shape_matches_len() {
        let n: i64 = ImageTensor::SHAPE.iter().product();
        assert_eq!(n as usize, ImageTensor::LEN);
    }
}
