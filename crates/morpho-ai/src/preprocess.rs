//! Image preprocessing for the butterfly classifier.
//!
//! Mirrors the training-time pipeline: decode (format guessed from
//! content), resize to exactly 224×224 with bilinear filtering, convert to
//! RGB, scale each channel to [0, 1]. No mean/std normalisation — the
//! model was trained on plain 1/255-rescaled pixels.

use std::io::Cursor;

use image::ImageReader;
use image::imageops::FilterType;
use thiserror::Error;

use morpho_core::ImageTensor;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("could not read image: {0}")]
    Read(#[from] std::io::Error),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode raw upload bytes into the model input tensor.
///
/// Deterministic: the same bytes always yield the same tensor.
pub fn preprocess_image(bytes: &[u8]) -> Result<ImageTensor, PreprocessError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let resized = img.resize_exact(
        ImageTensor::WIDTH as u32,
        ImageTensor::HEIGHT as u32,
        FilterType::Triangle,
    );
    let rgb = resized.to_rgb8();

    let mut data = Vec::with_capacity(ImageTensor::LEN);
    for px in rgb.pixels() {
        data.push(f32::from(px[0]) / 255.0);
        data.push(f32::from(px[1]) / 255.0);
        data.push(f32::from(px[2]) / 255.0);
    }

    Ok(ImageTensor::new(data).expect("resize_exact produced the target dimensions"))
}
