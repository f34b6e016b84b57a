//! Storage layer: raw image uploads persisted under collision-free keys.

mod error;
pub use error::StoreError;

mod uploads;
pub use uploads::{StoredUpload, UploadStore};
