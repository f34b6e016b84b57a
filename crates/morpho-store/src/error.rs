use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("empty upload: {0}")]
    EmptyUpload(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
