//! Process-wide application state, built fully before the listener binds.

use tokio::sync::Mutex;

use morpho_ai::Classify;
use morpho_store::UploadStore;

/// Immutable after startup: the loaded classifier and the upload store.
///
/// The classifier sits behind a mutex because an ONNX session needs
/// exclusive access per invocation; everything else is read-only.
pub struct AppState {
    pub classifier: Mutex<Box<dyn Classify>>,
    pub store: UploadStore,
}

impl AppState {
    pub fn new(classifier: Box<dyn Classify>, store: UploadStore) -> Self {
        Self {
            classifier: Mutex::new(classifier),
            store,
        }
    }
}
