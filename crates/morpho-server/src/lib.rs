//! HTTP surface for the butterfly classification service.

mod error;
pub use error::ApiError;

mod handlers;
pub use handlers::PredictResponse;

mod state;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// Stored uploads are served under `/static/images` so the `image` field
/// of a prediction response is directly dereferenceable.
pub fn router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(state.store.root());

    Router::new()
        .route("/", get(handlers::index))
        .route("/input", get(handlers::upload_form))
        .route("/predict", post(handlers::predict))
        .route("/health", get(handlers::health))
        .nest_service("/static/images", uploads)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
