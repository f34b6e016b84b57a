//! Request handlers: the prediction pipeline and the page/probe routes.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::response::Html;
use serde::Serialize;
use tracing::info;

use morpho_ai::{SpeciesTable, preprocess_image};

use crate::error::ApiError;
use crate::state::AppState;

/// Successful prediction response.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Resolved species label.
    pub label: String,
    /// URL path of the stored upload, servable under `/static/images`.
    pub image: String,
    /// Score of the winning class.
    pub confidence: f32,
}

/// `POST /predict` — multipart form with a `file` field.
///
/// Pipeline per request: intake → save → preprocess → classify → respond.
/// Failures short-circuit into [`ApiError`] and never touch the process.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingInput("No file part"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Decode(format!("could not read upload: {e}")))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = upload.ok_or(ApiError::MissingInput("No file part"))?;
    if filename.is_empty() {
        return Err(ApiError::MissingInput("No selected file"));
    }

    // Persist the raw upload before any further work, matching the
    // save-then-preprocess order of the pipeline contract.
    let stored = state.store.save(&filename, &bytes)?;

    let tensor = preprocess_image(&bytes)?;

    let prediction = state
        .classifier
        .lock()
        .await
        .classify(&tensor)
        .map_err(|e| ApiError::Inference(e.to_string()))?;

    info!(
        label = %prediction.label,
        class_index = prediction.class_index,
        key = %stored.key,
        "prediction complete"
    );

    Ok(Json(PredictResponse {
        label: prediction.label,
        image: format!("/static/images/{}", stored.key),
        confidence: prediction.confidence,
    }))
}

// ── Pages & probes ──

const INDEX_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Morpho</title></head>
<body>
<h1>Morpho</h1>
<p>Upload a butterfly photo and get the species name back.</p>
<p><a href="/input">Identify a butterfly</a></p>
</body>
</html>
"#;

const INPUT_HTML: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Morpho — upload</title></head>
<body>
<h1>Identify a butterfly</h1>
<form action="/predict" method="post" enctype="multipart/form-data">
<input type="file" name="file" accept="image/*">
<button type="submit">Predict</button>
</form>
</body>
</html>
"#;

/// `GET /` — landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /input` — upload form.
pub async fn upload_form() -> Html<&'static str> {
    Html(INPUT_HTML)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub species: usize,
}

/// `GET /health` — readiness probe.
///
/// Reachable only once startup finished, so the classifier is loaded by
/// construction; the body reports the label table size.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        species: SpeciesTable::builtin().len(),
    })
}
