use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use morpho_ai::ImageClassifier;
use morpho_server::AppState;
use morpho_store::UploadStore;

/// Butterfly species identification service.
#[derive(Parser, Debug)]
#[command(name = "morpho", version, about)]
struct Args {
    /// Path to the pretrained ONNX classifier.
    #[arg(long, env = "MORPHO_MODEL", default_value = "models/butterfly-vgg16.onnx")]
    model: PathBuf,

    /// Directory where uploads are stored and served from.
    #[arg(long, env = "MORPHO_UPLOAD_DIR", default_value = "static/images")]
    uploads: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "MORPHO_ADDR", default_value = "0.0.0.0:5000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    // Startup is all-or-nothing: a service without a loaded model never
    // starts accepting traffic.
    let classifier = ImageClassifier::load(&args.model)?;
    let store = UploadStore::open(&args.uploads)?;

    let state = Arc::new(AppState::new(Box::new(classifier), store));
    let app = morpho_server::router(state);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!(
        addr = %args.addr,
        model = %args.model.display(),
        "morpho v{} listening",
        env!("CARGO_PKG_VERSION")
    );
    axum::serve(listener, app).await?;

    Ok(())
}
