use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docling_extract::application::ports::StagingArea;
use docling_extract::application::services::{ExtractionService, LazyConverter};
use docling_extract::infrastructure::conversion::ConverterFactory;
use docling_extract::infrastructure::observability::{TracingConfig, init_tracing};
use docling_extract::infrastructure::staging::TempStagingArea;
use docling_extract::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let staging: Arc<dyn StagingArea> = match &settings.staging.directory {
        Some(directory) => Arc::new(
            TempStagingArea::new(directory.clone())
                .context("Failed to prepare staging directory")?,
        ),
        None => Arc::new(TempStagingArea::system()),
    };

    let converter_settings = settings.converter.clone();
    let converter = Arc::new(LazyConverter::new(move || {
        ConverterFactory::create(&converter_settings).map_err(Into::into)
    }));

    let extraction_service = Arc::new(ExtractionService::new(
        staging,
        converter,
        settings.converter.max_concurrent,
        settings.converter.timeout(),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!(
        engine = ?settings.converter.engine,
        timeout_secs = settings.converter.timeout_secs,
        max_upload_mb = settings.limits.max_upload_mb,
        "Starting document extraction service"
    );

    let state = AppState::new(extraction_service, settings);
    let router = create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
