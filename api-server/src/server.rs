//! REST server startup

use crate::{create_router, AppState};
use analysis_service::AnalysisService;
use axum::serve;
use pulse_core::{AppConfig, CoreError};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Build the analysis service from `config` and serve until the listener fails.
pub async fn start_server(config: &AppConfig) -> Result<(), CoreError> {
    let service = AnalysisService::from_config(config)?;
    if service.pipeline().is_remote_enabled() {
        info!("Remote sentiment model: {}", config.inference.model_name());
    } else {
        info!("Sentiment classification is heuristic-only");
    }

    let app = create_router(AppState::new(service));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on {}", addr);
    info!("Reddit Sentiment Analysis API ready!");

    serve(listener, app).await.map_err(|e| {
        error!("Server error: {}", e);
        CoreError::Io(e)
    })
}
