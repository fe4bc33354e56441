//! HTTP surface for keyword sentiment analysis.

pub mod error;
pub mod handlers;
pub mod routing;
pub mod server;

use analysis_service::AnalysisService;
use std::sync::Arc;

pub use error::ApiError;
pub use routing::create_router;
pub use server::start_server;

/// Shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(service: AnalysisService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
