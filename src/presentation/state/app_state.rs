use std::sync::Arc;

use crate::application::services::ExtractionService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(extraction_service: Arc<ExtractionService>, settings: Settings) -> Self {
        Self {
            extraction_service,
            settings: Arc::new(settings),
        }
    }
}
