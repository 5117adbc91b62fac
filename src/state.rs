use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::store::Store;

/// Everything a request handler can reach. Built once in `main` (or a test)
/// and handed to `app`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn Store>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
