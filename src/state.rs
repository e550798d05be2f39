// src/state.rs
// Shared, read-only application state handed to every handler

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::file_system::TextFileStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: TextFileStore,
    pub page_path: PathBuf,
}

impl AppState {
    pub fn new(store: TextFileStore, page_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            page_path: page_path.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            TextFileStore::new(config.storage_dir.clone()),
            config.page_path.clone(),
        )
    }
}

pub fn create_app_state(config: &ServerConfig) -> Arc<AppState> {
    Arc::new(AppState::from_config(config))
}
