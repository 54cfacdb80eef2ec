//! Application state for the HTTP server.

use crate::db::repository::RecordRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn RecordRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }
}
