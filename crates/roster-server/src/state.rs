use std::path::PathBuf;
use std::sync::Arc;

use roster::Database;

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub docs_path: PathBuf,
}
