use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Present only when a completion-service key was configured at startup.
    /// Handlers check this before building a request, so no remote call is
    /// ever attempted without a credential.
    pub backend: Option<Arc<dyn CompletionBackend>>,
    pub config: Config,
}
