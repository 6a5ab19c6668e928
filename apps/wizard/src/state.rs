use std::sync::Arc;

use crate::backend_client::ResumeBackend;
use crate::config::Config;
use crate::services::linkedin::LinkedInSession;
use crate::store::SharedStore;
use crate::workflow::wizard::watch_session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The wizard session. One per process, like one browser tab.
    pub store: SharedStore,
    /// Parse / PDF / email / LinkedIn backend. Default: `BackendClient` over HTTP.
    pub backend: Arc<dyn ResumeBackend>,
    pub linkedin: LinkedInSession,
    pub config: Config,
}

impl AppState {
    pub fn new(backend: Arc<dyn ResumeBackend>, config: Config) -> Self {
        let store = SharedStore::new();
        watch_session(&mut store.lock());
        Self {
            store,
            backend,
            linkedin: LinkedInSession::default(),
            config,
        }
    }
}
