use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthFlag;
use crate::models::Session;
use crate::services::CatalogStore;

/// Shared application state
///
/// Everything a handler touches is injected here at startup; nothing is global.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub catalog: CatalogStore,
    pub auth: AuthFlag,
}

impl AppState {
    /// Creates state with an empty session around the given catalog
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            catalog,
            auth: AuthFlag::new(),
        }
    }
}
