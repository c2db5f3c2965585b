use crate::config::Config;
use crate::store::ProverbStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ProverbStore,
    pub config: Arc<Config>,
}
