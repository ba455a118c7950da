use crate::config::Config;
use crate::store::Store;

/// Shared service state handed to every gate and handler through axum
/// state. Built by the entry point (tests construct their own isolated
/// instances) and never reachable as a global.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}
