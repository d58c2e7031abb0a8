use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::store::QuizStore;

/// The store is held as a trait object so handlers run against any
/// `QuizStore` implementation, not just the SQL-backed one.
pub type DynQuizStore = Arc<dyn QuizStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: DynQuizStore,
    pub config: Config,
}

impl FromRef<AppState> for DynQuizStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
