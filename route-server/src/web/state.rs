//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationIndex;

/// Shared application state.
///
/// The station snapshot is immutable; every request resolves its own route
/// from it.
#[derive(Clone)]
pub struct AppState {
    /// Station records loaded at startup
    pub stations: Arc<StationIndex>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationIndex) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}
