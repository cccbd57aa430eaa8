use std::sync::Arc;

use quire_api::Site;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
}

impl AppState {
    pub fn new(site: Arc<Site>) -> Self {
        Self { site }
    }
}
