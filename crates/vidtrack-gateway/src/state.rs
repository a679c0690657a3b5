use std::sync::Arc;

use vidtrack_core::Tracker;

#[derive(Clone)]
pub struct AppState {
    tracker: Arc<dyn Tracker>,
}

impl AppState {
    pub fn new(tracker: Arc<dyn Tracker>) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &dyn Tracker {
        self.tracker.as_ref()
    }
}
