use crate::{engine::browser::Browser, util::engine_string::EngineString};

pub trait DisplayHandler: Send + Sync {
    fn on_title_change(&self, _browser: &dyn Browser, _title: &EngineString) {}

    /// `progress` runs from 0.0 to 1.0.
    fn on_loading_progress_change(&self, _browser: &dyn Browser, _progress: f64) {}
}
