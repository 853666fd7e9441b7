use crate::engine::{browser::Browser, frame::Frame};

pub trait LoadHandler: Send + Sync {
    /// Called once per frame when it finishes loading, sub-frames included.
    fn on_load_end(&self, _browser: &dyn Browser, _frame: &dyn Frame, _http_status_code: i32) {}
}
