use crate::{
    engine::{browser::Browser, frame::Frame},
    enums::window_open_disposition::WindowOpenDisposition,
    util::engine_string::EngineString,
};

pub trait LifeSpanHandler: Send + Sync {
    /// Called on the UI thread before a popup browser is created.
    /// Return true to cancel creation of the popup.
    #[allow(clippy::too_many_arguments)]
    fn on_before_popup(
        &self,
        _browser: &dyn Browser,
        _frame: &dyn Frame,
        _target_url: &EngineString,
        _target_frame_name: &EngineString,
        _target_disposition: WindowOpenDisposition,
        _user_gesture: bool,
    ) -> bool {
        false
    }

    /// Called on the UI thread once the browser exists. This is the first
    /// notification for any browser.
    fn on_after_created(&self, _browser: &dyn Browser) {}

    /// Called on the UI thread when a close was requested.
    /// Return false to let the close proceed.
    fn do_close(&self, _browser: &dyn Browser) -> bool {
        false
    }

    /// Called on the UI thread just before the browser is destroyed. This is
    /// the last notification for any browser.
    fn on_before_close(&self, _browser: &dyn Browser) {}
}
