use log::trace;

use crate::{
    engine::browser::Browser, handlers::display_handler::DisplayHandler,
    util::engine_string::EngineString,
};

use super::HostClient;

impl DisplayHandler for HostClient {
    fn on_title_change(&self, browser: &dyn Browser, title: &EngineString) {
        let Some(on_title_change) = &self.callbacks.on_title_change else {
            return;
        };
        let Some(handle) = self.live_handle(browser, "title change") else {
            return;
        };

        on_title_change(handle, &title.to_string_lossy());
    }

    fn on_loading_progress_change(&self, browser: &dyn Browser, progress: f64) {
        trace!(
            "browser {} loading {:.0}%",
            browser.identifier(),
            progress * 100.0
        );
    }
}
