use log::{debug, trace};

use crate::{
    engine::{browser::Browser, frame::Frame},
    handlers::load_handler::LoadHandler,
};

use super::HostClient;

impl LoadHandler for HostClient {
    fn on_load_end(&self, browser: &dyn Browser, frame: &dyn Frame, http_status_code: i32) {
        if !frame.is_main() {
            trace!("sub-frame of browser {} finished loading", browser.identifier());
            return;
        }

        let Some(on_load_end) = &self.callbacks.on_load_end else {
            return;
        };
        let Some(handle) = self.live_handle(browser, "load end") else {
            return;
        };

        debug!(
            "main frame of browser {} finished loading with status {http_status_code}",
            handle.identifier()
        );
        on_load_end(handle);
    }
}
