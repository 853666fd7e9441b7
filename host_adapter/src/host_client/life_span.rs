use log::{debug, warn};

use crate::{
    engine::{browser::Browser, frame::Frame},
    enums::window_open_disposition::WindowOpenDisposition,
    handle::BrowserHandle,
    handlers::life_span_handler::LifeSpanHandler,
    policy::{
        close::CloseDecision,
        popup::{PopupDecision, PopupRequest},
    },
    util::engine_string::EngineString,
};

use super::HostClient;

impl LifeSpanHandler for HostClient {
    fn on_before_popup(
        &self,
        browser: &dyn Browser,
        frame: &dyn Frame,
        target_url: &EngineString,
        target_frame_name: &EngineString,
        target_disposition: WindowOpenDisposition,
        user_gesture: bool,
    ) -> bool {
        let target_url_utf8 = target_url.to_string_lossy();
        let target_frame_name = target_frame_name.to_string_lossy();
        let popup = PopupRequest {
            target_url: &target_url_utf8,
            target_frame_name: &target_frame_name,
            disposition: target_disposition,
            user_gesture,
        };

        let decision = self
            .policies
            .popup
            .on_before_popup(&BrowserHandle::new(browser), &popup);

        if decision == PopupDecision::Redirect {
            frame.load_url(target_url);
        }

        decision.blocks_popup()
    }

    fn on_after_created(&self, browser: &dyn Browser) {
        self.ui_thread.assert_current("on_after_created");

        let identifier = browser.identifier();
        if !self.lifecycle.created(identifier) {
            warn!("browser {identifier} was already created, dropping after-created");
            return;
        }
        debug!("browser {identifier} created");

        if let Some(on_after_created) = &self.callbacks.on_after_created {
            on_after_created(BrowserHandle::new(browser));
        }
    }

    fn do_close(&self, browser: &dyn Browser) -> bool {
        self.ui_thread.assert_current("do_close");

        match self.policies.close.do_close(&BrowserHandle::new(browser)) {
            CloseDecision::Allow => false,
            CloseDecision::Veto => {
                debug!("close of browser {} vetoed", browser.identifier());
                true
            }
        }
    }

    fn on_before_close(&self, browser: &dyn Browser) {
        self.ui_thread.assert_current("on_before_close");

        let identifier = browser.identifier();
        if !self.lifecycle.closed(identifier) {
            warn!(
                "browser {identifier} is not live ({:?}), dropping before-close",
                self.lifecycle.state(identifier)
            );
            return;
        }
        debug!("browser {identifier} closing");

        if let Some(on_before_close) = &self.callbacks.on_before_close {
            on_before_close(BrowserHandle::new(browser));
        }
    }
}
