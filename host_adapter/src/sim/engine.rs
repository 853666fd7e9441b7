use std::sync::{
    Arc,
    atomic::{AtomicI32, Ordering},
};

use log::trace;

use crate::{
    engine::frame::Frame,
    enums::{
        file_dialog_mode::FileDialogMode, js_dialog_type::JsDialogType,
        paint_element_type::PaintElementType, window_open_disposition::WindowOpenDisposition,
    },
    handlers::{
        client::Client, js_dialog_handler::JsDialogResult, request_handler::ResourceLoadAction,
    },
    structs::geometry::Rect,
    util::engine_string::EngineString,
};

use super::{
    browser::SimBrowser,
    callbacks::{SimBeforeDownloadCallback, SimDownloadItem, SimFileDialogCallback, SimJsDialogCallback},
    frame::SimFrame,
    request::SimRequest,
};

/// What happened to a request after the client had its say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    /// A resource request handler was returned for the request.
    pub intercepted: bool,
    pub action: ResourceLoadAction,
}

/// Fires engine events at a [`Client`] the way a real engine would: it asks
/// the client for the capability's handler on every event, and does its own
/// default thing when none is returned.
///
/// Everything runs synchronously on the calling thread, which plays the part
/// of the engine UI thread.
pub struct SimEngine {
    client: Arc<dyn Client>,
    next_identifier: AtomicI32,
}

impl SimEngine {
    pub fn new(client: Arc<dyn Client>) -> Self {
        Self {
            client,
            next_identifier: AtomicI32::new(1),
        }
    }

    /// Create a browser showing `url` and announce it.
    pub fn create_browser(&self, url: &str) -> SimBrowser {
        let identifier = self.next_identifier.fetch_add(1, Ordering::SeqCst);
        let browser = SimBrowser::new(identifier, url);
        trace!("sim: created browser {identifier}");

        if let Some(handler) = self.client.life_span_handler() {
            handler.on_after_created(&browser);
        }

        browser
    }

    /// Run the close handshake. Returns true if the browser closed.
    pub fn close_browser(&self, browser: &SimBrowser) -> bool {
        let Some(handler) = self.client.life_span_handler() else {
            return true;
        };

        if handler.do_close(browser) {
            return false;
        }

        handler.on_before_close(browser);
        true
    }

    pub fn title_change(&self, browser: &SimBrowser, title: &str) {
        if let Some(handler) = self.client.display_handler() {
            handler.on_title_change(browser, &EngineString::from(title));
        }
    }

    pub fn title_change_utf16(&self, browser: &SimBrowser, title: Vec<u16>) {
        if let Some(handler) = self.client.display_handler() {
            handler.on_title_change(browser, &EngineString::from_utf16(title));
        }
    }

    pub fn loading_progress(&self, browser: &SimBrowser, progress: f64) {
        if let Some(handler) = self.client.display_handler() {
            handler.on_loading_progress_change(browser, progress);
        }
    }

    pub fn load_end(&self, browser: &SimBrowser, frame: &SimFrame, http_status_code: i32) {
        if let Some(handler) = self.client.load_handler() {
            handler.on_load_end(browser, frame, http_status_code);
        }
    }

    /// `None` when the client does not render off-screen.
    pub fn view_rect(&self, browser: &SimBrowser) -> Option<Rect> {
        self.client
            .render_handler()
            .map(|handler| handler.get_view_rect(browser))
    }

    /// Composite one frame filled with `fill` and offer it to the render
    /// handler. The buffer is overwritten and freed as soon as the handler
    /// returns. Returns false if nothing took the frame.
    pub fn paint(
        &self,
        browser: &SimBrowser,
        element_type: PaintElementType,
        width: i32,
        height: i32,
        fill: u8,
    ) -> bool {
        let Some(handler) = self.client.render_handler() else {
            return false;
        };

        let len = (width.max(0) as usize) * (height.max(0) as usize) * 4;
        let mut buffer = vec![fill; len];
        let dirty_rects = [Rect::new(0, 0, width, height)];

        handler.on_paint(browser, element_type, &dirty_rects, &buffer, width, height);

        // the frame is recycled right away, as a compositor would.
        buffer.fill(0);
        drop(buffer);
        true
    }

    /// Paint with an explicitly sized buffer, for frames whose buffer does
    /// not match their dimensions.
    pub fn paint_raw(&self, browser: &SimBrowser, buffer: &[u8], width: i32, height: i32) -> bool {
        let Some(handler) = self.client.render_handler() else {
            return false;
        };

        handler.on_paint(browser, PaintElementType::View, &[], buffer, width, height);
        true
    }

    /// Returns true if the popup was blocked. Without a life span handler the
    /// engine opens it.
    pub fn open_popup(
        &self,
        browser: &SimBrowser,
        frame: &SimFrame,
        target_url: &str,
        user_gesture: bool,
    ) -> bool {
        let Some(handler) = self.client.life_span_handler() else {
            return false;
        };

        handler.on_before_popup(
            browser,
            frame,
            &EngineString::from(target_url),
            &EngineString::new(),
            WindowOpenDisposition::NewForegroundTab,
            user_gesture,
        )
    }

    pub fn send_request(
        &self,
        browser: &SimBrowser,
        frame: &SimFrame,
        request: &SimRequest,
        is_navigation: bool,
    ) -> RequestOutcome {
        let resource_handler = self.client.request_handler().and_then(|handler| {
            handler.get_resource_request_handler(
                browser,
                frame,
                request,
                is_navigation,
                false,
                &EngineString::new(),
            )
        });

        match resource_handler {
            Some(resource_handler) => RequestOutcome {
                intercepted: true,
                action: resource_handler.on_before_resource_load(browser, frame, request),
            },
            None => RequestOutcome {
                intercepted: false,
                action: ResourceLoadAction::Continue,
            },
        }
    }

    pub fn js_dialog(
        &self,
        browser: &SimBrowser,
        dialog_type: JsDialogType,
        message_text: &str,
        callback: &SimJsDialogCallback,
    ) -> JsDialogResult {
        let Some(handler) = self.client.js_dialog_handler() else {
            return JsDialogResult::default();
        };

        handler.on_js_dialog(
            browser,
            &browser.main_frame_sim().url(),
            dialog_type,
            &EngineString::from(message_text),
            &EngineString::new(),
            callback,
        )
    }

    /// Returns true if the client took over the dialog.
    pub fn file_dialog(
        &self,
        browser: &SimBrowser,
        mode: FileDialogMode,
        accept_filters: &[&str],
        callback: &SimFileDialogCallback,
    ) -> bool {
        let Some(handler) = self.client.dialog_handler() else {
            return false;
        };

        let accept_filters = accept_filters
            .iter()
            .map(|filter| EngineString::from(*filter))
            .collect::<Vec<_>>();

        handler.on_file_dialog(
            browser,
            mode,
            &EngineString::from("Open File"),
            &EngineString::new(),
            &accept_filters,
            callback,
        )
    }

    pub fn download(
        &self,
        browser: &SimBrowser,
        item: &SimDownloadItem,
        suggested_name: &str,
        callback: &SimBeforeDownloadCallback,
    ) {
        if let Some(handler) = self.client.download_handler() {
            handler.on_before_download(browser, item, &EngineString::from(suggested_name), callback);
        }
    }
}
