//! The adapter itself: one object that implements every engine handler
//! capability and turns engine events into callback table notifications.

mod dialog;
mod display;
mod download;
mod life_span;
mod load;
mod render;
mod request;

#[cfg(test)]
mod test;

use log::{debug, warn};

use crate::{
    callback_table::CallbackTable,
    engine::browser::Browser,
    enums::capability::{Capabilities, Capability, Variant},
    handle::BrowserHandle,
    handlers::{
        client::Client, dialog_handler::DialogHandler, display_handler::DisplayHandler,
        download_handler::DownloadHandler, js_dialog_handler::JsDialogHandler,
        life_span_handler::LifeSpanHandler, load_handler::LoadHandler,
        render_handler::RenderHandler, request_handler::RequestHandler,
    },
    lifecycle::{Lifecycle, LifecycleState},
    policy::{
        Policies,
        close::ClosePolicy,
        dialog::{FileDialogPolicy, JsDialogPolicy},
        download::DownloadPolicy,
        popup::PopupPolicy,
        referrer::ReferrerRepair,
    },
    structs::settings::AdapterSettings,
    util::thread::UiThread,
};

/// Brokers between the engine and the host.
///
/// Hand it to the engine as the browser's client. The engine then asks it for
/// each capability's handler, and it answers only for the capabilities it was
/// configured with.
#[derive(Debug)]
pub struct HostClient {
    callbacks: CallbackTable,
    capabilities: Capabilities,
    policies: Policies,
    referrer_repair: Option<ReferrerRepair>,
    lifecycle: Lifecycle,
    ui_thread: UiThread,
}

impl HostClient {
    /// Every capability with the default policies.
    pub fn new(callbacks: CallbackTable) -> Self {
        Self::builder().callbacks(callbacks).build()
    }

    pub fn builder() -> HostClientBuilder {
        HostClientBuilder::default()
    }

    /// The capabilities actually claimed, after construction-time pruning.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn lifecycle_state(&self, browser: &BrowserHandle) -> Option<LifecycleState> {
        self.lifecycle.state(browser.identifier())
    }

    fn claims(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// A handle for delivering a notification about `browser`, or `None` if
    /// the browser is outside its created..closed window.
    ///
    /// Without the life span capability the adapter never learns when a
    /// browser starts or ends, so every browser counts as live.
    fn live_handle(&self, browser: &dyn Browser, event: &str) -> Option<BrowserHandle> {
        let identifier = browser.identifier();
        if self.claims(Capability::LifeSpan) && !self.lifecycle.is_live(identifier) {
            warn!(
                "dropping {event} for browser {identifier} in state {:?}",
                self.lifecycle.state(identifier)
            );
            return None;
        }

        Some(BrowserHandle::new(browser))
    }
}

impl Client for HostClient {
    fn display_handler(&self) -> Option<&dyn DisplayHandler> {
        self.claims(Capability::Display)
            .then_some(self as &dyn DisplayHandler)
    }

    fn life_span_handler(&self) -> Option<&dyn LifeSpanHandler> {
        self.claims(Capability::LifeSpan)
            .then_some(self as &dyn LifeSpanHandler)
    }

    fn render_handler(&self) -> Option<&dyn RenderHandler> {
        self.claims(Capability::Render)
            .then_some(self as &dyn RenderHandler)
    }

    fn load_handler(&self) -> Option<&dyn LoadHandler> {
        self.claims(Capability::Load).then_some(self as &dyn LoadHandler)
    }

    fn request_handler(&self) -> Option<&dyn RequestHandler> {
        self.claims(Capability::Request)
            .then_some(self as &dyn RequestHandler)
    }

    fn js_dialog_handler(&self) -> Option<&dyn JsDialogHandler> {
        self.claims(Capability::JsDialog)
            .then_some(self as &dyn JsDialogHandler)
    }

    fn dialog_handler(&self) -> Option<&dyn DialogHandler> {
        self.claims(Capability::FileDialog)
            .then_some(self as &dyn DialogHandler)
    }

    fn download_handler(&self) -> Option<&dyn DownloadHandler> {
        self.claims(Capability::Download)
            .then_some(self as &dyn DownloadHandler)
    }
}

pub struct HostClientBuilder {
    callbacks: CallbackTable,
    capabilities: Capabilities,
    policies: Policies,
    referrer_repair: Option<ReferrerRepair>,
    ui_thread: UiThread,
}

impl Default for HostClientBuilder {
    fn default() -> Self {
        Self {
            callbacks: CallbackTable::default(),
            capabilities: Variant::Full.capabilities(),
            policies: Policies::default(),
            referrer_repair: Some(ReferrerRepair::default()),
            ui_thread: UiThread::lazy(),
        }
    }
}

impl HostClientBuilder {
    pub fn callbacks(mut self, callbacks: CallbackTable) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.capabilities = variant.capabilities();
        self
    }

    pub fn capabilities(mut self, capabilities: impl Into<Capabilities>) -> Self {
        self.capabilities = capabilities.into();
        self
    }

    pub fn popup_policy(mut self, policy: impl PopupPolicy + 'static) -> Self {
        self.policies.popup = Box::new(policy);
        self
    }

    pub fn close_policy(mut self, policy: impl ClosePolicy + 'static) -> Self {
        self.policies.close = Box::new(policy);
        self
    }

    pub fn js_dialog_policy(mut self, policy: impl JsDialogPolicy + 'static) -> Self {
        self.policies.js_dialog = Box::new(policy);
        self
    }

    pub fn file_dialog_policy(mut self, policy: impl FileDialogPolicy + 'static) -> Self {
        self.policies.file_dialog = Box::new(policy);
        self
    }

    pub fn download_policy(mut self, policy: impl DownloadPolicy + 'static) -> Self {
        self.policies.download = Box::new(policy);
        self
    }

    /// `None` disables request interception altogether.
    pub fn referrer_repair(mut self, repair: Option<ReferrerRepair>) -> Self {
        self.referrer_repair = repair;
        self
    }

    pub fn ui_thread(mut self, ui_thread: UiThread) -> Self {
        self.ui_thread = ui_thread;
        self
    }

    pub fn settings(mut self, settings: &AdapterSettings) -> Self {
        self.capabilities = settings.capabilities();
        self.referrer_repair = settings.referrer_repair();
        if !settings.enforce_ui_thread {
            self.ui_thread = UiThread::unchecked();
        }
        self
    }

    pub fn build(self) -> HostClient {
        let mut capabilities = self.capabilities;

        if capabilities.contains(Capability::Render) && !self.callbacks.has_view_rect_provider() {
            warn!("no get_view_rect callback wired, not claiming the render capability");
            capabilities = capabilities.without(Capability::Render);
        }

        if capabilities.contains(Capability::Request) && self.referrer_repair.is_none() {
            debug!("no request rules configured, not claiming the request capability");
            capabilities = capabilities.without(Capability::Request);
        }

        debug!(
            "host client claims {:?} with callbacks {:?}",
            capabilities.iter().collect::<Vec<_>>(),
            self.callbacks
        );

        HostClient {
            callbacks: self.callbacks,
            capabilities,
            policies: self.policies,
            referrer_repair: self.referrer_repair,
            lifecycle: Lifecycle::default(),
            ui_thread: self.ui_thread,
        }
    }
}
