use log::debug;

use crate::{enums::window_open_disposition::WindowOpenDisposition, handle::BrowserHandle};

/// A page asking to open a new window.
#[derive(Debug, Clone, Copy)]
pub struct PopupRequest<'a> {
    pub target_url: &'a str,
    pub target_frame_name: &'a str,
    pub disposition: WindowOpenDisposition,
    pub user_gesture: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopupDecision {
    /// Let the engine create the popup browser.
    Allow,
    /// Drop the popup entirely.
    Block,
    /// Block the popup and load its target in the frame that asked for it.
    Redirect,
}

impl PopupDecision {
    pub fn blocks_popup(self) -> bool {
        !matches!(self, PopupDecision::Allow)
    }
}

pub trait PopupPolicy: Send + Sync {
    fn on_before_popup(&self, browser: &BrowserHandle, popup: &PopupRequest<'_>) -> PopupDecision;
}

impl<F> PopupPolicy for F
where
    F: Fn(&BrowserHandle, &PopupRequest<'_>) -> PopupDecision + Send + Sync,
{
    fn on_before_popup(&self, browser: &BrowserHandle, popup: &PopupRequest<'_>) -> PopupDecision {
        self(browser, popup)
    }
}

/// Popups never open; their target loads in place instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedirectPopups;

impl PopupPolicy for RedirectPopups {
    fn on_before_popup(&self, browser: &BrowserHandle, popup: &PopupRequest<'_>) -> PopupDecision {
        debug!(
            "popup to {} from browser {} redirected into its frame",
            popup.target_url,
            browser.identifier()
        );
        PopupDecision::Redirect
    }
}
