use std::fmt;

use crate::{engine::browser::Browser, util::engine_string::EngineString};

/// A counted reference to an engine browser, safe to hand to the host.
///
/// Creating a handle adds a reference on the engine side and dropping it
/// releases that reference. Once the host holds a handle, keeping it no
/// longer than the browser's `before-close` notification is the host's job.
pub struct BrowserHandle {
    browser: Box<dyn Browser>,
}

impl BrowserHandle {
    /// Takes a new reference to `browser`.
    pub fn new(browser: &dyn Browser) -> Self {
        Self {
            browser: browser.add_ref(),
        }
    }

    pub fn identifier(&self) -> i32 {
        self.browser.identifier()
    }

    /// True if both handles refer to the same engine browser.
    pub fn is_same(&self, other: &BrowserHandle) -> bool {
        self.browser.is_same(other.browser.as_ref())
    }

    pub fn is_browser(&self, browser: &dyn Browser) -> bool {
        self.browser.is_same(browser)
    }

    /// Load `url` in the main frame. Returns false if the browser has no main
    /// frame any more.
    pub fn load_url(&self, url: &str) -> bool {
        match self.browser.main_frame() {
            Some(frame) => {
                frame.load_url(&EngineString::from(url));
                true
            }
            None => false,
        }
    }

    pub fn reload(&self) {
        self.browser.reload();
    }

    pub fn was_resized(&self) {
        self.browser.was_resized();
    }

    pub fn close(&self, force: bool) {
        self.browser.close(force);
    }
}

impl Clone for BrowserHandle {
    fn clone(&self) -> Self {
        Self::new(self.browser.as_ref())
    }
}

impl fmt::Debug for BrowserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserHandle")
            .field("identifier", &self.identifier())
            .finish()
    }
}
