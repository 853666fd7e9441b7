use crate::handle::BrowserHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseDecision {
    Allow,
    /// Keep the browser open. The engine will not send before-close.
    Veto,
}

pub trait ClosePolicy: Send + Sync {
    fn do_close(&self, browser: &BrowserHandle) -> CloseDecision;
}

impl<F> ClosePolicy for F
where
    F: Fn(&BrowserHandle) -> CloseDecision + Send + Sync,
{
    fn do_close(&self, browser: &BrowserHandle) -> CloseDecision {
        self(browser)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AllowClose;

impl ClosePolicy for AllowClose {
    fn do_close(&self, _browser: &BrowserHandle) -> CloseDecision {
        CloseDecision::Allow
    }
}
