use std::path::PathBuf;

use crate::handle::BrowserHandle;

#[derive(Debug, Clone, Copy)]
pub struct Download<'a> {
    pub id: u32,
    pub url: &'a str,
    pub mime_type: &'a str,
    pub suggested_name: &'a str,
    pub total_bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DownloadDecision {
    /// Issue no continuation, which the engine treats as a cancel.
    Deny,
    Save { path: PathBuf, show_dialog: bool },
}

pub trait DownloadPolicy: Send + Sync {
    fn on_before_download(&self, browser: &BrowserHandle, download: &Download<'_>)
        -> DownloadDecision;
}

impl<F> DownloadPolicy for F
where
    F: Fn(&BrowserHandle, &Download<'_>) -> DownloadDecision + Send + Sync,
{
    fn on_before_download(
        &self,
        browser: &BrowserHandle,
        download: &Download<'_>,
    ) -> DownloadDecision {
        self(browser, download)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DenyDownloads;

impl DownloadPolicy for DenyDownloads {
    fn on_before_download(
        &self,
        _browser: &BrowserHandle,
        _download: &Download<'_>,
    ) -> DownloadDecision {
        DownloadDecision::Deny
    }
}
