use log::debug;

use crate::{
    engine::{
        browser::Browser, callbacks::BeforeDownloadCallback, download_item::DownloadItem,
    },
    handle::BrowserHandle,
    handlers::download_handler::DownloadHandler,
    policy::download::{Download, DownloadDecision},
    util::engine_string::EngineString,
};

use super::HostClient;

impl DownloadHandler for HostClient {
    fn on_before_download(
        &self,
        browser: &dyn Browser,
        download_item: &dyn DownloadItem,
        suggested_name: &EngineString,
        callback: &dyn BeforeDownloadCallback,
    ) {
        let url = download_item.url().to_string_lossy();
        let mime_type = download_item.mime_type().to_string_lossy();
        let suggested_name = suggested_name.to_string_lossy();
        let download = Download {
            id: download_item.id(),
            url: &url,
            mime_type: &mime_type,
            suggested_name: &suggested_name,
            total_bytes: download_item.total_bytes(),
        };

        match self
            .policies
            .download
            .on_before_download(&BrowserHandle::new(browser), &download)
        {
            DownloadDecision::Deny => debug!("download of {url} left to be canceled"),
            DownloadDecision::Save { path, show_dialog } => {
                let path = EngineString::from(path.to_string_lossy().into_owned());
                callback.cont(&path, show_dialog);
            }
        }
    }
}
