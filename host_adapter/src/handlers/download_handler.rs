use crate::{
    engine::{
        browser::Browser, callbacks::BeforeDownloadCallback, download_item::DownloadItem,
    },
    util::engine_string::EngineString,
};

pub trait DownloadHandler: Send + Sync {
    /// The download is canceled unless `callback` is continued, either here
    /// or later.
    fn on_before_download(
        &self,
        _browser: &dyn Browser,
        _download_item: &dyn DownloadItem,
        _suggested_name: &EngineString,
        _callback: &dyn BeforeDownloadCallback,
    ) {
    }
}
