use crate::util::engine_string::EngineString;

pub trait DownloadItem: Send + Sync {
    fn id(&self) -> u32;

    fn url(&self) -> EngineString;

    fn mime_type(&self) -> EngineString;

    /// `None` when the server did not report a length.
    fn total_bytes(&self) -> Option<u64>;
}
