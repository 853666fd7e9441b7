use crate::util::engine_string::EngineString;

pub trait Frame: Send + Sync {
    /// True for the top-level frame of a browser.
    fn is_main(&self) -> bool;

    /// Empty for frames that have not committed a navigation, including
    /// pages loaded from memory.
    fn url(&self) -> EngineString;

    fn load_url(&self, url: &EngineString);
}
