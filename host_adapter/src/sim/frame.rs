use parking_lot::Mutex;

use crate::{
    engine::frame::Frame,
    util::{
        engine_arc::{Counted, EngineArc},
        engine_string::EngineString,
    },
};

struct SimFrameState {
    is_main: bool,
    url: EngineString,
    loaded_urls: Mutex<Vec<String>>,
}

#[derive(Clone)]
pub struct SimFrame {
    inner: EngineArc<Counted<SimFrameState>>,
}

impl SimFrame {
    fn new(is_main: bool, url: &str) -> Self {
        Self {
            inner: EngineArc::new(SimFrameState {
                is_main,
                url: url.into(),
                loaded_urls: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn main(url: &str) -> Self {
        Self::new(true, url)
    }

    pub fn sub(url: &str) -> Self {
        Self::new(false, url)
    }

    /// Every url passed to `load_url`, oldest first.
    pub fn loaded_urls(&self) -> Vec<String> {
        self.inner.loaded_urls.lock().clone()
    }
}

impl Frame for SimFrame {
    fn is_main(&self) -> bool {
        self.inner.is_main
    }

    fn url(&self) -> EngineString {
        self.inner.url.clone()
    }

    fn load_url(&self, url: &EngineString) {
        self.inner.loaded_urls.lock().push(url.to_string_lossy());
    }
}
