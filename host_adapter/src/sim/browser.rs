use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::{
    engine::{browser::Browser, frame::Frame},
    util::engine_arc::{Counted, EngineArc},
};

use super::frame::SimFrame;

struct SimBrowserState {
    identifier: i32,
    main_frame: SimFrame,
    reloads: AtomicUsize,
    resizes: AtomicUsize,
    close_requests: Mutex<Vec<bool>>,
}

/// One counted reference to a simulated browser.
#[derive(Clone)]
pub struct SimBrowser {
    inner: EngineArc<Counted<SimBrowserState>>,
}

impl SimBrowser {
    pub fn new(identifier: i32, url: &str) -> Self {
        Self {
            inner: EngineArc::new(SimBrowserState {
                identifier,
                main_frame: SimFrame::main(url),
                reloads: AtomicUsize::new(0),
                resizes: AtomicUsize::new(0),
                close_requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// References currently held on this browser, by the engine and by
    /// anyone it was handed to.
    pub fn ref_count(&self) -> usize {
        EngineArc::ref_count(&self.inner)
    }

    pub fn main_frame_sim(&self) -> SimFrame {
        self.inner.main_frame.clone()
    }

    pub fn reload_count(&self) -> usize {
        self.inner.reloads.load(Ordering::SeqCst)
    }

    pub fn resize_count(&self) -> usize {
        self.inner.resizes.load(Ordering::SeqCst)
    }

    /// The `force` flag of every close request, oldest first.
    pub fn close_requests(&self) -> Vec<bool> {
        self.inner.close_requests.lock().clone()
    }
}

impl Browser for SimBrowser {
    fn add_ref(&self) -> Box<dyn Browser> {
        Box::new(self.clone())
    }

    fn identifier(&self) -> i32 {
        self.inner.identifier
    }

    fn main_frame(&self) -> Option<Box<dyn Frame>> {
        Some(Box::new(self.main_frame_sim()))
    }

    fn reload(&self) {
        self.inner.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn was_resized(&self) {
        self.inner.resizes.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self, force: bool) {
        self.inner.close_requests.lock().push(force);
    }
}
