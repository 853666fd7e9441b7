use host_adapter::{BrowserHandle, PaintFrame, Rect};
use parking_lot::Mutex;

/// The host's copy of the last frame a browser painted.
#[derive(Debug)]
pub struct Surface {
    size: Rect,
    pixels: Mutex<Option<Snapshot>>,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub browser: i32,
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Rect::new(0, 0, width, height),
            pixels: Mutex::new(None),
        }
    }

    pub fn view_rect(&self) -> Rect {
        self.size
    }

    /// Copy the frame out; the engine reuses its buffer once this returns.
    pub fn present(&self, browser: &BrowserHandle, frame: PaintFrame<'_>) {
        *self.pixels.lock() = Some(Snapshot {
            browser: browser.identifier(),
            width: frame.width,
            height: frame.height,
            pixels: frame.buffer.to_vec(),
        });
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.pixels.lock().clone()
    }
}
