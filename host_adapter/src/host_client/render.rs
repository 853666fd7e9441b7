use log::{trace, warn};

use crate::{
    engine::browser::Browser,
    enums::paint_element_type::PaintElementType,
    handle::BrowserHandle,
    handlers::render_handler::RenderHandler,
    structs::{geometry::Rect, paint_frame::PaintFrame},
};

use super::HostClient;

// what the engine itself assumes when it gets no answer.
const FALLBACK_VIEW_RECT: Rect = Rect {
    x: 0,
    y: 0,
    width: 1,
    height: 1,
};

impl RenderHandler for HostClient {
    // geometry is answered outside the lifecycle window too, since the engine
    // sizes the view while the browser is still being created.
    fn get_view_rect(&self, browser: &dyn Browser) -> Rect {
        match &self.callbacks.get_view_rect {
            Some(get_view_rect) => get_view_rect(BrowserHandle::new(browser)),
            None => {
                warn!("view rect requested without a provider");
                FALLBACK_VIEW_RECT
            }
        }
    }

    fn on_paint(
        &self,
        browser: &dyn Browser,
        element_type: PaintElementType,
        dirty_rects: &[Rect],
        buffer: &[u8],
        width: i32,
        height: i32,
    ) {
        let Some(on_paint) = &self.callbacks.on_paint else {
            return;
        };

        let Some(frame) = PaintFrame::new(element_type, dirty_rects, buffer, width, height) else {
            warn!(
                "dropping {width}x{height} frame with a {} byte buffer",
                buffer.len()
            );
            return;
        };

        let Some(handle) = self.live_handle(browser, "paint") else {
            return;
        };

        trace!(
            "painting {element_type:?} {width}x{height} for browser {}",
            handle.identifier()
        );
        on_paint(handle, frame);
    }
}
