use crate::{
    engine::browser::Browser, enums::paint_element_type::PaintElementType,
    structs::geometry::Rect,
};

// the engine only renders off-screen through this handler, so a view rect is
// always required.
pub trait RenderHandler: Send + Sync {
    /// The view rectangle in screen coordinates. Called synchronously and
    /// must answer immediately.
    fn get_view_rect(&self, browser: &dyn Browser) -> Rect;

    /// `buffer` holds `width * height` BGRA pixels and is only valid for the
    /// duration of this call.
    #[allow(clippy::too_many_arguments)]
    fn on_paint(
        &self,
        _browser: &dyn Browser,
        _element_type: PaintElementType,
        _dirty_rects: &[Rect],
        _buffer: &[u8],
        _width: i32,
        _height: i32,
    ) {
    }
}
