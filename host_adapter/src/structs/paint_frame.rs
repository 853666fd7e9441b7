use std::fmt;

use crate::enums::paint_element_type::PaintElementType;

use super::geometry::Rect;

/// One composited frame, borrowed from the engine for the length of a paint
/// callback.
///
/// The pixels are BGRA, four bytes per pixel, rows packed without padding.
/// Nothing in this crate accepts a `PaintFrame` into an owning container;
/// hosts that need the pixels later must copy them out.
#[derive(Clone, Copy)]
pub struct PaintFrame<'a> {
    pub element_type: PaintElementType,
    pub dirty_rects: &'a [Rect],
    pub buffer: &'a [u8],
    pub width: usize,
    pub height: usize,
}

impl<'a> PaintFrame<'a> {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Returns `None` when the dimensions are negative or the buffer is too
    /// short to hold them.
    pub fn new(
        element_type: PaintElementType,
        dirty_rects: &'a [Rect],
        buffer: &'a [u8],
        width: i32,
        height: i32,
    ) -> Option<Self> {
        let width = usize::try_from(width).ok()?;
        let height = usize::try_from(height).ok()?;
        let expected = width
            .checked_mul(height)?
            .checked_mul(Self::BYTES_PER_PIXEL)?;
        if buffer.len() < expected {
            return None;
        }

        Some(Self {
            element_type,
            dirty_rects,
            buffer: &buffer[..expected],
            width,
            height,
        })
    }

    pub fn stride(&self) -> usize {
        self.width * Self::BYTES_PER_PIXEL
    }

    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride();
        self.buffer.get(start..start + self.stride())
    }
}

impl fmt::Debug for PaintFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintFrame")
            .field("element_type", &self.element_type)
            .field("dirty_rects", &self.dirty_rects)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("buffer_len", &self.buffer.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{enums::paint_element_type::PaintElementType, structs::geometry::Rect};

    use super::PaintFrame;

    #[test]
    fn rejects_short_buffers_and_negative_sizes() {
        let buffer = vec![0u8; 2 * 2 * 4];
        assert!(PaintFrame::new(PaintElementType::View, &[], &buffer, 2, 2).is_some());
        assert!(PaintFrame::new(PaintElementType::View, &[], &buffer, 3, 2).is_none());
        assert!(PaintFrame::new(PaintElementType::View, &[], &buffer, -1, 2).is_none());
    }

    #[test]
    fn rows_are_sliced_by_stride() {
        let buffer = (0u8..24).collect::<Vec<_>>();
        let dirty = [Rect::new(0, 0, 3, 2)];
        let frame = PaintFrame::new(PaintElementType::Popup, &dirty, &buffer, 3, 2).unwrap();
        assert_eq!(frame.stride(), 12);
        assert_eq!(frame.row(1).unwrap()[0], 12);
        assert!(frame.row(2).is_none());
        assert_eq!(frame.dirty_rects, &dirty);
    }
}
