use std::os::raw::c_int;

/// A rectangle in view coordinates, as the engine and the host exchange it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The C layout of [`Rect`] used by the foreign callback table.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawRect {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

impl From<RawRect> for Rect {
    fn from(rect: RawRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<Rect> for RawRect {
    fn from(val: Rect) -> Self {
        RawRect {
            x: val.x,
            y: val.y,
            width: val.width,
            height: val.height,
        }
    }
}
