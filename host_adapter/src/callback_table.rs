use std::fmt;

use crate::{
    handle::BrowserHandle,
    structs::{geometry::Rect, paint_frame::PaintFrame},
};

pub type BrowserCallback = Box<dyn Fn(BrowserHandle) + Send + Sync>;
pub type TitleCallback = Box<dyn Fn(BrowserHandle, &str) + Send + Sync>;
pub type PaintCallback = Box<dyn for<'a> Fn(BrowserHandle, PaintFrame<'a>) + Send + Sync>;
pub type ViewRectCallback = Box<dyn Fn(BrowserHandle) -> Rect + Send + Sync>;

/// The host's notification functions.
///
/// Every slot is optional. An empty slot means that class of event is never
/// delivered, which is a normal configuration rather than an error. The table
/// is moved into the adapter at construction and cannot change afterwards.
#[derive(Default)]
pub struct CallbackTable {
    pub(crate) on_after_created: Option<BrowserCallback>,
    pub(crate) on_before_close: Option<BrowserCallback>,
    pub(crate) on_title_change: Option<TitleCallback>,
    pub(crate) on_load_end: Option<BrowserCallback>,
    pub(crate) on_paint: Option<PaintCallback>,
    pub(crate) get_view_rect: Option<ViewRectCallback>,
}

impl CallbackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_after_created(mut self, f: impl Fn(BrowserHandle) + Send + Sync + 'static) -> Self {
        self.on_after_created = Some(Box::new(f));
        self
    }

    pub fn on_before_close(mut self, f: impl Fn(BrowserHandle) + Send + Sync + 'static) -> Self {
        self.on_before_close = Some(Box::new(f));
        self
    }

    /// The title arrives as UTF-8.
    pub fn on_title_change(
        mut self,
        f: impl Fn(BrowserHandle, &str) + Send + Sync + 'static,
    ) -> Self {
        self.on_title_change = Some(Box::new(f));
        self
    }

    /// Only main frame loads are delivered.
    pub fn on_load_end(mut self, f: impl Fn(BrowserHandle) + Send + Sync + 'static) -> Self {
        self.on_load_end = Some(Box::new(f));
        self
    }

    pub fn on_paint(
        mut self,
        f: impl for<'a> Fn(BrowserHandle, PaintFrame<'a>) + Send + Sync + 'static,
    ) -> Self {
        self.on_paint = Some(Box::new(f));
        self
    }

    /// Without a view rect provider the adapter does not claim the render
    /// capability, and paint events are never produced.
    pub fn get_view_rect(
        mut self,
        f: impl Fn(BrowserHandle) -> Rect + Send + Sync + 'static,
    ) -> Self {
        self.get_view_rect = Some(Box::new(f));
        self
    }

    pub fn has_view_rect_provider(&self) -> bool {
        self.get_view_rect.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.wired_slots().next().is_none()
    }

    /// Names of the slots that are set, in declaration order.
    pub fn wired_slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            ("on_after_created", self.on_after_created.is_some()),
            ("on_before_close", self.on_before_close.is_some()),
            ("on_title_change", self.on_title_change.is_some()),
            ("on_load_end", self.on_load_end.is_some()),
            ("on_paint", self.on_paint.is_some()),
            ("get_view_rect", self.get_view_rect.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, wired)| wired.then_some(name))
    }
}

impl fmt::Debug for CallbackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.wired_slots()).finish()
    }
}
