use super::frame::Frame;

/// An engine browser instance.
pub trait Browser: Send + Sync {
    /// Take a new counted reference to this browser.
    fn add_ref(&self) -> Box<dyn Browser>;

    /// Globally unique for the lifetime of the engine.
    fn identifier(&self) -> i32;

    /// True if both refer to the same engine object.
    fn is_same(&self, other: &dyn Browser) -> bool {
        self.identifier() == other.identifier()
    }

    fn main_frame(&self) -> Option<Box<dyn Frame>>;

    fn reload(&self);

    /// Tell the engine the view rect changed. It will call back into the
    /// render handler for the new geometry.
    fn was_resized(&self);

    /// Ask the engine to close this browser. Without `force` the page gets a
    /// chance to run its unload handlers first.
    fn close(&self, force: bool);
}
