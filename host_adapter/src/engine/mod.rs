//! The engine-side objects handed to handler methods.
//!
//! A binding to a concrete engine implements these over the engine's own
//! reference counted objects. Handlers only ever borrow them for the length
//! of a call; [`BrowserHandle`](crate::handle::BrowserHandle) is the one way
//! to keep a browser alive past that.

pub mod browser;
pub mod callbacks;
pub mod download_item;
pub mod frame;
pub mod request;
