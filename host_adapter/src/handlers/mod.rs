//! The engine's handler contract, one trait per capability.
//!
//! The engine asks a [`client::Client`] for each handler and calls the
//! returned object on its UI thread. Every method has the engine's own
//! default behavior as its body, so an implementation only overrides what it
//! means to handle.

pub mod client;
pub mod dialog_handler;
pub mod display_handler;
pub mod download_handler;
pub mod js_dialog_handler;
pub mod life_span_handler;
pub mod load_handler;
pub mod render_handler;
pub mod request_handler;
