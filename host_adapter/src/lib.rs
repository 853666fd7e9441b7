pub mod callback_table;
pub mod engine;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod handle;
pub mod handlers;
pub mod host_client;
pub mod lifecycle;
pub mod policy;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod structs;
pub mod util;

pub use callback_table::CallbackTable;
pub use enums::capability::{Capabilities, Capability, Variant};
pub use error::{Error, Result};
pub use handle::BrowserHandle;
pub use host_client::{HostClient, HostClientBuilder};
pub use structs::{geometry::Rect, paint_frame::PaintFrame, settings::AdapterSettings};
