pub mod engine_arc;
pub mod engine_string;
pub mod thread;
