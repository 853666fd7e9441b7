//! A small in-process engine for exercising the adapter without a real
//! renderer.
//!
//! Objects here are reference counted the same way engine objects are, and
//! record everything done to them so tests can look afterwards.

pub mod browser;
pub mod callbacks;
pub mod engine;
pub mod frame;
pub mod request;
