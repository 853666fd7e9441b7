pub mod geometry;
pub mod paint_frame;
pub mod settings;
