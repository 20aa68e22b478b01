pub mod buffer;
pub mod error;
pub mod export;
pub mod renderer;

pub use buffer::PixelBuffer;
pub use error::RenderError;
pub use export::{export_canvas, export_png, ExportMetadata};
pub use renderer::{render, render_state};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
