use thiserror::Error;

/// Errors originating from rendering and export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("buffer holds {actual} bytes, expected {expected} for {width}×{height}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode PNG: {0}")]
    Encoding(#[from] png::EncodingError),
}
