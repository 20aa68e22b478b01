use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use drawings_core::{ColorMapping, RenderState, ScalarField};

use crate::buffer::PixelBuffer;

/// Render a full frame: every pixel `(x, y)` gets
/// `coloring(field(x, y) · zoom)`.
///
/// Always a complete recompute into a fresh buffer. Rows are spread over the
/// Rayon pool, but the call blocks until the whole grid is done and the output
/// depends only on the arguments.
pub fn render(
    field: &ScalarField,
    coloring: &ColorMapping,
    zoom: f64,
    width: u32,
    height: u32,
) -> PixelBuffer {
    let start = Instant::now();
    let mut buffer = PixelBuffer::new(width, height);
    if buffer.is_empty() {
        return buffer;
    }

    let stride = buffer.stride();
    buffer
        .pixels
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as f64;
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let value = field.eval(x as f64, y) * zoom;
                pixel.copy_from_slice(&coloring.color(value).to_rgba8());
            }
        });

    debug!(
        field = field.name,
        coloring = coloring.name,
        zoom,
        width,
        height,
        elapsed_us = start.elapsed().as_micros() as u64,
        "Render complete"
    );
    buffer
}

/// Render the current selection of `state` at the given size.
pub fn render_state(state: &RenderState, width: u32, height: u32) -> PixelBuffer {
    render(state.field(), state.coloring(), state.zoom(), width, height)
}
