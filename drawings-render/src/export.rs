//! PNG export with embedded metadata (tEXt chunks).

use std::io::BufWriter;
use std::path::Path;

use tracing::{debug, info};

use drawings_core::RenderState;

use crate::buffer::PixelBuffer;
use crate::error::RenderError;
use crate::renderer::render_state;

/// Metadata to embed in an exported PNG as tEXt chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetadata {
    pub field: String,
    pub coloring: String,
    pub zoom: f64,
}

impl ExportMetadata {
    pub fn from_state(state: &RenderState) -> Self {
        Self {
            field: state.field().name.to_string(),
            coloring: state.coloring().name.to_string(),
            zoom: state.zoom(),
        }
    }
}

/// Write a pixel buffer as an 8-bit RGBA PNG with embedded drawing metadata.
///
/// Uses the `png` crate directly so custom tEXt chunks can be injected.
pub fn export_png(
    buffer: &PixelBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<()> {
    let expected = buffer.width as usize * buffer.height as usize * 4;
    if buffer.pixels.len() != expected {
        return Err(RenderError::BufferSize {
            width: buffer.width,
            height: buffer.height,
            expected,
            actual: buffer.pixels.len(),
        });
    }

    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Drawings".to_string())?;
    for (key, value) in build_metadata_pairs(buffer, metadata) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.pixels)?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

/// Render the current selection offscreen and write it to `path`.
///
/// The image is square with side `canvas_width`; `canvas_height` does not
/// influence the output size. Returns the written dimensions.
pub fn export_canvas(
    state: &RenderState,
    canvas_width: u32,
    canvas_height: u32,
    path: &Path,
) -> crate::Result<(u32, u32)> {
    let side = canvas_width;
    debug!(canvas_width, canvas_height, side, "Rendering export image");

    let buffer = render_state(state, side, side);
    export_png(&buffer, path, &ExportMetadata::from_state(state))?;

    info!(
        field = state.field().name,
        coloring = state.coloring().name,
        zoom = state.zoom(),
        "Exported {}x{} image to {}",
        side,
        side,
        path.display()
    );
    Ok((side, side))
}

fn build_metadata_pairs(buffer: &PixelBuffer, meta: &ExportMetadata) -> Vec<(String, String)> {
    vec![
        ("Drawings.Field".into(), meta.field.clone()),
        ("Drawings.Coloring".into(), meta.coloring.clone()),
        ("Drawings.Zoom".into(), format!("{}", meta.zoom)),
        (
            "Drawings.Resolution".into(),
            format!("{}x{}", buffer.width, buffer.height),
        ),
    ]
}
