//! PNG export of the annotated scan result

use crate::algorithm::scan::ScanPixel;
use crate::io::configuration::{CLEAR_COLOR, MOTIF_COLOR, RENDER_SCALE, ROUGH_COLOR};
use crate::io::error::{Result, SolverError};
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

/// Export an annotated scan as a PNG
///
/// Each image pixel becomes a square block of `RENDER_SCALE` output pixels;
/// rough and motif pixels get distinct colors so occurrences stand out.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written.
pub fn export_scan_as_png(annotated: &Array2<ScanPixel>, output_path: &Path) -> Result<()> {
    let (rows, cols) = annotated.dim();
    let width = (cols as u32 * RENDER_SCALE).max(1);
    let height = (rows as u32 * RENDER_SCALE).max(1);

    let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let row = (y / RENDER_SCALE) as usize;
        let column = (x / RENDER_SCALE) as usize;
        let rgba = match annotated.get((row, column)).copied() {
            Some(ScanPixel::Rough) => ROUGH_COLOR,
            Some(ScanPixel::Motif) => MOTIF_COLOR,
            Some(ScanPixel::Clear) | None => CLEAR_COLOR,
        };
        *pixel = Rgba(rgba);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| SolverError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
