use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes the buffer as a binary PPM file.
///
/// Every write is checked; a failing disk surfaces as an `Err` instead of a
/// silently truncated image.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let file = std::fs::File::create(filepath)?;
    let mut writer = BufWriter::new(file);

    // PPM header: P6 means binary RGB, then a comment, width height, max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "# Mandelbrot set")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.bytes())?;
    writer.flush()?;

    Ok(())
}
