//! Image file output.
//!
//! Two formats are supported, picked by file extension:
//! - `.ppm`: plain-text `P3`, one `r g b` line per pixel
//! - `.png`: 8-bit RGB through the `image` crate

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{ImageBuffer, RenderError, RenderResult};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
}

impl OutputFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Convert a linear channel to 0-255.
///
/// Values above 1.0 are clamped; negative values are not, and come out
/// negative.
#[inline]
pub fn quantize(channel: f32) -> i32 {
    (channel.min(1.0) * 255.0) as i32
}

/// Write the image as plain-text PPM (`P3`).
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color.to_array().map(quantize);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

/// Save the image as a PPM file.
pub fn save_ppm(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))?;
    Ok(())
}

/// Convert to RGB bytes (for PNG).
fn to_rgb8(image: &ImageBuffer) -> Vec<u8> {
    image
        .pixels
        .iter()
        .flat_map(|color| color.to_array().map(|c| quantize(c).clamp(0, 255) as u8))
        .collect()
}

/// Save the image as an 8-bit RGB PNG file.
pub fn save_png(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<()> {
    image::save_buffer(
        path,
        &to_rgb8(image),
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )?;
    Ok(())
}

/// Save the image, choosing the format from the file extension.
pub fn save(image: &ImageBuffer, path: impl AsRef<Path>) -> RenderResult<OutputFormat> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;

    match format {
        OutputFormat::Ppm => save_ppm(image, path)?,
        OutputFormat::Png => save_png(image, path)?,
    }

    log::info!("Saved {:?} image to {}", format, path.display());
    Ok(format)
}
