//! Encoders for resized rasters. JPEG goes through `jpeg-encoder` at full
//! quality; every other format is handed to `image`.
pub mod jpeg;

use std::borrow::Cow;
use std::path::Path;

use image::ImageFormat;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::io::raster::convert_raster;
use crate::types::{PixelLayout, Raster};

/// Encode `raster` to `output`, choosing the format from the output extension
/// and falling back to `fallback` (usually the source format) when the
/// extension is not recognised.
pub fn write_raster(output: &Path, raster: &Raster, fallback: Option<ImageFormat>) -> Result<()> {
    let format = match ImageFormat::from_path(output) {
        Ok(format) => format,
        Err(_) => fallback.ok_or_else(|| Error::InvalidArgument {
            arg: "output",
            value: output.display().to_string(),
        })?,
    };

    match format {
        ImageFormat::Jpeg => jpeg::write_jpeg(output, raster)?,
        other => {
            let encodable = encodable_raster(output, raster, other)?;
            image::save_buffer_with_format(
                output,
                &encodable.pixels,
                encodable.width,
                encodable.height,
                encodable.layout.color_type(),
                other,
            )
            .map_err(|e| Error::encode(output, e))?
        }
    }

    info!(
        "Wrote {:?} ({}x{}, {:?})",
        output, raster.width, raster.height, format
    );
    Ok(())
}

/// Layout the `image` encoder for `format` accepts, when it differs from `layout`.
pub fn encoder_layout(layout: PixelLayout, format: ImageFormat) -> Option<PixelLayout> {
    match (format, layout) {
        (ImageFormat::Gif, PixelLayout::Rgba) => None,
        (ImageFormat::Gif, _) => Some(PixelLayout::Rgba),
        (ImageFormat::Bmp | ImageFormat::WebP, l) if l.is_sixteen_bit() => {
            Some(eight_bit_counterpart(l))
        }
        (ImageFormat::Tiff, PixelLayout::GrayAlpha) => Some(PixelLayout::Rgba),
        (ImageFormat::Tiff, PixelLayout::GrayAlpha16) => Some(PixelLayout::Rgba16),
        _ => None,
    }
}

pub fn eight_bit_counterpart(layout: PixelLayout) -> PixelLayout {
    match layout {
        PixelLayout::Gray16 => PixelLayout::Gray,
        PixelLayout::GrayAlpha16 => PixelLayout::GrayAlpha,
        PixelLayout::Rgb16 => PixelLayout::Rgb,
        PixelLayout::Rgba16 => PixelLayout::Rgba,
        eight_bit => eight_bit,
    }
}

fn encodable_raster<'a>(
    output: &Path,
    raster: &'a Raster,
    format: ImageFormat,
) -> Result<Cow<'a, Raster>> {
    match encoder_layout(raster.layout, format) {
        None => Ok(Cow::Borrowed(raster)),
        Some(layout) => {
            warn!(
                "{:?} cannot store {} pixels; writing {} instead",
                format, raster.layout, layout
            );
            convert_raster(raster, layout)
                .map(Cow::Owned)
                .ok_or_else(|| Error::encode(output, "pixel buffer does not match dimensions"))
        }
    }
}
