use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{PixelLayout, Raster};

/// Decode `path` into an 8-bit raster, returning the detected container format.
///
/// A missing or unreadable file is reported as [`Error::Decode`], the same as
/// a corrupt one.
pub fn read_raster(path: &Path) -> Result<(Raster, Option<ImageFormat>)> {
    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| decode_err(e.into()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.into()))?;
    let format = reader.format();
    debug!("Detected format {:?} for {:?}", format, path);

    let decoded = reader.decode().map_err(decode_err)?;
    let raster = raster_from_dynamic(decoded);
    info!(
        "Decoded {:?}: {}x{} {}",
        path, raster.width, raster.height, raster.layout
    );
    Ok((raster, format))
}

/// Gray and RGB layouts, with or without alpha, keep their bit depth.
/// Float rasters become RGBA16.
pub fn raster_from_dynamic(image: DynamicImage) -> Raster {
    let (width, height) = (image.width(), image.height());
    match image {
        DynamicImage::ImageLuma8(buf) => Raster::new(width, height, PixelLayout::Gray, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => {
            Raster::new(width, height, PixelLayout::GrayAlpha, buf.into_raw())
        }
        DynamicImage::ImageRgb8(buf) => Raster::new(width, height, PixelLayout::Rgb, buf.into_raw()),
        DynamicImage::ImageRgba8(buf) => {
            Raster::new(width, height, PixelLayout::Rgba, buf.into_raw())
        }
        DynamicImage::ImageLuma16(buf) => {
            Raster::new(width, height, PixelLayout::Gray16, samples_to_bytes(&buf))
        }
        DynamicImage::ImageLumaA16(buf) => {
            Raster::new(width, height, PixelLayout::GrayAlpha16, samples_to_bytes(&buf))
        }
        DynamicImage::ImageRgb16(buf) => {
            Raster::new(width, height, PixelLayout::Rgb16, samples_to_bytes(&buf))
        }
        DynamicImage::ImageRgba16(buf) => {
            Raster::new(width, height, PixelLayout::Rgba16, samples_to_bytes(&buf))
        }
        other => {
            debug!("Converting {:?} to RGBA16", other.color());
            Raster::new(
                width,
                height,
                PixelLayout::Rgba16,
                samples_to_bytes(&other.to_rgba16()),
            )
        }
    }
}

/// Inverse of [`raster_from_dynamic`]. None when the buffer length does not
/// match the dimensions.
pub fn dynamic_from_raster(raster: &Raster) -> Option<DynamicImage> {
    let (w, h) = (raster.width, raster.height);
    let bytes = raster.pixels.clone();
    let image = match raster.layout {
        PixelLayout::Gray => DynamicImage::ImageLuma8(ImageBuffer::from_raw(w, h, bytes)?),
        PixelLayout::GrayAlpha => DynamicImage::ImageLumaA8(ImageBuffer::from_raw(w, h, bytes)?),
        PixelLayout::Rgb => DynamicImage::ImageRgb8(ImageBuffer::from_raw(w, h, bytes)?),
        PixelLayout::Rgba => DynamicImage::ImageRgba8(ImageBuffer::from_raw(w, h, bytes)?),
        PixelLayout::Gray16 => {
            DynamicImage::ImageLuma16(ImageBuffer::from_raw(w, h, bytes_to_samples(&bytes))?)
        }
        PixelLayout::GrayAlpha16 => {
            DynamicImage::ImageLumaA16(ImageBuffer::from_raw(w, h, bytes_to_samples(&bytes))?)
        }
        PixelLayout::Rgb16 => {
            DynamicImage::ImageRgb16(ImageBuffer::from_raw(w, h, bytes_to_samples(&bytes))?)
        }
        PixelLayout::Rgba16 => {
            DynamicImage::ImageRgba16(ImageBuffer::from_raw(w, h, bytes_to_samples(&bytes))?)
        }
    };
    Some(image)
}

/// Re-encode `raster` into `layout`, converting bit depth and channels as needed.
pub fn convert_raster(raster: &Raster, layout: PixelLayout) -> Option<Raster> {
    if raster.layout == layout {
        return Some(raster.clone());
    }
    let image = dynamic_from_raster(raster)?;
    debug!("Converting {} raster to {}", raster.layout, layout);
    let converted = match layout {
        PixelLayout::Gray => DynamicImage::ImageLuma8(image.to_luma8()),
        PixelLayout::GrayAlpha => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
        PixelLayout::Rgb => DynamicImage::ImageRgb8(image.to_rgb8()),
        PixelLayout::Rgba => DynamicImage::ImageRgba8(image.to_rgba8()),
        PixelLayout::Gray16 => DynamicImage::ImageLuma16(image.to_luma16()),
        PixelLayout::GrayAlpha16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
        PixelLayout::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
        PixelLayout::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
    };
    Some(raster_from_dynamic(converted))
}

fn samples_to_bytes(samples: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for &v in samples {
        out.extend_from_slice(&v.to_ne_bytes());
    }
    out
}

fn bytes_to_samples(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|b| u16::from_ne_bytes([b[0], b[1]]))
        .collect()
}
