use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};
use crate::io::raster::convert_raster;
use crate::io::writers::eight_bit_counterpart;
use crate::types::{PixelLayout, Raster};

const JPEG_QUALITY: u8 = 100;

/// Alpha is dropped: gray+alpha is written as gray, RGBA as RGB.
/// 16-bit rasters are reduced to 8 bits per sample first.
pub fn write_jpeg(output: &Path, raster: &Raster) -> Result<()> {
    let raster: Cow<'_, Raster> = if raster.layout.is_sixteen_bit() {
        let reduced = convert_raster(raster, eight_bit_counterpart(raster.layout))
            .ok_or_else(|| Error::encode(output, "pixel buffer does not match dimensions"))?;
        Cow::Owned(reduced)
    } else {
        Cow::Borrowed(raster)
    };

    let cols = u16::try_from(raster.width)
        .map_err(|_| Error::encode(output, format!("width {} exceeds JPEG limit", raster.width)))?;
    let rows = u16::try_from(raster.height).map_err(|_| {
        Error::encode(output, format!("height {} exceeds JPEG limit", raster.height))
    })?;

    let (data, color): (Cow<'_, [u8]>, ColorType) = match raster.layout {
        PixelLayout::Gray => (Cow::Borrowed(raster.pixels.as_slice()), ColorType::Luma),
        PixelLayout::GrayAlpha => (
            Cow::Owned(raster.pixels.chunks_exact(2).map(|px| px[0]).collect::<Vec<u8>>()),
            ColorType::Luma,
        ),
        PixelLayout::Rgb => (Cow::Borrowed(raster.pixels.as_slice()), ColorType::Rgb),
        PixelLayout::Rgba => (Cow::Borrowed(raster.pixels.as_slice()), ColorType::Rgba),
        sixteen_bit => {
            return Err(Error::encode(
                output,
                format!("{} was not reduced to 8 bits", sixteen_bit),
            ));
        }
    };

    let file = File::create(output).map_err(|e| Error::encode(output, e))?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder
        .encode(&data, cols, rows, color)
        .map_err(|e| Error::encode(output, e))?;
    writer.flush().map_err(|e| Error::encode(output, e))?;
    Ok(())
}
