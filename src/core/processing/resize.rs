use fast_image_resize::{ResizeOptions, Resizer, images::Image};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::{Raster, ResampleFilter, TargetDimensions};

/// Width is pinned to `max_width`; height is `floor(source_height * max_width / source_width)`.
///
/// The height is truncated rather than rounded, so a 800x601 source at
/// `max_width = 400` becomes 400x300.
pub fn calculate_target_dimensions(
    source_width: u32,
    source_height: u32,
    max_width: u32,
) -> Result<TargetDimensions> {
    if max_width == 0 {
        return Err(Error::ZeroSize { size: max_width });
    }
    if source_width == 0 {
        return Err(Error::ZeroWidth);
    }

    let scale = max_width as f64 / source_width as f64;
    let height = (source_height as f64 * scale).floor() as u32;

    if height == 0 {
        return Err(Error::DegenerateTarget {
            width: max_width,
            height,
        });
    }

    if max_width > source_width {
        warn!(
            "Target width {} is larger than source width {}. Upscaling {}x{}",
            max_width, source_width, source_width, source_height
        );
    }

    Ok(TargetDimensions {
        width: max_width,
        height,
    })
}

pub fn resize_raster(
    source: &Raster,
    target: TargetDimensions,
    filter: ResampleFilter,
) -> Result<Raster> {
    if source.pixels.len() != source.expected_len() {
        return Err(Error::Resize(format!(
            "buffer holds {} bytes, {}x{} {} needs {}",
            source.pixels.len(),
            source.width,
            source.height,
            source.layout,
            source.expected_len()
        )));
    }

    // Already at the requested size
    if source.width == target.width && source.height == target.height {
        info!("Source already {}, skipping resample", target);
        return Ok(source.clone());
    }

    info!(
        "Original size: {}x{}, New size: {} ({})",
        source.width, source.height, target, filter
    );

    let resize_options = ResizeOptions::new().resize_alg(filter.resize_alg());
    let mut resizer = Resizer::new();

    let pixel_type = source.layout.pixel_type();
    let src_image = Image::from_vec_u8(
        source.width,
        source.height,
        source.pixels.clone(),
        pixel_type,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target.width, target.height, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    Ok(Raster::new(
        target.width,
        target.height,
        source.layout,
        dst_image.into_vec(),
    ))
}
