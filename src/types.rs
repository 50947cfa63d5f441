//! Shared types used across docprep.
//! Includes the in-memory `Raster`, its `PixelLayout`, the derived
//! `TargetDimensions`, and the `ResampleFilter` choice.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sample layout of an interleaved raster. 16-bit layouts store each sample
/// as two native-endian bytes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PixelLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
    Gray16,
    GrayAlpha16,
    Rgb16,
    Rgba16,
}

impl PixelLayout {
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Gray | PixelLayout::Gray16 => 1,
            PixelLayout::GrayAlpha | PixelLayout::GrayAlpha16 => 2,
            PixelLayout::Rgb | PixelLayout::Rgb16 => 3,
            PixelLayout::Rgba | PixelLayout::Rgba16 => 4,
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        if self.is_sixteen_bit() { 2 } else { 1 }
    }

    pub fn bytes_per_pixel(self) -> usize {
        self.channels() * self.bytes_per_sample()
    }

    pub fn is_sixteen_bit(self) -> bool {
        matches!(
            self,
            PixelLayout::Gray16
                | PixelLayout::GrayAlpha16
                | PixelLayout::Rgb16
                | PixelLayout::Rgba16
        )
    }

    pub fn pixel_type(self) -> fast_image_resize::PixelType {
        use fast_image_resize::PixelType;
        match self {
            PixelLayout::Gray => PixelType::U8,
            PixelLayout::GrayAlpha => PixelType::U8x2,
            PixelLayout::Rgb => PixelType::U8x3,
            PixelLayout::Rgba => PixelType::U8x4,
            PixelLayout::Gray16 => PixelType::U16,
            PixelLayout::GrayAlpha16 => PixelType::U16x2,
            PixelLayout::Rgb16 => PixelType::U16x3,
            PixelLayout::Rgba16 => PixelType::U16x4,
        }
    }

    pub fn color_type(self) -> image::ColorType {
        match self {
            PixelLayout::Gray => image::ColorType::L8,
            PixelLayout::GrayAlpha => image::ColorType::La8,
            PixelLayout::Rgb => image::ColorType::Rgb8,
            PixelLayout::Rgba => image::ColorType::Rgba8,
            PixelLayout::Gray16 => image::ColorType::L16,
            PixelLayout::GrayAlpha16 => image::ColorType::La16,
            PixelLayout::Rgb16 => image::ColorType::Rgb16,
            PixelLayout::Rgba16 => image::ColorType::Rgba16,
        }
    }
}

impl std::fmt::Display for PixelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PixelLayout::Gray => "Gray",
            PixelLayout::GrayAlpha => "GrayAlpha",
            PixelLayout::Rgb => "Rgb",
            PixelLayout::Rgba => "Rgba",
            PixelLayout::Gray16 => "Gray16",
            PixelLayout::GrayAlpha16 => "GrayAlpha16",
            PixelLayout::Rgb16 => "Rgb16",
            PixelLayout::Rgba16 => "Rgba16",
        };
        write!(f, "{}", s)
    }
}

/// Decoded image held in memory: row-major, interleaved samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
    pub pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, layout: PixelLayout, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.layout.bytes_per_pixel()
    }
}

/// Output size of a proportional resize
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TargetDimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for TargetDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
pub enum ResampleFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn resize_alg(self) -> fast_image_resize::ResizeAlg {
        use fast_image_resize::{FilterType, ResizeAlg};
        match self {
            ResampleFilter::Nearest => ResizeAlg::Nearest,
            ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResampleFilter::CatmullRom => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
            ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "Nearest"),
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Mitchell => write!(f, "Mitchell"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
