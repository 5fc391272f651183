//! Core types for image decoding and color-mode normalization.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not recognized as a supported image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is recognized but corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A resize operation was given impossible dimensions.
    #[error("Invalid resize dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Color mode of a decoded source image.
///
/// Palette-indexed sources (GIF, indexed PNG) are expanded by the decoder
/// before we ever see them, so they surface here as `Rgb` or `Rgba`
/// depending on whether the palette carried transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Plain three-channel color.
    Rgb,
    /// Color with an alpha channel.
    Rgba,
    /// Single-channel grayscale.
    Luma,
    /// Grayscale with an alpha channel.
    LumaAlpha,
    /// Anything else (high bit depth, float, future formats).
    Other,
}

impl ColorMode {
    /// Derive the mode tag from the image crate's color type.
    pub fn from_color_type(color: image::ColorType) -> Self {
        match color {
            image::ColorType::Rgb8 | image::ColorType::Rgb16 | image::ColorType::Rgb32F => {
                ColorMode::Rgb
            }
            image::ColorType::Rgba8 | image::ColorType::Rgba16 | image::ColorType::Rgba32F => {
                ColorMode::Rgba
            }
            image::ColorType::L8 | image::ColorType::L16 => ColorMode::Luma,
            image::ColorType::La8 | image::ColorType::La16 => ColorMode::LumaAlpha,
            _ => ColorMode::Other,
        }
    }

    /// Whether this mode carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::Rgba | ColorMode::LumaAlpha)
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if this orientation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded raster image, as handed over by the decoder.
///
/// Keeps the original color representation alongside its mode tag so that
/// flattening to RGB is an explicit, visible step rather than something
/// that happens silently at decode time. The wrapped image is never
/// mutated; `flatten` derives a new buffer.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
    color: ColorMode,
}

impl SourceImage {
    /// Wrap a decoded image, deriving its color-mode tag.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let color = ColorMode::from_color_type(image.color());
        Self { image, color }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color mode of the source, as decoded.
    pub fn color(&self) -> ColorMode {
        self.color
    }

    /// Flatten to plain three-channel RGB.
    ///
    /// This is the mode-normalization step of the compression pipeline:
    /// the JPEG output cannot represent alpha, so any alpha channel is
    /// discarded here. Lossy and irreversible.
    pub fn flatten(&self) -> RgbFrame {
        RgbFrame::from_rgb_image(self.image.to_rgb8())
    }
}

/// An RGB pixel frame, the working representation for resize and encode.
#[derive(Debug, Clone)]
pub struct RgbFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl RgbFrame {
    /// Create a frame from dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Take ownership of an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbImage` for resampling.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Length of the longer edge in pixels.
    pub fn longer_edge(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_color_mode_from_color_type() {
        assert_eq!(
            ColorMode::from_color_type(image::ColorType::Rgb8),
            ColorMode::Rgb
        );
        assert_eq!(
            ColorMode::from_color_type(image::ColorType::Rgba8),
            ColorMode::Rgba
        );
        assert_eq!(
            ColorMode::from_color_type(image::ColorType::L8),
            ColorMode::Luma
        );
        assert_eq!(
            ColorMode::from_color_type(image::ColorType::La8),
            ColorMode::LumaAlpha
        );
    }

    #[test]
    fn test_color_mode_has_alpha() {
        assert!(ColorMode::Rgba.has_alpha());
        assert!(ColorMode::LumaAlpha.has_alpha());
        assert!(!ColorMode::Rgb.has_alpha());
        assert!(!ColorMode::Luma.has_alpha());
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        assert!(!Orientation::Normal.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(Orientation::Rotate90CW.swaps_dimensions());
        assert!(Orientation::Rotate270CW.swaps_dimensions());
    }

    #[test]
    fn test_source_image_rgba_tag_and_flatten() {
        let rgba = image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 128]));
        let source = SourceImage::from_dynamic(DynamicImage::ImageRgba8(rgba));

        assert_eq!(source.color(), ColorMode::Rgba);
        assert!(source.color().has_alpha());

        let frame = source.flatten();
        assert_eq!(frame.width, 4);
        assert_eq!(frame.height, 2);
        assert_eq!(frame.byte_size(), 4 * 2 * 3);
        // Alpha is discarded, RGB channels survive as-is
        assert_eq!(&frame.pixels[0..3], &[10, 20, 30]);
    }

    #[test]
    fn test_source_image_grayscale_flatten() {
        let luma = image::GrayImage::from_pixel(3, 3, image::Luma([77]));
        let source = SourceImage::from_dynamic(DynamicImage::ImageLuma8(luma));

        assert_eq!(source.color(), ColorMode::Luma);

        let frame = source.flatten();
        assert_eq!(&frame.pixels[0..3], &[77, 77, 77]);
    }

    #[test]
    fn test_rgb_frame_roundtrip() {
        let pixels = vec![128u8; 6 * 4 * 3];
        let frame = RgbFrame::new(6, 4, pixels);

        assert_eq!(frame.longer_edge(), 6);
        assert_eq!(frame.byte_size(), 72);

        let img = frame.to_rgb_image().unwrap();
        let back = RgbFrame::from_rgb_image(img);
        assert_eq!(back.width, 6);
        assert_eq!(back.height, 4);
        assert_eq!(back.pixels, frame.pixels);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");

        let err = DecodeError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Invalid resize dimensions: 0x10");
    }
}
