//! JPEG encoding at a caller-chosen quality level.
//!
//! This is the probe primitive of the size-constrained search: there is no
//! closed-form estimate of JPEG output size, so every size measurement is a
//! real encode of the current pixel buffer.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::RgbFrame;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match the stated dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed.
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode raw RGB pixel data to JPEG bytes.
///
/// `quality` is the usual 1-100 JPEG quality factor and is clamped to that
/// range. The returned buffer is a complete JPEG file; a failed encode
/// returns an error rather than a partial buffer.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an [`RgbFrame`] to JPEG bytes.
pub fn encode_frame(frame: &RgbFrame, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&frame.pixels, frame.width, frame.height, quality)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any valid buffer and quality encodes to a well-formed JPEG.
        #[test]
        fn prop_valid_input_encodes(
            (width, height) in (1u32..=40, 1u32..=40),
            quality in 1u8..=100,
        ) {
            let pixels = vec![128u8; (width * height * 3) as usize];
            let jpeg = encode_jpeg(&pixels, width, height, quality);
            prop_assert!(jpeg.is_ok());

            let jpeg = jpeg.unwrap();
            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }

        /// Encoding is deterministic for identical inputs.
        #[test]
        fn prop_deterministic(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let pixels = vec![100u8; (width * height * 3) as usize];
            let a = encode_jpeg(&pixels, width, height, quality).unwrap();
            let b = encode_jpeg(&pixels, width, height, quality).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Size-monotonicity sanity: on a textured image, a much lower
        /// quality does not produce a larger file. Tolerated as a codec
        /// quirk if sizes are near-equal, so only a loose bound is checked.
        #[test]
        fn prop_quality_size_sanity(
            (width, height) in (20u32..=40, 20u32..=40),
        ) {
            let size = (width * height * 3) as usize;
            let pixels: Vec<u8> = (0..size).map(|i| ((i * 37) % 256) as u8).collect();

            let low = encode_jpeg(&pixels, width, height, 10).unwrap();
            let high = encode_jpeg(&pixels, width, height, 95).unwrap();

            prop_assert!(
                low.len() <= high.len() + 256,
                "quality 10 produced {} bytes vs {} at 95",
                low.len(),
                high.len()
            );
        }

        /// Mismatched buffer lengths always error.
        #[test]
        fn prop_bad_length_errors(
            (width, height) in (1u32..=30, 1u32..=30),
            delta in 1usize..=16,
        ) {
            let expected = (width * height * 3) as usize;
            let pixels = vec![0u8; expected + delta];
            let result = encode_jpeg(&pixels, width, height, 80);
            let is_bad_len = matches!(result, Err(EncodeError::InvalidPixelData { .. }));
            prop_assert!(is_bad_len, "oversized buffer must report InvalidPixelData");
        }
    }
}
