//! Aspect-preserving resize operations on RGB frames.
//!
//! All functions return new `RgbFrame` instances; the input is never
//! modified.

use super::{DecodeError, FilterType, RgbFrame};

/// Resize a frame to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target dimension is
/// zero, or `DecodeError::CorruptedFile` if the pixel buffer is inconsistent
/// with the frame dimensions.
pub fn resize(
    frame: &RgbFrame,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbFrame, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: nothing to do
    if frame.width == width && frame.height == height {
        return Ok(frame.clone());
    }

    let rgb_image = frame
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Inconsistent pixel buffer".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(RgbFrame::from_rgb_image(resized))
}

/// Resize a frame so its longer edge fits within `max_edge`, preserving
/// aspect ratio. Frames that already fit are returned unchanged; this
/// function never upscales.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if `max_edge` is zero.
pub fn resize_to_fit(
    frame: &RgbFrame,
    max_edge: u32,
    filter: FilterType,
) -> Result<RgbFrame, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: max_edge,
            height: max_edge,
        });
    }

    if frame.width <= max_edge && frame.height <= max_edge {
        return Ok(frame.clone());
    }

    let (new_width, new_height) = fit_dimensions(frame.width, frame.height, max_edge);
    resize(frame, new_width, new_height, filter)
}

/// Compute the dimensions that fit within `max_edge` while preserving the
/// original aspect ratio. The longer edge lands exactly on `max_edge`; the
/// shorter edge is rounded and clamped to at least 1 px.
pub(crate) fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
