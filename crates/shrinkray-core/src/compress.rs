//! Size-constrained JPEG compression.
//!
//! Given a decoded image and a target size in kilobytes, drive the encoded
//! output toward the target by searching over JPEG quality, with a single
//! corrective downscale if quality reduction alone is not enough.
//!
//! The pipeline, in order:
//!
//! 1. Flatten the color mode to plain RGB (JPEG carries no alpha).
//! 2. Cap the longer edge at [`MAX_DIMENSION`] so very large inputs don't
//!    force extreme quality loss to reach small targets.
//! 3. Binary-search quality in `[QUALITY_MIN, QUALITY_MAX]` for the highest
//!    level whose real encoded size fits the target. Every probe is an
//!    actual encode; JPEG size has no usable closed form.
//! 4. Encode at the best quality found. If the result still exceeds the
//!    target, downscale once by `sqrt(target/achieved) * 0.9` and re-encode
//!    at [`FALLBACK_QUALITY`]. The fallback is never iterated; the result is
//!    best-effort and may exceed the target.
//!
//! The whole call is pure and synchronous: no I/O, no shared state, at most
//! twelve encodes per invocation.

use log::debug;
use thiserror::Error;

use crate::decode::{resize, resize_to_fit, DecodeError, FilterType, SourceImage};
use crate::encode::{encode_frame, EncodeError};

/// Longer-edge ceiling applied before the quality search.
pub const MAX_DIMENSION: u32 = 1200;

/// Lowest quality level the search will probe.
pub const QUALITY_MIN: u8 = 10;

/// Highest quality level the search will probe.
pub const QUALITY_MAX: u8 = 95;

/// Hard cap on search iterations. The quality domain spans 86 integers, so
/// the search converges in at most 7 probes; the cap holds independently of
/// convergence.
pub const MAX_SEARCH_ITERATIONS: u32 = 10;

/// Quality used when no probe ever fits the target. Deliberately left at 85
/// rather than the lowest tested quality: the corrective downscale then runs
/// from the 85-quality size, matching the established policy.
pub const DEFAULT_BEST_QUALITY: u8 = 85;

/// Fixed quality for the single fallback re-encode.
pub const FALLBACK_QUALITY: u8 = 75;

/// Shrink multiplier applied on top of the computed fallback scale, biasing
/// toward undershoot since encoded size is non-linear in pixel count.
pub const FALLBACK_SAFETY: f64 = 0.9;

/// Errors from a compression call.
///
/// A result that misses the target is not an error; it is returned as-is
/// with its true size so the caller can report the shortfall.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The target size must be a positive number of kilobytes.
    #[error("Target size must be positive")]
    InvalidTarget,

    /// An internal encode failed; no partial output is returned.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// An internal resize failed; no partial output is returned.
    #[error(transparent)]
    Resize(#[from] DecodeError),
}

/// The outcome of a compression call: the encoded bytes plus the final
/// dimensions and quality they were produced at.
#[derive(Debug, Clone)]
pub struct CompressOutcome {
    /// Width of the encoded image in pixels.
    pub width: u32,
    /// Height of the encoded image in pixels.
    pub height: u32,
    /// JPEG quality the returned bytes were encoded at.
    pub quality: u8,
    /// The complete encoded JPEG.
    pub bytes: Vec<u8>,
}

impl CompressOutcome {
    /// Exact encoded size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Encoded size in kilobytes.
    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }
}

/// Transient state of the quality binary search. Lives only for the
/// duration of one compression call.
struct SearchState {
    low: u8,
    high: u8,
    best_quality: u8,
}

impl SearchState {
    fn new() -> Self {
        Self {
            low: QUALITY_MIN,
            high: QUALITY_MAX,
            best_quality: DEFAULT_BEST_QUALITY,
        }
    }

    /// Next quality to probe, or `None` once the window is exhausted.
    fn next_probe(&self) -> Option<u8> {
        (self.low <= self.high).then_some((self.low + self.high) / 2)
    }

    /// Record a probe result: a fit raises the floor to seek higher
    /// quality, a miss lowers the ceiling to seek smaller output.
    fn record(&mut self, quality: u8, fits: bool) {
        if fits {
            self.best_quality = quality;
            self.low = quality + 1;
        } else {
            self.high = quality - 1;
        }
    }
}

/// Compress `source` toward `target_kb` kilobytes.
///
/// Returns the encoded bytes with their final dimensions and quality. The
/// target is best-effort: when even the fallback downscale cannot reach it,
/// the closest result is returned rather than an error.
///
/// # Errors
///
/// Returns `CompressError::InvalidTarget` for a zero target, or propagates
/// an internal encode/resize failure. For any validly decoded image and
/// positive target this function does not fail.
pub fn compress_to_target(
    source: &SourceImage,
    target_kb: u32,
) -> Result<CompressOutcome, CompressError> {
    if target_kb == 0 {
        return Err(CompressError::InvalidTarget);
    }
    let target_bytes = target_kb as usize * 1024;

    // Mode normalization: alpha and palette sources flatten to plain RGB.
    let mut frame = source.flatten();

    // Pre-scale cap: bound the search space before probing quality.
    if frame.longer_edge() > MAX_DIMENSION {
        frame = resize_to_fit(&frame, MAX_DIMENSION, FilterType::Lanczos3)?;
        debug!(
            "pre-scaled to {}x{} (cap {} px)",
            frame.width, frame.height, MAX_DIMENSION
        );
    }

    let mut state = SearchState::new();
    for _ in 0..MAX_SEARCH_ITERATIONS {
        let Some(quality) = state.next_probe() else {
            break;
        };
        // Each probe is a real encode; the buffer is dropped right after
        // its size is read.
        let probe = encode_frame(&frame, quality)?;
        let fits = probe.len() <= target_bytes;
        debug!(
            "probe quality {} -> {} bytes ({})",
            quality,
            probe.len(),
            if fits { "fits" } else { "over" }
        );
        state.record(quality, fits);
    }

    let quality = state.best_quality;
    let bytes = encode_frame(&frame, quality)?;

    if bytes.len() > target_bytes {
        // Single corrective downscale; never iterated.
        let scale = (target_bytes as f64 / bytes.len() as f64).sqrt() * FALLBACK_SAFETY;
        let new_width = ((frame.width as f64 * scale) as u32).max(1);
        let new_height = ((frame.height as f64 * scale) as u32).max(1);
        debug!(
            "still {} bytes over target, downscaling to {}x{}",
            bytes.len() - target_bytes,
            new_width,
            new_height
        );

        let frame = resize(&frame, new_width, new_height, FilterType::Lanczos3)?;
        let bytes = encode_frame(&frame, FALLBACK_QUALITY)?;
        return Ok(CompressOutcome {
            width: frame.width,
            height: frame.height,
            quality: FALLBACK_QUALITY,
            bytes,
        });
    }

    Ok(CompressOutcome {
        width: frame.width,
        height: frame.height,
        quality,
        bytes,
    })
}
