//! Request validation and result packaging for the hosting layer.
//!
//! The compressor itself only hands back dimensions and bytes; everything a
//! user-facing host needs on top of that lives here: upload/target limits,
//! the size/ratio summary, and a download filename.

use std::ffi::OsStr;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::compress::CompressOutcome;

/// Maximum accepted upload size.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted target range in kilobytes.
pub const TARGET_KB_RANGE: RangeInclusive<u32> = 5..=200;

/// Maximum length of the original filename stem carried into the download
/// filename.
const FILENAME_STEM_MAX: usize = 20;

/// Rejection reasons for an incoming compression request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// No upload data at all.
    #[error("No image data provided")]
    EmptyUpload,

    /// The upload exceeds [`MAX_UPLOAD_BYTES`].
    #[error("Upload of {actual} bytes exceeds the {limit} byte limit")]
    UploadTooLarge { actual: usize, limit: usize },

    /// The requested target is outside [`TARGET_KB_RANGE`].
    #[error("Target of {0} KB is outside the accepted 5-200 KB range")]
    TargetOutOfRange(u32),
}

/// Validate an incoming request before any decoding happens.
pub fn validate_request(data_len: usize, target_kb: u32) -> Result<(), RequestError> {
    if data_len == 0 {
        return Err(RequestError::EmptyUpload);
    }
    if data_len > MAX_UPLOAD_BYTES {
        return Err(RequestError::UploadTooLarge {
            actual: data_len,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    if !TARGET_KB_RANGE.contains(&target_kb) {
        return Err(RequestError::TargetOutOfRange(target_kb));
    }
    Ok(())
}

/// Summary of a completed compression, ready for serialization to whatever
/// transport the host uses.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionReport {
    /// Original upload size in KB, rounded to one decimal.
    pub original_size_kb: f64,
    /// Achieved size in KB, rounded to one decimal.
    pub compressed_size_kb: f64,
    /// Original dimensions as `WxH`.
    pub original_dimensions: String,
    /// Final dimensions as `WxH`.
    pub compressed_dimensions: String,
    /// `original / compressed` size ratio, rounded to one decimal.
    pub compression_ratio: f64,
    /// Suggested download filename.
    pub filename: String,
}

/// Build a report from the original upload and the compression outcome.
pub fn build_report(
    original_name: &str,
    original_len: usize,
    original_dimensions: (u32, u32),
    outcome: &CompressOutcome,
) -> CompressionReport {
    let original_kb = original_len as f64 / 1024.0;
    let compressed_kb = outcome.size_kb();

    CompressionReport {
        original_size_kb: round1(original_kb),
        compressed_size_kb: round1(compressed_kb),
        original_dimensions: format!("{}x{}", original_dimensions.0, original_dimensions.1),
        compressed_dimensions: format!("{}x{}", outcome.width, outcome.height),
        compression_ratio: round1(original_kb / compressed_kb),
        filename: download_filename(original_name),
    }
}

/// Build a download filename: `compressed_<stem>_<suffix>.jpg`, with the
/// original stem truncated and a random suffix to avoid collisions.
pub fn download_filename(original_name: &str) -> String {
    let stem = Path::new(original_name)
        .file_stem()
        .and_then(OsStr::to_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    let stem: String = stem.chars().take(FILENAME_STEM_MAX).collect();

    let uuid = Uuid::new_v4().simple().to_string();
    format!("compressed_{}_{}.jpg", stem, &uuid[..8])
}

/// Render the compressed bytes as a `data:image/jpeg` URI for direct
/// download links, so the host needs no file storage at all.
pub fn download_data_uri(outcome: &CompressOutcome) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    format!("data:image/jpeg;base64,{}", STANDARD.encode(&outcome.bytes))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(width: u32, height: u32, len: usize) -> CompressOutcome {
        CompressOutcome {
            width,
            height,
            quality: 80,
            bytes: vec![0u8; len],
        }
    }

    #[test]
    fn test_validate_accepts_in_range_request() {
        assert!(validate_request(1024, 5).is_ok());
        assert!(validate_request(1024, 200).is_ok());
        assert!(validate_request(MAX_UPLOAD_BYTES, 15).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_upload() {
        assert_eq!(validate_request(0, 15), Err(RequestError::EmptyUpload));
    }

    #[test]
    fn test_validate_rejects_oversized_upload() {
        let result = validate_request(MAX_UPLOAD_BYTES + 1, 15);
        assert!(matches!(result, Err(RequestError::UploadTooLarge { .. })));
    }

    #[test]
    fn test_validate_rejects_out_of_range_target() {
        assert_eq!(
            validate_request(1024, 4),
            Err(RequestError::TargetOutOfRange(4))
        );
        assert_eq!(
            validate_request(1024, 201),
            Err(RequestError::TargetOutOfRange(201))
        );
    }

    #[test]
    fn test_report_sizes_and_ratio() {
        // 150 KB original down to 15 KB: ratio 10.0
        let report = build_report(
            "photo.png",
            150 * 1024,
            (2000, 1500),
            &outcome(1200, 900, 15 * 1024),
        );

        assert_eq!(report.original_size_kb, 150.0);
        assert_eq!(report.compressed_size_kb, 15.0);
        assert_eq!(report.original_dimensions, "2000x1500");
        assert_eq!(report.compressed_dimensions, "1200x900");
        assert_eq!(report.compression_ratio, 10.0);
    }

    #[test]
    fn test_report_rounds_to_one_decimal() {
        let report = build_report("a.jpg", 100_000, (10, 10), &outcome(10, 10, 33_333));
        // 97.65625 KB and 32.5517... KB
        assert_eq!(report.original_size_kb, 97.7);
        assert_eq!(report.compressed_size_kb, 32.6);
        assert_eq!(report.compression_ratio, 3.0);
    }

    #[test]
    fn test_download_filename_shape() {
        let name = download_filename("holiday.png");
        assert!(name.starts_with("compressed_holiday_"));
        assert!(name.ends_with(".jpg"));

        let suffix = name
            .trim_start_matches("compressed_holiday_")
            .trim_end_matches(".jpg");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_download_filename_truncates_long_stems() {
        let name = download_filename("a_very_long_original_upload_name_indeed.jpeg");
        let stem = name
            .trim_start_matches("compressed_")
            .rsplit_once('_')
            .unwrap()
            .0
            .to_string();
        assert_eq!(stem.chars().count(), 20);
    }

    #[test]
    fn test_download_filename_handles_missing_stem() {
        let name = download_filename("");
        assert!(name.starts_with("compressed_image_"));
    }

    #[test]
    fn test_download_filenames_are_unique() {
        assert_ne!(download_filename("x.png"), download_filename("x.png"));
    }

    #[test]
    fn test_download_data_uri_prefix() {
        let uri = download_data_uri(&outcome(10, 10, 64));
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }
}
