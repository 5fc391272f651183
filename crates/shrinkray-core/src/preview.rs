//! Inline preview thumbnails.
//!
//! Previews are purely cosmetic, so decode failures degrade to a fixed
//! placeholder graphic instead of propagating an error. The fallback is an
//! explicit [`Preview`] variant rather than a swallowed exception, so
//! callers can still tell the two outcomes apart.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::debug;
use thiserror::Error;

use crate::decode::{decode_image, resize_to_fit, DecodeError, FilterType};
use crate::encode::{encode_frame, EncodeError};

/// Longer-edge bound for preview thumbnails.
pub const PREVIEW_MAX_EDGE: u32 = 300;

/// Fixed JPEG quality for preview thumbnails.
pub const PREVIEW_QUALITY: u8 = 70;

/// Placeholder shown when preview input cannot be decoded.
const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="200" viewBox="0 0 300 200"><rect width="300" height="200" fill="#f0f0f0"/><text x="150" y="100" text-anchor="middle" fill="#666">Preview</text></svg>"##;

/// Why a thumbnail could not be produced. Only surfaced through logging;
/// the public result is the [`Preview::Placeholder`] variant.
#[derive(Debug, Error)]
enum ThumbnailError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A generated preview: either a real thumbnail or the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// JPEG thumbnail bytes, longer edge bounded to [`PREVIEW_MAX_EDGE`].
    Thumbnail(Vec<u8>),
    /// The input could not be decoded; show the placeholder graphic.
    Placeholder,
}

impl Preview {
    /// Render as a self-describing data URI, embeddable directly in an
    /// `img` tag.
    pub fn data_uri(&self) -> String {
        match self {
            Preview::Thumbnail(jpeg) => {
                format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg))
            }
            Preview::Placeholder => format!(
                "data:image/svg+xml;base64,{}",
                STANDARD.encode(PLACEHOLDER_SVG.as_bytes())
            ),
        }
    }

    /// Whether this preview is the fallback placeholder.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder)
    }
}

/// Generate a preview for arbitrary encoded image bytes.
///
/// Undecodable input yields [`Preview::Placeholder`]; this function never
/// fails.
pub fn generate_preview(bytes: &[u8]) -> Preview {
    generate_preview_bounded(bytes, PREVIEW_MAX_EDGE)
}

/// Generate a preview with a caller-chosen longer-edge bound.
pub fn generate_preview_bounded(bytes: &[u8], max_edge: u32) -> Preview {
    match make_thumbnail(bytes, max_edge) {
        Ok(jpeg) => Preview::Thumbnail(jpeg),
        Err(err) => {
            debug!("preview fell back to placeholder: {err}");
            Preview::Placeholder
        }
    }
}

fn make_thumbnail(bytes: &[u8], max_edge: u32) -> Result<Vec<u8>, ThumbnailError> {
    let frame = decode_image(bytes)?.flatten();
    let frame = resize_to_fit(&frame, max_edge, FilterType::Bilinear)?;
    Ok(encode_frame(&frame, PREVIEW_QUALITY)?)
}
