//! Media payload classification and formatting
//!
//! Graphic payloads are opaque encoded blobs: generated media arrives with a
//! `data:` URI header, uploaded images as bare base64. Everything that shows
//! or exports a payload goes through here so preview and download can never
//! disagree about what a payload is.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// What kind of media a payload holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image (the default)
    Image,
    /// Video
    Video,
}

/// Marker carried by video payloads
const VIDEO_MARKER: &str = "data:video";

/// Header prepended to raw video payloads for display
const VIDEO_DISPLAY_PREFIX: &str = "data:video/mp4;base64,";

/// Header prepended to raw image payloads for display
const IMAGE_DISPLAY_PREFIX: &str = "data:image/png;base64,";

/// Classify a stored payload.
///
/// Video iff the payload carries the video marker; everything else,
/// including bare base64 uploads, is an image.
pub fn classify_payload(payload: &str) -> MediaKind {
    if payload.starts_with(VIDEO_MARKER) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Build a displayable reference for a payload.
///
/// Prepends the kind-appropriate data-URI header unless the payload already
/// carries one, so applying this twice yields the same reference as once.
pub fn display_reference(payload: &str) -> String {
    if payload.starts_with("data:") {
        return payload.to_string();
    }
    match classify_payload(payload) {
        MediaKind::Video => format!("{VIDEO_DISPLAY_PREFIX}{payload}"),
        MediaKind::Image => format!("{IMAGE_DISPLAY_PREFIX}{payload}"),
    }
}

/// File extension for exporting a payload of the given kind.
///
/// The same mapping backs preview rendering and download naming; there is
/// no third case.
pub const fn export_extension(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "mp4",
        MediaKind::Image => "png",
    }
}

/// Suggested export file name for a submission's payload
pub fn export_file_name(submission_id: &str, payload: &str) -> String {
    let ext = export_extension(classify_payload(payload));
    format!("claris-{submission_id}.{ext}")
}

/// Decode a payload to raw bytes for export.
///
/// Strips any data-URI header, then base64-decodes the remainder.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let encoded = payload
        .split_once(";base64,")
        .map_or(payload, |(_, rest)| rest);
    BASE64
        .decode(encoded.trim())
        .map_err(|e| Error::Internal(format!("graphic payload is not valid base64: {e}")))
}
