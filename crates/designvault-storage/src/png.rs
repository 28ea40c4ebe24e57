//! Base64 PNG payloads and object key naming.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use image::ImageFormat;

use designvault_core::error::{AppError, ErrorKind};
use designvault_core::result::AppResult;

/// Content type stored alongside every snapshot.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Decode a base64 PNG, accepting an optional `data:image/png;base64,`
/// prefix and embedded whitespace.
pub fn decode_base64_png(payload: &str) -> AppResult<Bytes> {
    let trimmed = payload.trim();
    let encoded = match trimmed.split_once(',') {
        Some((header, data)) if header.starts_with("data:") => data,
        _ => trimmed,
    };
    let encoded: String = encoded.split_whitespace().collect();

    if encoded.is_empty() {
        return Err(AppError::validation("PNG payload is empty"));
    }

    let raw = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
        AppError::with_source(ErrorKind::Validation, "PNG payload is not valid base64", e)
    })?;

    match image::guess_format(&raw) {
        Ok(ImageFormat::Png) => Ok(Bytes::from(raw)),
        _ => Err(AppError::validation("Payload is not a PNG image")),
    }
}

/// Object key for the snapshot of `version_number`.
///
/// The timestamp keeps keys unique when a number is reused after a
/// delete and renumber.
pub fn version_object_key(prefix: &str, version_number: i32, at: DateTime<Utc>) -> String {
    let prefix = prefix.trim_matches('/');
    let name = format!("v{version_number}-{}.png", at.timestamp_millis());
    if prefix.is_empty() {
        name
    } else {
        format!("{prefix}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::TimeZone;

    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::new(1, 1);
        let mut cursor = Cursor::new(Vec::new());
        img.write_to(&mut cursor, ImageFormat::Png)
            .expect("encode png");
        cursor.into_inner()
    }

    #[test]
    fn test_decodes_plain_and_data_url() {
        let png = tiny_png();
        let encoded = STANDARD.encode(&png);

        assert_eq!(decode_base64_png(&encoded).unwrap().as_ref(), png.as_slice());

        let data_url = format!("data:image/png;base64,{encoded}");
        assert_eq!(decode_base64_png(&data_url).unwrap().as_ref(), png.as_slice());
    }

    #[test]
    fn test_tolerates_line_breaks() {
        let png = tiny_png();
        let encoded = STANDARD.encode(&png);
        let (a, b) = encoded.split_at(encoded.len() / 2);
        let wrapped = format!("{a}\n{b}\n");

        assert_eq!(decode_base64_png(&wrapped).unwrap().as_ref(), png.as_slice());
    }

    #[test]
    fn test_rejects_bad_payloads() {
        assert!(decode_base64_png("").is_err());
        assert!(decode_base64_png("data:image/png;base64,").is_err());
        assert!(decode_base64_png("not base64 at all!").is_err());

        let jpeg_magic = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0]);
        let err = decode_base64_png(&jpeg_magic).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_object_key() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let millis = at.timestamp_millis();

        assert_eq!(
            version_object_key("design-versions/", 3, at),
            format!("design-versions/v3-{millis}.png")
        );
        assert_eq!(version_object_key("", 3, at), format!("v3-{millis}.png"));
    }
}
