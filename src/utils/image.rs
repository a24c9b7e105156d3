//! Base64 image payloads as produced by browser `FileReader.readAsDataURL`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::{AppError, AppResult};

const DATA_URI_SCHEME: &str = "data:";
const IMAGE_MEDIA_PREFIX: &str = "image/";
const BASE64_MARKER: &str = ";base64,";

/// Decodes a raw base64 payload or a `data:image/...;base64,` URI.
pub fn decode_image(payload: &str) -> AppResult<Vec<u8>> {
    let body = strip_data_uri(payload.trim())?.trim();
    if body.is_empty() {
        return Err(AppError::InvalidImage);
    }

    STANDARD.decode(body).map_err(|e| {
        log::debug!("Rejected image payload: {}", e);
        AppError::InvalidImage
    })
}

pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn strip_data_uri(payload: &str) -> AppResult<&str> {
    let Some(rest) = payload.strip_prefix(DATA_URI_SCHEME) else {
        return Ok(payload);
    };

    // A prefix without the base64 marker is a garbled data URI, not raw base64.
    let (media_type, body) = rest.split_once(BASE64_MARKER).ok_or(AppError::InvalidImage)?;
    if !media_type.starts_with(IMAGE_MEDIA_PREFIX) {
        return Err(AppError::InvalidImage);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIXEL: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    #[test]
    fn test_decode_raw_base64() {
        let encoded = encode_image(PIXEL);
        assert_eq!(decode_image(&encoded).unwrap(), PIXEL);
    }

    #[test]
    fn test_decode_strips_data_uri_prefix() {
        let payload = format!("data:image/png;base64,{}", encode_image(PIXEL));
        assert_eq!(decode_image(&payload).unwrap(), PIXEL);
    }

    #[test]
    fn test_reencode_is_byte_identical() {
        let encoded = encode_image(PIXEL);
        let decoded = decode_image(&format!("data:image/jpeg;base64,{}", encoded)).unwrap();
        assert_eq!(encode_image(&decoded), encoded);
        assert_eq!(decode_image(&encode_image(&decoded)).unwrap(), decoded);
    }

    #[test]
    fn test_rejects_malformed_base64() {
        assert!(matches!(decode_image("not base64!!"), Err(AppError::InvalidImage)));
        assert!(matches!(decode_image("abc"), Err(AppError::InvalidImage)));
    }

    #[test]
    fn test_rejects_dangling_prefix() {
        let payload = format!("data:image/png;base64{}", encode_image(PIXEL));
        assert!(matches!(decode_image(&payload), Err(AppError::InvalidImage)));
        assert!(matches!(decode_image("data:image/png;base64,"), Err(AppError::InvalidImage)));
    }

    #[test]
    fn test_rejects_non_image_media_type() {
        let payload = format!("data:text/plain;base64,{}", encode_image(b"hello"));
        assert!(matches!(decode_image(&payload), Err(AppError::InvalidImage)));
    }

    #[test]
    fn test_rejects_empty_payload() {
        assert!(matches!(decode_image("   "), Err(AppError::InvalidImage)));
    }
}
