//! Payload encoding for compressed fragments

use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use flate2::{Compression, write::GzEncoder};

use super::errors::InjectError;

/// Gzip-compresses and base64-encodes raw bytes into a single-line payload.
///
/// The payload uses the standard alphabet without line wrapping, so it is
/// safe inside a shell `echo` argument. Decoding with `base64 -d | gunzip`
/// at container runtime reproduces the input bytes exactly.
///
/// # Errors
///
/// Returns [`InjectError::Encoding`] if the gzip stream cannot be written,
/// which is not expected for well-formed input.
pub fn compress_and_encode(path: &str, data: &[u8]) -> Result<String, InjectError> {
    let encoding_err = |e: std::io::Error| InjectError::Encoding {
        path: path.to_string(),
        reason: e.to_string(),
    };

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(encoding_err)?;
    let compressed = encoder.finish().map_err(encoding_err)?;

    Ok(BASE64_STANDARD.encode(compressed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use pretty_assertions::assert_eq;
    use std::io::Read;

    fn decode_round_trip(payload: &str) -> Vec<u8> {
        let compressed = BASE64_STANDARD.decode(payload).unwrap();
        let mut decoder = GzDecoder::new(compressed.as_slice());
        let mut bytes = Vec::new();
        decoder.read_to_end(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_round_trip_text() {
        let payload = compress_and_encode("/tmp/test.txt", b"hello\n").unwrap();
        assert_eq!(decode_round_trip(&payload), b"hello\n".to_vec());
    }

    #[test]
    fn test_round_trip_empty() {
        let payload = compress_and_encode("/tmp/empty", b"").unwrap();
        assert_eq!(decode_round_trip(&payload), Vec::<u8>::new());
    }

    #[test]
    fn test_round_trip_binary() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let payload = compress_and_encode("/tmp/blob.bin", &data).unwrap();
        assert_eq!(decode_round_trip(&payload), data);
    }

    #[test]
    fn test_payload_is_single_line() {
        let data = vec![b'x'; 10_000];
        let payload = compress_and_encode("/tmp/big", &data).unwrap();
        assert!(!payload.contains('\n'));
        assert!(!payload.contains(char::is_whitespace));
    }
}
