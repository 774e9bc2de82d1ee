//! Script bytes to self-executing alias payload, and back.
//!
//! The script is zlib-compressed at the best ratio, base64-encoded, and placed
//! inside a fixed template that decodes and executes it in the configured
//! interpreter:
//!
//! ```text
//! '<interp> -c "import base64, zlib; exec(zlib.decompress(base64.b64decode(b'"'"'<B64>'"'"')))"'
//! ```
//!
//! `'"'"'` is how a single quote is written inside a single-quoted shell
//! string. Decoding looks for exactly those delimiters; it does not try to
//! parse shell quoting in general.

use crate::error::{OneLinerError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use std::io::Write;

const OPEN_DELIMITER: &str = "b'\"'\"'";
const CLOSE_DELIMITER: &str = "'\"'\"'";

#[derive(Debug, Clone)]
pub struct Codec {
    interpreter: String,
}

impl Codec {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Builds the quoted payload for `alias <name>=<payload>`.
    pub fn encode(&self, script: &[u8]) -> Result<String> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(script)?;
        let compressed = encoder.finish()?;
        let b64 = STANDARD.encode(compressed);

        Ok(format!(
            "'{} -c \"import base64, zlib; exec(zlib.decompress(base64.b64decode({}{}{})))\"'",
            self.interpreter, OPEN_DELIMITER, b64, CLOSE_DELIMITER
        ))
    }

    /// Recovers the script bytes from a definition line or a bare payload.
    pub fn decode(text: &str) -> Result<Vec<u8>> {
        let start = text
            .find(OPEN_DELIMITER)
            .map(|i| i + OPEN_DELIMITER.len())
            .ok_or_else(|| OneLinerError::MalformedPayload("opening delimiter not found".into()))?;
        let len = text[start..]
            .find(CLOSE_DELIMITER)
            .ok_or_else(|| OneLinerError::MalformedPayload("closing delimiter not found".into()))?;

        let compressed = STANDARD
            .decode(&text[start..start + len])
            .map_err(|e| OneLinerError::MalformedPayload(format!("invalid base64: {}", e)))?;

        inflate(&compressed)
    }
}

/// Inflates a complete zlib stream. A stream that ends early is an error.
fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut script = Vec::with_capacity(compressed.len().max(64) * 4);

    loop {
        if script.len() == script.capacity() {
            script.reserve(script.capacity());
        }
        let (in_before, out_before) = (inflater.total_in(), inflater.total_out());
        let consumed = in_before as usize;
        let status = inflater
            .decompress_vec(&compressed[consumed..], &mut script, FlushDecompress::None)
            .map_err(|e| OneLinerError::MalformedPayload(format!("decompression failed: {}", e)))?;

        if matches!(status, Status::StreamEnd) {
            return Ok(script);
        }
        // Output room is always available here, so no progress means the input ran out.
        if inflater.total_in() == in_before && inflater.total_out() == out_before {
            return Err(OneLinerError::MalformedPayload(
                "compressed stream is truncated".into(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;

    fn roundtrip(script: &[u8]) -> Vec<u8> {
        let payload = Codec::new("python3").encode(script).unwrap();
        Codec::decode(&payload).unwrap()
    }

    #[test]
    fn roundtrips_text_and_binary() {
        assert_eq!(roundtrip(b"print('hi')\n"), b"print('hi')\n");
        assert_eq!(roundtrip(b""), b"");
        let binary: Vec<u8> = (0..=255u8).chain([0, 0, 0]).collect();
        assert_eq!(roundtrip(&binary), binary);
    }

    #[test]
    fn payload_forms_a_valid_definition_line() {
        let payload = Codec::new("/usr/bin/python3").encode(b"x = 1").unwrap();
        let line = format!("alias greet={}", payload);
        let entry = Entry::from_line(&line).expect("generated line must be a definition");
        assert_eq!(entry.payload, payload);
        assert!(payload.starts_with("'/usr/bin/python3 -c \"import base64, zlib;"));
        assert_eq!(Codec::decode(&line).unwrap(), b"x = 1");
    }

    #[test]
    fn encoding_is_deterministic() {
        let codec = Codec::new("python3");
        assert_eq!(
            codec.encode(b"same input").unwrap(),
            codec.encode(b"same input").unwrap()
        );
    }

    #[test]
    fn compresses_repetitive_scripts() {
        let script = "print('hello')\n".repeat(200);
        let payload = Codec::new("python3").encode(script.as_bytes()).unwrap();
        assert!(payload.len() < script.len() / 4);
        assert_eq!(Codec::decode(&payload).unwrap(), script.as_bytes());
    }

    #[test]
    fn roundtrips_large_highly_compressible_scripts() {
        let looped = "for i in range(10):\n    if i % 2:\n        print(i)\n".repeat(30);
        assert_eq!(roundtrip(looped.as_bytes()), looped.as_bytes());

        let big = "x = 'a' * 80  # padding padding padding\n".repeat(2000);
        assert_eq!(roundtrip(big.as_bytes()), big.as_bytes());

        let zeros = vec![0u8; 256 * 1024];
        assert_eq!(roundtrip(&zeros), zeros);
    }

    #[test]
    fn missing_delimiters_are_malformed() {
        let err = Codec::decode("alias x='echo hi'").unwrap_err();
        assert!(matches!(err, OneLinerError::MalformedPayload(_)));

        let err = Codec::decode("alias x='python3 -c \"b'\"'\"'abc").unwrap_err();
        assert!(matches!(err, OneLinerError::MalformedPayload(_)));
    }

    #[test]
    fn invalid_base64_is_malformed() {
        let line = "alias x='python3 -c \"exec(b'\"'\"'***'\"'\"')\"'";
        assert!(matches!(
            Codec::decode(line),
            Err(OneLinerError::MalformedPayload(_))
        ));
    }

    #[test]
    fn truncated_stream_is_malformed() {
        let payload = Codec::new("python3")
            .encode("some longer script body\n".repeat(20).as_bytes())
            .unwrap();
        let start = payload.find(OPEN_DELIMITER).unwrap() + OPEN_DELIMITER.len();
        let end = payload[start..].find(CLOSE_DELIMITER).unwrap() + start;
        let b64 = &payload[start..end];
        let compressed = STANDARD.decode(b64).unwrap();
        let truncated = STANDARD.encode(&compressed[..compressed.len() / 2]);
        let corrupt = format!("{}{}{}", &payload[..start], truncated, &payload[end..]);

        assert!(matches!(
            Codec::decode(&corrupt),
            Err(OneLinerError::MalformedPayload(_))
        ));
    }
}
