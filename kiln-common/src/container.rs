//! Kiln model container (.kmodel)
//!
//! Single-file binary asset consumed by the runtime engine.
//! No magic bytes - the format starts directly with the header-length prefix.
//!
//! # Layout
//! ```text
//! 0x00: header_length u32 (big-endian)
//! 0x04: header (UTF-8 JSON object, exactly header_length bytes)
//! var:  binary payload, only present when the file carries binary data:
//!       per geometry segment: indices (u16 BE) then vertices (f32 BE),
//!       then per animation name, in order: keyframe samples (f32 BE)
//! ```
//!
//! Payload offsets are not stored; loaders reconstruct them cumulatively
//! from the counts in the header.

use crate::wire::get_u32_be;

/// File extension for model container files.
pub const MODEL_EXTENSION: &str = "kmodel";

/// Size of the header-length prefix in bytes.
pub const HEADER_PREFIX_SIZE: usize = 4;

/// Hard format ceiling for vertex indices: the payload stores u16 indices.
pub const MAX_VERTEX_INDEX: u32 = u16::MAX as u32;

/// A parsed model container.
///
/// Used by tests and runtime loaders to read back what the encoder wrote.
#[derive(Debug, Clone)]
pub struct ModelFile {
    /// Byte length of the JSON header as recorded in the prefix.
    pub header_length: u32,
    /// The metadata header.
    pub header: serde_json::Value,
    /// Raw binary payload following the header (empty for header-only files).
    pub payload: Vec<u8>,
}

impl ModelFile {
    /// Parse a container from bytes.
    ///
    /// Returns `None` if the prefix is truncated, the header overruns the
    /// file, or the header is not valid JSON.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let header_length = get_u32_be(bytes, 0)?;
        let header_end = HEADER_PREFIX_SIZE.checked_add(header_length as usize)?;
        let header_bytes = bytes.get(HEADER_PREFIX_SIZE..header_end)?;
        let header = serde_json::from_slice(header_bytes).ok()?;
        Some(Self {
            header_length,
            header,
            payload: bytes[header_end..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::put_u32_be;

    fn container_bytes(header: &str, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        put_u32_be(&mut bytes, header.len() as u32);
        bytes.extend_from_slice(header.as_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_parse_header_and_payload() {
        let bytes = container_bytes("{\"lights\":[]}", &[1, 2, 3, 4]);
        let model = ModelFile::from_bytes(&bytes).expect("should parse");
        assert_eq!(model.header_length, 13);
        assert!(model.header.get("lights").is_some());
        assert_eq!(model.payload, [1, 2, 3, 4]);
    }

    #[test]
    fn test_header_only_file() {
        let bytes = container_bytes("{}", &[]);
        let model = ModelFile::from_bytes(&bytes).expect("should parse");
        assert!(model.payload.is_empty());
    }

    #[test]
    fn test_truncated_prefix_rejected() {
        assert!(ModelFile::from_bytes(&[0, 0]).is_none());
    }

    #[test]
    fn test_header_overrun_rejected() {
        // Prefix claims 100 header bytes but only 2 follow.
        let mut bytes = Vec::new();
        put_u32_be(&mut bytes, 100);
        bytes.extend_from_slice(b"{}");
        assert!(ModelFile::from_bytes(&bytes).is_none());
    }

    #[test]
    fn test_non_json_header_rejected() {
        let bytes = container_bytes("not json", &[]);
        assert!(ModelFile::from_bytes(&bytes).is_none());
    }
}
