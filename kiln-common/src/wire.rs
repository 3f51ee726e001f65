//! Big-endian wire writers/readers for the model container.
//!
//! The container payload is packed big-endian: u16 vertex indices and f32
//! vertex/keyframe data. Writers append to a `Vec<u8>`; the encoder
//! preallocates the exact container size so no append ever reallocates.

/// Append a u32 in big-endian byte order.
pub fn put_u32_be(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Append a u16 in big-endian byte order.
pub fn put_u16_be(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Append an f32 in big-endian byte order.
pub fn put_f32_be(buf: &mut Vec<u8>, value: f32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Read a big-endian u32 at `offset`.
///
/// Returns `None` if the slice is too short.
pub fn get_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    let slice = bytes.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([slice[0], slice[1], slice[2], slice[3]]))
}

/// Read a big-endian u16 at `offset`.
pub fn get_u16_be(bytes: &[u8], offset: usize) -> Option<u16> {
    let slice = bytes.get(offset..offset + 2)?;
    Some(u16::from_be_bytes([slice[0], slice[1]]))
}

/// Read a big-endian f32 at `offset`.
pub fn get_f32_be(bytes: &[u8], offset: usize) -> Option<f32> {
    let slice = bytes.get(offset..offset + 4)?;
    Some(f32::from_be_bytes([slice[0], slice[1], slice[2], slice[3]]))
}
