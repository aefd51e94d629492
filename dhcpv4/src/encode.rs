//
// DHCP-RS
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Encode:
//  Low level utility functions to put/get values into/from byte buffers.
//  All integer values on the wire are network byte order.
//

use std::mem::size_of;

use crate::DhcpError;

/// TLV record header length, code and length.
pub const TLV_HLEN: usize = 2;

/// Maximum value length a single length byte can describe.
pub const TLV_MAX_VALUE_LEN: usize = u8::MAX as usize;

/// Append arbitrary bytes to the buffer.
pub fn encode_data(buf: &mut Vec<u8>, data: &[u8]) -> usize {
    buf.extend_from_slice(data);
    data.len()
}

/// Append u8 value to the buffer.
pub fn encode_u8(buf: &mut Vec<u8>, v: u8) -> usize {
    buf.push(v);
    size_of::<u8>()
}

/// Append u32 value to the buffer.
pub fn encode_u32(buf: &mut Vec<u8>, v: u32) -> usize {
    buf.extend_from_slice(&v.to_be_bytes());
    size_of::<u32>()
}

/// Append a code, length, value record to the buffer.
pub fn encode_tlv(buf: &mut Vec<u8>, code: u8, value: &[u8]) -> Result<usize, DhcpError> {
    if value.len() > TLV_MAX_VALUE_LEN {
        return Err(DhcpError::ValueTooLong { code, len: value.len() })
    }

    let mut len = encode_u8(buf, code);
    len += encode_u8(buf, value.len() as u8);
    len += encode_data(buf, value);

    Ok(len)
}

/// Return u8 value at the head of data.
pub fn decode_u8(data: &[u8]) -> Option<u8> {
    data.first().copied()
}

/// Return u32 value at the head of data.
pub fn decode_u32(data: &[u8]) -> Option<u32> {
    if data.len() < size_of::<u32>() {
        None
    } else {
        Some((data[0] as u32) << 24 | (data[1] as u32) << 16 | (data[2] as u32) << 8 | data[3] as u32)
    }
}

/// Return the first len bytes of data.
pub fn decode_data(data: &[u8], len: usize) -> Option<&[u8]> {
    data.get(..len)
}
