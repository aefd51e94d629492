//
// DHCP-RS
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Vendor-Identifying Vendor Class Option (124).
//   RFC 3925
//

use std::mem::size_of;

use tracing::debug;

use crate::*;
use crate::encode::*;

/// Enterprise number and data length header.
const VIVC_HLEN: usize = size_of::<u32>() + size_of::<u8>();

/// One vendor class entry tagged with an IANA enterprise number.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VivcIdentifier {
    pub ent_id: u32,
    pub data: Vec<u8>,
}

impl VivcIdentifier {
    pub fn new(ent_id: u32, data: &[u8]) -> VivcIdentifier {
        VivcIdentifier {
            ent_id,
            data: data.to_vec(),
        }
    }
}

/// Parse VIVC option value.  Every byte must belong to an entry.
pub fn vivc_from_bytes(buf: &[u8]) -> Result<Vec<VivcIdentifier>, DhcpError> {
    let mut ids = Vec::new();
    let mut b = buf;

    while b.len() >= VIVC_HLEN {
        let ent_id = decode_u32(b).unwrap_or_default();
        let len = decode_u8(&b[size_of::<u32>()..]).unwrap_or_default() as usize;
        let data = match decode_data(&b[VIVC_HLEN..], len) {
            Some(data) => data,
            None => {
                let remaining = b.len() - VIVC_HLEN;
                debug!(ent_id, len, remaining, "VIVC data truncated");
                return Err(DhcpError::TruncatedRecord {
                    code: DhcpOptionCode::VI_VENDOR_CLASS.0,
                    declared: len,
                    remaining,
                })
            }
        };

        ids.push(VivcIdentifier::new(ent_id, data));
        b = &b[VIVC_HLEN + len..];
    }

    if !b.is_empty() {
        debug!(remaining = b.len(), "VIVC entry header truncated");
        return Err(DhcpError::TruncatedRecord {
            code: DhcpOptionCode::VI_VENDOR_CLASS.0,
            declared: VIVC_HLEN,
            remaining: b.len(),
        })
    }

    Ok(ids)
}

/// Encode VIVC entries into an option value.
pub fn vivc_to_bytes(ids: &[VivcIdentifier]) -> Result<Vec<u8>, DhcpError> {
    let mut buf = Vec::new();

    for id in ids {
        if id.data.len() > TLV_MAX_VALUE_LEN {
            return Err(DhcpError::ValueTooLong {
                code: DhcpOptionCode::VI_VENDOR_CLASS.0,
                len: id.data.len(),
            })
        }
        encode_u32(&mut buf, id.ent_id);
        encode_u8(&mut buf, id.data.len() as u8);
        encode_data(&mut buf, &id.data);
    }

    Ok(buf)
}
