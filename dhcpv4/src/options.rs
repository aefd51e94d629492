//
// DHCP-RS
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use std::fmt::{self, Write};

use tracing::{debug, trace};

use crate::*;
use crate::encode::*;

/// Ordered collection of DHCP options, code to opaque value.
///
/// Entries keep insertion order so that encoding reproduces the original
/// stream.  A code may appear more than once; lookup returns the last one.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Options {
    entries: Vec<DhcpOption>,
}

impl Options {
    pub fn new() -> Options {
        Options {
            entries: Vec::new(),
        }
    }

    /// Build options from a list, in the given order.
    pub fn from_list<I: IntoIterator<Item = DhcpOption>>(opts: I) -> Options {
        Options {
            entries: opts.into_iter().collect(),
        }
    }

    /// Parse a TLV stream until the buffer is exhausted.
    pub fn from_bytes(buf: &[u8]) -> Result<Options, DhcpError> {
        let mut entries = Vec::new();
        let mut b = buf;

        while let Some(code) = decode_u8(b) {
            let len = match decode_u8(&b[1..]) {
                Some(len) => len as usize,
                None => {
                    debug!(code, "option has no length byte");
                    return Err(DhcpError::MissingLengthByte(code))
                }
            };
            let value = match decode_data(&b[TLV_HLEN..], len) {
                Some(value) => value,
                None => {
                    let remaining = b.len() - TLV_HLEN;
                    debug!(code, len, remaining, "option value truncated");
                    return Err(DhcpError::TruncatedRecord { code, declared: len, remaining })
                }
            };

            trace!(code, len, "decoded option");
            entries.push(DhcpOption::new(code, value));
            b = &b[TLV_HLEN + len..];
        }

        Ok(Options { entries })
    }

    /// Encode all options in stored order.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DhcpError> {
        let mut buf = Vec::new();

        for opt in &self.entries {
            encode_tlv(&mut buf, opt.code, &opt.value)?;
        }

        Ok(buf)
    }

    /// Return the value of the last option stored with the code.
    pub fn get(&self, code: u8) -> Option<&[u8]> {
        self.entries.iter()
            .rev()
            .find(|opt| opt.code == code)
            .map(|opt| opt.value.as_slice())
    }

    /// Return true if an option with the code is present.
    pub fn has(&self, code: u8) -> bool {
        self.entries.iter().any(|opt| opt.code == code)
    }

    /// Append an option.  An earlier option with the same code stays in the
    /// stream but is shadowed for lookup.
    pub fn update(&mut self, opt: DhcpOption) {
        self.entries.push(opt);
    }

    /// Number of stored options, duplicates included.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DhcpOption> {
        self.entries.iter()
    }

    /// Render one line per option with the humanizer.
    pub fn to_string_with(&self, humanizer: &OptionHumanizer) -> String {
        let mut s = String::new();

        for opt in &self.entries {
            let _ = writeln!(s, "    {}", humanizer.stringify(opt.code, &opt.value));
        }

        s
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a DhcpOption;
    type IntoIter = std::slice::Iter<'a, DhcpOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with(&OptionHumanizer::default()))
    }
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_options_from_bytes() {
        let buf = [1, 5, b'l', b'i', b'n', b'u', b'x',
                   2, 4, b'b', b'o', b'o', b't'];
        let res = Options::from_bytes(&buf);
        match res {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(opts) => {
                assert_eq!(opts.count(), 2);
                assert_eq!(opts.get(1), Some(&b"linux"[..]));
                assert_eq!(opts.get(2), Some(&b"boot"[..]));
                assert_eq!(opts.get(3), None);
                assert!(opts.has(1));
                assert!(!opts.has(3));
            }
        }
    }

    #[test]
    pub fn test_options_from_bytes_empty() {
        let res = Options::from_bytes(&[]);
        match res {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(opts) => {
                assert_eq!(opts.count(), 0);
                assert!(opts.is_empty());
            }
        }
    }

    #[test]
    pub fn test_options_from_bytes_truncated() {
        let buf = [1, 7, b'l', b'i', b'n', b'u', b'x'];
        let res = Options::from_bytes(&buf);
        match res {
            Err(e) => assert_eq!(e, DhcpError::TruncatedRecord { code: 1, declared: 7, remaining: 5 }),
            Ok(opts) => assert!(false, "Error: {:?}", opts),
        }

        let buf = [1, 5, b'l', b'i', b'n', b'u', b'x', 2];
        let res = Options::from_bytes(&buf);
        match res {
            Err(e) => assert_eq!(e, DhcpError::MissingLengthByte(2)),
            Ok(opts) => assert!(false, "Error: {:?}", opts),
        }
    }

    #[test]
    pub fn test_options_zero_length() {
        let buf = [80, 0, 12, 1, b'h'];
        let opts = Options::from_bytes(&buf).unwrap();
        assert_eq!(opts.count(), 2);
        assert_eq!(opts.get(80), Some(&[][..]));
        assert_eq!(opts.to_bytes().unwrap(), buf);
    }

    #[test]
    pub fn test_options_duplicate_code() {
        let buf = [1, 1, b'a', 2, 1, b'x', 1, 2, b'b', b'c'];
        let opts = Options::from_bytes(&buf).unwrap();
        assert_eq!(opts.count(), 3);
        assert_eq!(opts.get(1), Some(&b"bc"[..]));

        // The shadowed option is still encoded, in place.
        assert_eq!(opts.to_bytes().unwrap(), buf);
    }

    #[test]
    pub fn test_options_round_trip() {
        let streams: [&[u8]; 4] = [
            &[],
            &[1, 5, b'l', b'i', b'n', b'u', b'x', 2, 4, b'b', b'o', b'o', b't'],
            &[151, 1, 0, 9, 3, 0, 0, 9, 10, 1, 0x80],
            &[2, 4, b'b', b'o', b'o', b't', 1, 5, b'l', b'i', b'n', b'u', b'x'],
        ];

        for buf in streams {
            let opts = Options::from_bytes(buf).unwrap();
            assert_eq!(opts.to_bytes().unwrap(), buf);
        }
    }

    #[test]
    pub fn test_options_round_trip_generated() {
        let lens = [0usize, 1, 2, 127, 254, 255];
        let codes = [0u8, 1, 82, 124, 255, 1];

        for (i, len) in lens.iter().enumerate() {
            let mut buf = Vec::new();
            for (j, code) in codes.iter().enumerate() {
                let len = lens[(i + j) % lens.len()];
                buf.push(*code);
                buf.push(len as u8);
                buf.extend((0..len).map(|n| (n + j) as u8));
            }

            let opts = Options::from_bytes(&buf).unwrap();
            assert_eq!(opts.count(), codes.len());
            assert_eq!(opts.get(codes[0]).map(|v| v.len()), Some(*len));
            assert_eq!(opts.to_bytes().unwrap(), buf);
        }
    }

    #[test]
    pub fn test_options_from_list() {
        let mut opts = Options::from_list(vec![
            DhcpOption::new(2, b"boot"),
            DhcpOption::new(1, b"linux"),
        ]);
        assert_eq!(opts.get(1), Some(&b"linux"[..]));
        assert_eq!(opts.get(2), Some(&b"boot"[..]));
        assert_eq!(opts.to_bytes().unwrap(),
                   [2, 4, b'b', b'o', b'o', b't', 1, 5, b'l', b'i', b'n', b'u', b'x']);

        opts.update(DhcpOption::new(2, b"pxe"));
        assert_eq!(opts.count(), 3);
        assert_eq!(opts.get(2), Some(&b"pxe"[..]));
    }

    #[test]
    pub fn test_options_value_too_long() {
        let opts = Options::from_list(vec![DhcpOption::new(43, &[0u8; 300])]);
        match opts.to_bytes() {
            Err(e) => assert_eq!(e, DhcpError::ValueTooLong { code: 43, len: 300 }),
            Ok(buf) => assert!(false, "Error: {:?}", buf),
        }
    }

    #[test]
    pub fn test_options_string() {
        let opts = Options::from_list(vec![
            DhcpOption::new(12, b"sw1"),
            DhcpOption::new(230, &[1, 2]),
        ]);
        assert_eq!(opts.to_string(),
                   "    Host Name (12): [115 119 49]\n    unknown (230): [1 2]\n");
    }
}
