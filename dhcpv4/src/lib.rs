//
// DHCP-RS
//   Copyright (C) 2024-2025, Toshiaki Takada
//

pub mod encode;
pub mod options;
pub mod humanizer;
pub mod relay;
pub mod vivc;

use std::fmt;

use thiserror::Error;

pub use options::Options;
pub use humanizer::OptionHumanizer;
pub use relay::*;
pub use vivc::VivcIdentifier;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DhcpError {
    #[error("Truncated record for code {code}: length {declared} > remaining {remaining}")]
    TruncatedRecord { code: u8, declared: usize, remaining: usize },
    #[error("Missing length byte for code {0}")]
    MissingLengthByte(u8),
    #[error("Value too long for code {code}: {len} > 255")]
    ValueTooLong { code: u8, len: usize },
}

/// DHCP Option Code in the top-level option space.
///   https://www.iana.org/assignments/bootp-dhcp-parameters/bootp-dhcp-parameters.xhtml
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct DhcpOptionCode(pub u8);

impl DhcpOptionCode {
    pub const PAD: DhcpOptionCode = DhcpOptionCode(0);				// RFC2132
    pub const SUBNET_MASK: DhcpOptionCode = DhcpOptionCode(1);			// RFC2132
    pub const TIME_OFFSET: DhcpOptionCode = DhcpOptionCode(2);			// RFC2132
    pub const ROUTER: DhcpOptionCode = DhcpOptionCode(3);			// RFC2132
    pub const DOMAIN_SERVER: DhcpOptionCode = DhcpOptionCode(6);		// RFC2132
    pub const HOST_NAME: DhcpOptionCode = DhcpOptionCode(12);			// RFC2132
    pub const DOMAIN_NAME: DhcpOptionCode = DhcpOptionCode(15);			// RFC2132
    pub const VENDOR_SPECIFIC: DhcpOptionCode = DhcpOptionCode(43);		// RFC2132
    pub const ADDRESS_REQUEST: DhcpOptionCode = DhcpOptionCode(50);		// RFC2132
    pub const ADDRESS_TIME: DhcpOptionCode = DhcpOptionCode(51);		// RFC2132
    pub const DHCP_MSG_TYPE: DhcpOptionCode = DhcpOptionCode(53);		// RFC2132
    pub const DHCP_SERVER_ID: DhcpOptionCode = DhcpOptionCode(54);		// RFC2132
    pub const PARAMETER_LIST: DhcpOptionCode = DhcpOptionCode(55);		// RFC2132
    pub const VENDOR_CLASS_ID: DhcpOptionCode = DhcpOptionCode(60);		// RFC2132
    pub const CLIENT_ID: DhcpOptionCode = DhcpOptionCode(61);			// RFC2132, RFC4361
    pub const TFTP_SERVER_NAME: DhcpOptionCode = DhcpOptionCode(66);		// RFC2132
    pub const BOOTFILE_NAME: DhcpOptionCode = DhcpOptionCode(67);		// RFC2132
    pub const USER_CLASS: DhcpOptionCode = DhcpOptionCode(77);			// RFC3004
    pub const CLIENT_FQDN: DhcpOptionCode = DhcpOptionCode(81);			// RFC4702
    pub const RELAY_AGENT_INFORMATION: DhcpOptionCode = DhcpOptionCode(82);	// RFC3046
    pub const VI_VENDOR_CLASS: DhcpOptionCode = DhcpOptionCode(124);		// RFC3925
    pub const VI_VENDOR_SPECIFIC_INFORMATION: DhcpOptionCode = DhcpOptionCode(125); // RFC3925
    pub const V4_SZTP_REDIRECT: DhcpOptionCode = DhcpOptionCode(143);		// RFC8572
    pub const END: DhcpOptionCode = DhcpOptionCode(255);			// RFC2132

    /// Return u8 value of the code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Return the registered name, if any.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::PAD => "Pad",
            Self::SUBNET_MASK => "Subnet Mask",
            Self::TIME_OFFSET => "Time Offset",
            Self::ROUTER => "Router",
            Self::DOMAIN_SERVER => "Domain Name Server",
            Self::HOST_NAME => "Host Name",
            Self::DOMAIN_NAME => "Domain Name",
            Self::VENDOR_SPECIFIC => "Vendor Specific Information",
            Self::ADDRESS_REQUEST => "Requested IP Address",
            Self::ADDRESS_TIME => "IP Addresses Lease Time",
            Self::DHCP_MSG_TYPE => "DHCP Message Type",
            Self::DHCP_SERVER_ID => "Server Identifier",
            Self::PARAMETER_LIST => "Parameter Request List",
            Self::VENDOR_CLASS_ID => "Class Identifier",
            Self::CLIENT_ID => "Client identifier",
            Self::TFTP_SERVER_NAME => "TFTP Server Name",
            Self::BOOTFILE_NAME => "Bootfile Name",
            Self::USER_CLASS => "User Class Information",
            Self::CLIENT_FQDN => "Client FQDN",
            Self::RELAY_AGENT_INFORMATION => "Relay Agent Information",
            Self::VI_VENDOR_CLASS => "Vendor-Identifying Vendor Class",
            Self::VI_VENDOR_SPECIFIC_INFORMATION => "Vendor-Identifying Vendor-Specific Information",
            Self::V4_SZTP_REDIRECT => "SZTP Redirect",
            Self::END => "End",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for DhcpOptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "unknown ({})", self.0),
        }
    }
}

/// DHCP option, a code and its opaque value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DhcpOption {
    /// Option code, meaning depends on the containing option space.
    pub code: u8,

    /// Raw value.
    pub value: Vec<u8>,
}

impl DhcpOption {
    pub fn new(code: u8, value: &[u8]) -> DhcpOption {
        DhcpOption {
            code,
            value: value.to_vec(),
        }
    }
}
