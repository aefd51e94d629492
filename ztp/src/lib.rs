//
// DHCP-RS - ZTP
//   Copyright (C) 2024-2025, Toshiaki Takada
//

pub mod config;
pub mod vendor;
pub mod source;

use dhcpv4::DhcpError;
use thiserror::Error;

pub use vendor::*;
pub use source::VendorClassSource;

#[derive(Error, Debug)]
pub enum ZtpError {
    #[error("Empty vendor class")]
    EmptyInput,
    #[error("Unrecognized vendor format {0}")]
    UnrecognizedVendorFormat(String),
    #[error("Malformed vendor fields {0}")]
    MalformedVendorFields(String),
    #[error("DHCP error {0}")]
    Dhcp(#[from] DhcpError),
    #[error("Config error {0}")]
    Config(#[from] serde_json::Error),
}

/// Vendor identity of a bootstrapping device.
///
/// An empty field means the value is not known.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct VendorData {
    pub vendor_name: String,
    pub model: String,
    pub serial: String,
}

impl VendorData {
    pub fn new(vendor_name: &str, model: &str, serial: &str) -> VendorData {
        VendorData {
            vendor_name: vendor_name.to_string(),
            model: model.to_string(),
            serial: serial.to_string(),
        }
    }
}
