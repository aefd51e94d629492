//
// DHCP-RS - ZTP
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use dhcpv4::vivc::vivc_from_bytes;
use dhcpv4::{DhcpError, DhcpOptionCode, Options, VivcIdentifier};
use tracing::debug;

/// Access to the DHCP options carrying vendor identity.
pub trait VendorClassSource {
    /// Vendor class identifier (60).
    fn class_identifier(&self) -> Option<String>;

    /// Host name (12).
    fn host_name(&self) -> Option<String>;

    /// Vendor-Identifying Vendor Class (124), empty if absent.
    fn vivc(&self) -> Result<Vec<VivcIdentifier>, DhcpError>;
}

// Invalid UTF-8 is treated as absent.
fn option_string(opts: &Options, code: DhcpOptionCode) -> Option<String> {
    let v = opts.get(code.code())?;
    match std::str::from_utf8(v) {
        Ok(s) => Some(s.to_string()),
        Err(e) => {
            debug!(code = code.code(), "option is not valid UTF-8: {}", e);
            None
        }
    }
}

impl VendorClassSource for Options {
    fn class_identifier(&self) -> Option<String> {
        option_string(self, DhcpOptionCode::VENDOR_CLASS_ID)
    }

    fn host_name(&self) -> Option<String> {
        option_string(self, DhcpOptionCode::HOST_NAME)
    }

    fn vivc(&self) -> Result<Vec<VivcIdentifier>, DhcpError> {
        match self.get(DhcpOptionCode::VI_VENDOR_CLASS.code()) {
            Some(v) => vivc_from_bytes(v),
            None => Ok(Vec::new()),
        }
    }
}
