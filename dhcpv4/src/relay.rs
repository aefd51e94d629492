//
// DHCP-RS
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Relay Agent Information Option (82) and its sub-options.
//   RFC 3046 and the RFCs registering sub-option codes.
//

use std::fmt;
use std::ops::Deref;

use tracing::debug;

use crate::*;
use crate::humanizer::generic_value;

/// Relay Agent Information sub-option code.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct RaiSubOptionCode(pub u8);

impl RaiSubOptionCode {
    pub const AGENT_CIRCUIT_ID: RaiSubOptionCode = RaiSubOptionCode(1);			// RFC3046
    pub const AGENT_REMOTE_ID: RaiSubOptionCode = RaiSubOptionCode(2);			// RFC3046
    pub const DOCSIS_DEVICE_CLASS: RaiSubOptionCode = RaiSubOptionCode(4);		// RFC3256
    pub const LINK_SELECTION: RaiSubOptionCode = RaiSubOptionCode(5);			// RFC3527
    pub const SUBSCRIBER_ID: RaiSubOptionCode = RaiSubOptionCode(6);			// RFC3993
    pub const RADIUS_ATTRIBUTES: RaiSubOptionCode = RaiSubOptionCode(7);		// RFC4014
    pub const AUTHENTICATION: RaiSubOptionCode = RaiSubOptionCode(8);			// RFC4030
    pub const VENDOR_SPECIFIC_INFORMATION: RaiSubOptionCode = RaiSubOptionCode(9);	// RFC4243
    pub const RELAY_AGENT_FLAGS: RaiSubOptionCode = RaiSubOptionCode(10);		// RFC5010
    pub const SERVER_IDENTIFIER_OVERRIDE: RaiSubOptionCode = RaiSubOptionCode(11);	// RFC5107
    pub const VIRTUAL_SUBNET_SELECTION: RaiSubOptionCode = RaiSubOptionCode(151);	// RFC6607
    pub const VIRTUAL_SUBNET_SELECTION_CONTROL: RaiSubOptionCode = RaiSubOptionCode(152); // RFC6607

    /// Return u8 value of the code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Return the registered name, if any.
    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Self::AGENT_CIRCUIT_ID => "Agent Circuit ID",
            Self::AGENT_REMOTE_ID => "Agent Remote ID",
            Self::DOCSIS_DEVICE_CLASS => "DOCSIS Device Class",
            Self::LINK_SELECTION => "Link Selection",
            Self::SUBSCRIBER_ID => "Subscriber ID",
            Self::RADIUS_ATTRIBUTES => "RADIUS Attributes",
            Self::AUTHENTICATION => "Authentication",
            Self::VENDOR_SPECIFIC_INFORMATION => "Vendor Specific Information",
            Self::RELAY_AGENT_FLAGS => "Relay Agent Flags",
            Self::SERVER_IDENTIFIER_OVERRIDE => "Server Identifier Override",
            Self::VIRTUAL_SUBNET_SELECTION => "Virtual Subnet Selection",
            Self::VIRTUAL_SUBNET_SELECTION_CONTROL => "Virtual Subnet Selection Control",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for RaiSubOptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "unknown ({})", self.0),
        }
    }
}

fn rai_code_string(code: u8) -> String {
    RaiSubOptionCode(code).to_string()
}

fn rai_value_string(_code: u8, value: &[u8]) -> String {
    generic_value(value)
}

/// Humanizer for the Relay Agent Information sub-option space.
pub const RELAY_HUMANIZER: OptionHumanizer = OptionHumanizer {
    code_humanizer: rai_code_string,
    value_humanizer: rai_value_string,
};

/// Options in the Relay Agent Information sub-option space.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RelayOptions {
    pub options: Options,
}

impl RelayOptions {
    pub fn from_list<I: IntoIterator<Item = DhcpOption>>(opts: I) -> RelayOptions {
        RelayOptions {
            options: Options::from_list(opts),
        }
    }

    /// Parse sub-options from the value of a Relay Agent Information option.
    pub fn from_bytes(buf: &[u8]) -> Result<RelayOptions, DhcpError> {
        Ok(RelayOptions {
            options: Options::from_bytes(buf)?,
        })
    }

    /// Return the value of a sub-option.
    pub fn get(&self, code: RaiSubOptionCode) -> Option<&[u8]> {
        self.options.get(code.0)
    }
}

impl Deref for RelayOptions {
    type Target = Options;

    fn deref(&self) -> &Options {
        &self.options
    }
}

impl fmt::Display for RelayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.options.to_string_with(&RELAY_HUMANIZER))
    }
}

/// Build a Relay Agent Information option from sub-options.
pub fn opt_relay_agent_info<I: IntoIterator<Item = DhcpOption>>(opts: I) -> Result<DhcpOption, DhcpError> {
    let value = RelayOptions::from_list(opts).to_bytes()?;

    Ok(DhcpOption {
        code: DhcpOptionCode::RELAY_AGENT_INFORMATION.0,
        value,
    })
}

/// Return Relay Agent Information sub-options from top-level options.
/// None if the option is not present.
pub fn relay_agent_info(opts: &Options) -> Result<Option<RelayOptions>, DhcpError> {
    match opts.get(DhcpOptionCode::RELAY_AGENT_INFORMATION.0) {
        Some(value) => {
            let rai = RelayOptions::from_bytes(value).map_err(|e| {
                debug!("invalid Relay Agent Information: {}", e);
                e
            })?;
            Ok(Some(rai))
        }
        None => Ok(None),
    }
}

/// Render a Relay Agent Information option, sub-options one per line.
pub fn relay_option_string(opt: &DhcpOption) -> Result<String, DhcpError> {
    let rai = RelayOptions::from_bytes(&opt.value)?;
    let code = DhcpOptionCode(opt.code);
    let label = code.name().unwrap_or("unknown");

    Ok(RELAY_HUMANIZER.render(label, &rai))
}
