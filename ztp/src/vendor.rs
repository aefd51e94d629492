//
// DHCP-RS - ZTP
//   Copyright (C) 2024-2025, Toshiaki Takada
//
// Vendor class parsers:
//  Extract vendor name, model and serial number from the vendor class
//  identifier (60), optionally with host name (12), or from the
//  Vendor-Identifying Vendor Class (124).
//

use dhcpv4::{Options, VivcIdentifier};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::*;
use crate::config::Config;

/// IANA enterprise number for Cisco Systems.
pub const ENTERPRISE_CISCO: u32 = 9;

/// Vendor class identifier string formats.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorFormat {
    /// Arista;DCS-7050S-64;01.23;JPE12345678
    Arista,

    /// ZPESystems:NSC:001234567
    #[serde(rename = "zpe")]
    ZpeSystems,

    /// Juniper-qfx10002-36q-DN817, serial may be omitted.
    Juniper,
}

impl VendorFormat {
    /// Default order in which formats are tried.
    pub const ALL: [VendorFormat; 3] = [
        VendorFormat::Arista,
        VendorFormat::ZpeSystems,
        VendorFormat::Juniper,
    ];

    /// Leading token that identifies the format.
    pub fn prefix(&self) -> &'static str {
        match self {
            VendorFormat::Arista => "Arista;",
            VendorFormat::ZpeSystems => "ZPESystems:",
            VendorFormat::Juniper => "Juniper-",
        }
    }

    /// Parse vendor class if it is in this format, None otherwise.
    pub fn try_parse(&self, vc: &str, hostname: Option<&str>) -> Option<Result<VendorData, ZtpError>> {
        if !vc.starts_with(self.prefix()) {
            return None
        }

        let res = match self {
            VendorFormat::Arista => parse_arista(vc),
            VendorFormat::ZpeSystems => parse_zpe(vc),
            VendorFormat::Juniper => Ok(parse_juniper(vc, hostname)),
        };
        Some(res)
    }
}

// Name;Model;Version;Serial
fn parse_arista(vc: &str) -> Result<VendorData, ZtpError> {
    let p: Vec<&str> = vc.split(';').collect();
    if p.len() != 4 {
        return Err(ZtpError::MalformedVendorFields(vc.to_string()))
    }

    Ok(VendorData::new(p[0], p[1], p[3]))
}

// ZPESystems:Model:Serial
fn parse_zpe(vc: &str) -> Result<VendorData, ZtpError> {
    let p: Vec<&str> = vc.split(':').collect();
    if p.len() != 3 {
        return Err(ZtpError::MalformedVendorFields(vc.to_string()))
    }

    Ok(VendorData::new(p[0], p[1], p[2]))
}

// Juniper-<model>-<serial>, model may contain '-'.
fn parse_juniper(vc: &str, hostname: Option<&str>) -> VendorData {
    let p: Vec<&str> = vc.split('-').collect();
    let (model, serial) = match p.len() {
        0..=2 => (p.get(1).copied().unwrap_or_default().to_string(), String::new()),
        n => (p[1..n - 1].join("-"), p[n - 1].to_string()),
    };

    let serial = match hostname {
        Some(h) if serial.is_empty() && !h.is_empty() => h.to_string(),
        _ => serial,
    };

    VendorData {
        vendor_name: String::from("Juniper"),
        model,
        serial,
    }
}

// SN:<serial>;PID:<model>
fn parse_cisco(data: &[u8]) -> Result<VendorData, ZtpError> {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(e) => return Err(ZtpError::MalformedVendorFields(format!("{:?}: {}", data, e))),
    };
    let mut vd = VendorData {
        vendor_name: String::from("Cisco Systems"),
        ..Default::default()
    };

    for field in s.split(';') {
        match field.split_once(':') {
            Some(("SN", v)) => vd.serial = v.to_string(),
            Some(("PID", v)) => vd.model = v.to_string(),
            Some(_) => {}
            None => return Err(ZtpError::MalformedVendorFields(s.to_string())),
        }
    }

    Ok(vd)
}

/// Vendor class parser.
#[derive(Debug, Clone)]
pub struct VendorClassParser {
    /// String formats, tried in order.
    formats: Vec<VendorFormat>,

    /// Use host name as serial when vendor class has none.
    hostname_serial: bool,

    /// Log every attempt at debug level.
    debug: bool,
}

impl Default for VendorClassParser {
    fn default() -> Self {
        VendorClassParser {
            formats: VendorFormat::ALL.to_vec(),
            hostname_serial: true,
            debug: false,
        }
    }
}

impl VendorClassParser {
    pub fn new(config: &Config) -> VendorClassParser {
        VendorClassParser {
            formats: config.formats(),
            hostname_serial: config.is_hostname_serial_enabled(),
            debug: config.is_debug_enabled(),
        }
    }

    /// Parse vendor class identifier string.
    pub fn parse_vendor_class(&self, vc: &str, hostname: Option<&str>) -> Result<VendorData, ZtpError> {
        if vc.is_empty() {
            return Err(ZtpError::EmptyInput)
        }

        let hostname = if self.hostname_serial { hostname } else { None };

        for format in &self.formats {
            if self.debug {
                debug!(?format, vc, "trying vendor class format");
            } else {
                trace!(?format, vc, "trying vendor class format");
            }

            if let Some(res) = format.try_parse(vc, hostname) {
                match &res {
                    Ok(vd) => debug!(?format, ?vd, "vendor class parsed"),
                    Err(e) => debug!(?format, "vendor class rejected: {}", e),
                }
                return res
            }
        }

        debug!(vc, "unrecognized vendor class");
        Err(ZtpError::UnrecognizedVendorFormat(vc.to_string()))
    }

    /// Parse VIVC entries, using the first one from a known enterprise.
    pub fn parse_vivc(&self, ids: &[VivcIdentifier]) -> Result<VendorData, ZtpError> {
        if ids.is_empty() {
            return Err(ZtpError::EmptyInput)
        }

        match ids.iter().find(|id| id.ent_id == ENTERPRISE_CISCO) {
            Some(id) => parse_vivc(id.ent_id, &id.data),
            None => {
                debug!(count = ids.len(), "no VIVC entry from a known enterprise");
                Err(ZtpError::UnrecognizedVendorFormat(format!("enterprise {}", ids[0].ent_id)))
            }
        }
    }

    /// Parse vendor data from DHCP options, VIVC first, then vendor class.
    pub fn parse<S: VendorClassSource + ?Sized>(&self, src: &S) -> Result<VendorData, ZtpError> {
        match src.vivc() {
            Ok(ids) if !ids.is_empty() => match self.parse_vivc(&ids) {
                Ok(vd) => return Ok(vd),
                Err(e) => debug!("VIVC not usable, falling back to vendor class: {}", e),
            },
            Ok(_) => {}
            Err(e) => debug!("VIVC decode failed, falling back to vendor class: {}", e),
        }

        let vc = src.class_identifier().unwrap_or_default();
        let hostname = src.host_name();
        self.parse_vendor_class(&vc, hostname.as_deref())
    }

    /// Parse vendor data from a raw DHCP options buffer.
    pub fn parse_options(&self, buf: &[u8]) -> Result<VendorData, ZtpError> {
        let opts = Options::from_bytes(buf)?;
        self.parse(&opts)
    }
}

/// Parse vendor class identifier string, with host name as serial fallback.
pub fn parse_vendor_class(vc: &str, hostname: Option<&str>) -> Result<VendorData, ZtpError> {
    VendorClassParser::default().parse_vendor_class(vc, hostname)
}

/// Parse a single VIVC entry.
pub fn parse_vivc(ent_id: u32, data: &[u8]) -> Result<VendorData, ZtpError> {
    match ent_id {
        ENTERPRISE_CISCO => parse_cisco(data),
        _ => Err(ZtpError::UnrecognizedVendorFormat(format!("enterprise {}", ent_id))),
    }
}

/// Parse VIVC entries.
pub fn parse_vivc_identifiers(ids: &[VivcIdentifier]) -> Result<VendorData, ZtpError> {
    VendorClassParser::default().parse_vivc(ids)
}

/// Parse vendor data from DHCP options.
pub fn parse_vendor_data<S: VendorClassSource + ?Sized>(src: &S) -> Result<VendorData, ZtpError> {
    VendorClassParser::default().parse(src)
}
