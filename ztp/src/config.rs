//
// DHCP-RS - ZTP
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use serde::Deserialize;

use crate::*;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub global: Option<ConfigGlobal>,
    pub vendor_class: Option<ConfigVendorClass>,
}

impl Config {
    /// Load config from JSON text.
    pub fn from_json(s: &str) -> Result<Config, ZtpError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn is_debug_enabled(&self) -> bool {
        match &self.global {
            Some(global) => global.debug.unwrap_or(false),
            None => false,
        }
    }

    /// Vendor-class string formats to try, in order.
    pub fn formats(&self) -> Vec<VendorFormat> {
        match &self.vendor_class {
            Some(ConfigVendorClass { formats: Some(formats), .. }) => formats.clone(),
            _ => VendorFormat::ALL.to_vec(),
        }
    }

    pub fn is_hostname_serial_enabled(&self) -> bool {
        match &self.vendor_class {
            Some(vc) => vc.hostname_serial_fallback.unwrap_or(true),
            None => true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConfigGlobal {
    pub debug: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigVendorClass {
    pub formats: Option<Vec<VendorFormat>>,
    pub hostname_serial_fallback: Option<bool>,
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_config_default() {
        let config = Config::from_json("{}").unwrap();
        assert!(!config.is_debug_enabled());
        assert!(config.is_hostname_serial_enabled());
        assert_eq!(config.formats(), VendorFormat::ALL.to_vec());
    }

    #[test]
    pub fn test_config_vendor_class() {
        let json = r#"{
            "global": { "debug": true },
            "vendor_class": {
                "formats": ["juniper", "arista"],
                "hostname_serial_fallback": false
            }
        }"#;
        let res = Config::from_json(json);
        match res {
            Err(e) => assert!(false, "Error: {:?}", e),
            Ok(config) => {
                assert!(config.is_debug_enabled());
                assert!(!config.is_hostname_serial_enabled());
                assert_eq!(config.formats(), vec![VendorFormat::Juniper, VendorFormat::Arista]);
            }
        }
    }

    #[test]
    pub fn test_config_invalid() {
        let res = Config::from_json(r#"{ "vendor_class": { "formats": ["cisco"] } }"#);
        match res {
            Err(e) => assert!(matches!(e, ZtpError::Config(_))),
            Ok(config) => assert!(false, "Error: {:?}", config),
        }
    }
}
