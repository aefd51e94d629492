//
// DHCP-RS
//   Copyright (C) 2024-2025, Toshiaki Takada
//

use crate::*;

/// Rendering policy for a container of options.
///
/// The code humanizer names a code in some option space, the value
/// humanizer renders the raw value of an option with that code.
#[derive(Copy, Clone)]
pub struct OptionHumanizer {
    pub code_humanizer: fn(u8) -> String,
    pub value_humanizer: fn(u8, &[u8]) -> String,
}

impl OptionHumanizer {
    /// Render a single option as "<name> (<code>): <value>".
    pub fn stringify(&self, code: u8, value: &[u8]) -> String {
        format!("{}: {}", (self.code_humanizer)(code), (self.value_humanizer)(code, value))
    }

    /// Render options under a header line.
    pub fn render(&self, label: &str, opts: &Options) -> String {
        format!("{}:\n{}", label, opts.to_string_with(self))
    }
}

impl Default for OptionHumanizer {
    fn default() -> Self {
        OptionHumanizer {
            code_humanizer: |c| DhcpOptionCode(c).to_string(),
            value_humanizer: |_, v| generic_value(v),
        }
    }
}

/// Render bytes as a list of decimal numbers, "[108 105 110]".
pub fn generic_value(data: &[u8]) -> String {
    let v: Vec<String> = data.iter().map(|b| b.to_string()).collect();
    format!("[{}]", v.join(" "))
}

///
/// Unit tests.
///
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_generic_value() {
        assert_eq!(generic_value(b"boot"), "[98 111 111 116]");
        assert_eq!(generic_value(&[]), "[]");
        assert_eq!(generic_value(&[0, 255]), "[0 255]");
    }

    #[test]
    pub fn test_humanizer_injected() {
        let humanizer = OptionHumanizer {
            code_humanizer: |c| format!("sub-{}", c),
            value_humanizer: |_, v| String::from_utf8_lossy(v).to_string(),
        };
        let opts = Options::from_list(vec![DhcpOption::new(3, b"eth0")]);

        assert_eq!(humanizer.stringify(3, b"eth0"), "sub-3: eth0");
        assert_eq!(humanizer.render("Interface", &opts), "Interface:\n    sub-3: eth0\n");
    }

    #[test]
    pub fn test_humanizer_default() {
        let humanizer = OptionHumanizer::default();
        assert_eq!(humanizer.stringify(60, b"PXE"), "Class Identifier (60): [80 88 69]");
        assert_eq!(humanizer.render("Options", &Options::new()), "Options:\n");
    }
}
