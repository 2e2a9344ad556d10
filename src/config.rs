//! Demo configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env` file
//! by [`dotenv`] in `main`. Unset variables fall back to the defaults below.

use crate::error::Result;
use crate::models::IpAddress;
use std::error::Error;

pub const ENV_FIRST: &str = "IPMASK_FIRST";
pub const ENV_SECOND: &str = "IPMASK_SECOND";
pub const ENV_MASK: &str = "IPMASK_MASK";
pub const ENV_OUTPUT: &str = "IPMASK_OUTPUT";

pub const DEFAULT_FIRST: &str = "127.1.0.1";
pub const DEFAULT_SECOND: &str = "127.1.0.19";
pub const DEFAULT_MASK: &str = "255.255.255.0";

/// How the demo prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<OutputFormat, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', use text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub first: IpAddress,
    pub second: IpAddress,
    pub mask: IpAddress,
    pub output: OutputFormat,
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> std::result::Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            let value = lookup(key).unwrap_or_else(|| default.to_string());
            log::debug!("config {key}={value}");
            value
        };

        let first: IpAddress = get(ENV_FIRST, DEFAULT_FIRST)
            .trim()
            .parse()
            .map_err(|e| format!("{ENV_FIRST}: {e}"))?;
        let second: IpAddress = get(ENV_SECOND, DEFAULT_SECOND)
            .trim()
            .parse()
            .map_err(|e| format!("{ENV_SECOND}: {e}"))?;
        let mask =
            parse_mask(&get(ENV_MASK, DEFAULT_MASK)).map_err(|e| format!("{ENV_MASK}: {e}"))?;
        let output: OutputFormat = get(ENV_OUTPUT, "text").parse()?;

        Ok(Config {
            first,
            second,
            mask,
            output,
        })
    }
}

/// Accept a mask as dotted octets (`255.255.0.0`) or a prefix length (`16`, `/16`).
pub fn parse_mask(s: &str) -> Result<IpAddress> {
    let s = s.trim();
    let prefix = s.strip_prefix('/').unwrap_or(s);
    match prefix.parse::<i32>() {
        Ok(len) => IpAddress::from_prefix_len(len),
        Err(_) => s.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.first, IpAddress::new(127, 1, 0, 1));
        assert_eq!(config.second, IpAddress::new(127, 1, 0, 19));
        assert_eq!(config.mask, IpAddress::new(255, 255, 255, 0));
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_FIRST, "184.5.0.134"),
            (ENV_SECOND, " 184.5.146.0 "),
            (ENV_MASK, "/16"),
            (ENV_OUTPUT, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.first, IpAddress::new(184, 5, 0, 134));
        assert_eq!(config.second, IpAddress::new(184, 5, 146, 0));
        assert_eq!(config.mask, IpAddress::new(255, 255, 0, 0));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_address() {
        let err = Config::from_lookup(lookup_from(&[(ENV_FIRST, "127.0.0.256")])).unwrap_err();
        assert!(err.to_string().starts_with(ENV_FIRST));
    }

    #[test]
    fn test_bad_output() {
        assert!(Config::from_lookup(lookup_from(&[(ENV_OUTPUT, "xml")])).is_err());
    }

    #[test]
    fn test_parse_mask() {
        assert_eq!(parse_mask("24").unwrap(), IpAddress::new(255, 255, 255, 0));
        assert_eq!(parse_mask("/21").unwrap(), IpAddress::new(255, 255, 248, 0));
        assert_eq!(parse_mask("255.0.0.0").unwrap(), IpAddress::new(255, 0, 0, 0));
        assert_eq!(parse_mask("0"), Err(AddressError::InvalidPrefixLength(0)));
        assert!(parse_mask("mask").is_err());
    }

    #[test]
    fn test_parse_mask_keeps_non_contiguous() {
        // Checked only once the value is used as a mask.
        let mask = parse_mask("255.0.255.0").unwrap();
        assert!(!mask.is_valid_mask());
    }
}
