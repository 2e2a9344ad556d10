//! IPv4 addresses and subnet mask arithmetic.
//!
//! [`IpAddress`] is an immutable 4-octet value. Any address can be used as a mask;
//! the mask rule is checked each time a value is used in that role.
//!
//! ```
//! use ipv4_subnet_mask::IpAddress;
//! let mask = IpAddress::from_prefix_len(16).unwrap();
//! let first = IpAddress::new(184, 5, 0, 134);
//! let second = IpAddress::new(184, 5, 146, 0);
//! assert_eq!(first.count_hosts_between(&second, &mask).unwrap(), 37241);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{AddressError, Result};
pub use models::IpAddress;
pub use processing::HostCountReport;

/// Build the report for the addresses and mask in `config`.
pub fn report_from_config(config: &config::Config) -> Result<HostCountReport> {
    HostCountReport::compute(config.first, config.second, config.mask)
}

/// Render `report` in the format `config` asks for.
pub fn render_report(
    report: &HostCountReport,
    format: config::OutputFormat,
) -> std::result::Result<String, Box<dyn std::error::Error>> {
    match format {
        config::OutputFormat::Text => Ok(output::format_report(report)),
        config::OutputFormat::Json => Ok(output::report_json(report)?),
    }
}
