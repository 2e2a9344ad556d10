//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::processing::HostCountReport;
use colored::Colorize;

/// Width of a dotted quad at its longest, `255.255.255.255`.
const ADDRESS_WIDTH: usize = 15;

/// Format a value right-aligned in a field of at least `width` characters.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, never truncated
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Render a report as one colored line.
pub fn format_report(report: &HostCountReport) -> String {
    let prefix = match report.prefix_len {
        Some(len) => format!("/{len}"),
        None => String::new(),
    };
    format!(
        "{first} <-> {second} in {network}{prefix} ({mask}): {hosts} hosts between",
        first = format_field(report.first, ADDRESS_WIDTH).cyan(),
        second = format_field(report.second, ADDRESS_WIDTH).cyan(),
        network = report.network.to_string().blue(),
        mask = report.mask,
        hosts = report.hosts.to_string().green().bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpAddress;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "      test");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 4), "test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_address() {
        assert_eq!(
            format_field(IpAddress::LOCALHOST, ADDRESS_WIDTH),
            "      127.0.0.1"
        );
    }

    #[test]
    fn test_format_report() {
        let report = HostCountReport::compute(
            IpAddress::new(127, 1, 0, 1),
            IpAddress::new(127, 1, 0, 19),
            IpAddress::new(255, 255, 255, 0),
        )
        .unwrap();
        let line = format_report(&report);
        assert!(line.contains("127.1.0.1"));
        assert!(line.contains("127.1.0.19"));
        assert!(line.contains("127.1.0.0"));
        assert!(line.contains("/24 (255.255.255.0)"));
        assert!(line.contains("17"));
    }

    #[test]
    fn test_format_report_without_prefix() {
        let report = HostCountReport::compute(
            IpAddress::new(10, 20, 30, 2),
            IpAddress::new(10, 20, 30, 40),
            IpAddress::new(255, 255, 255, 1),
        )
        .unwrap();
        let line = format_report(&report);
        assert!(line.contains(" (255.255.255.1)"));
        assert!(!line.contains('/'));
    }
}
