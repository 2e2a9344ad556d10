//! JSON output.

use crate::processing::HostCountReport;

/// Pretty-printed JSON for a report.
pub fn report_json(report: &HostCountReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpAddress;

    #[test]
    fn test_report_json() {
        let report = HostCountReport::compute(
            IpAddress::new(184, 5, 0, 134),
            IpAddress::new(184, 5, 146, 0),
            IpAddress::from_prefix_len(16).unwrap(),
        )
        .unwrap();
        let json = report_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["network"], "184.5.0.0");
        assert_eq!(value["hosts"], 37241);
        assert!(json.contains('\n'), "Expected pretty output");
    }
}
