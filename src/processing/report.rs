//! Host count between two addresses, packaged for output.

use crate::error::Result;
use crate::models::IpAddress;
use serde::Serialize;

/// Result of counting the hosts between two addresses of one net.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HostCountReport {
    /// First address as given.
    pub first: IpAddress,
    /// Second address as given.
    pub second: IpAddress,
    /// Mask both addresses were checked against.
    pub mask: IpAddress,
    /// Leading one-bits of `mask`, `None` when its ones do not start at the top bit.
    pub prefix_len: Option<u8>,
    /// Network address shared by both addresses.
    pub network: IpAddress,
    /// Addresses strictly between `first` and `second`.
    pub hosts: u32,
}

impl HostCountReport {
    pub fn compute(first: IpAddress, second: IpAddress, mask: IpAddress) -> Result<HostCountReport> {
        let hosts = first.count_hosts_between(&second, &mask)?;
        let report = HostCountReport {
            first,
            second,
            mask,
            prefix_len: mask.prefix_len().ok(),
            network: first.apply_mask(&mask)?,
            hosts,
        };
        log::info!(
            "{} hosts between {} and {} in {} mask {}",
            report.hosts,
            report.first,
            report.second,
            report.network,
            report.mask
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;

    #[test]
    fn test_compute() {
        let report = HostCountReport::compute(
            IpAddress::new(127, 1, 0, 1),
            IpAddress::new(127, 1, 0, 19),
            IpAddress::new(255, 255, 255, 0),
        )
        .unwrap();
        assert_eq!(report.hosts, 17);
        assert_eq!(report.prefix_len, Some(24));
        assert_eq!(report.network, IpAddress::new(127, 1, 0, 0));
    }

    #[test]
    fn test_compute_not_same_subnet() {
        let result = HostCountReport::compute(
            IpAddress::new(127, 0, 0, 1),
            IpAddress::new(127, 1, 0, 10),
            IpAddress::new(255, 255, 255, 0),
        );
        assert!(matches!(result, Err(AddressError::NotSameSubnet { .. })));
    }

    #[test]
    fn test_compute_invalid_mask() {
        let bad = IpAddress::new(0, 0, 123, 55);
        let result = HostCountReport::compute(IpAddress::LOCALHOST, IpAddress::LOCALHOST, bad);
        assert_eq!(result, Err(AddressError::InvalidMask(bad)));
    }

    #[test]
    fn test_compute_shifted_mask_has_no_prefix() {
        let report = HostCountReport::compute(
            IpAddress::new(10, 20, 30, 2),
            IpAddress::new(10, 20, 30, 40),
            IpAddress::new(255, 255, 255, 1),
        )
        .unwrap();
        assert_eq!(report.hosts, 37);
        assert_eq!(report.prefix_len, None);
        assert_eq!(report.network, IpAddress::new(10, 20, 30, 0));
    }

    #[test]
    fn test_serialize() {
        let report = HostCountReport::compute(
            IpAddress::new(10, 0, 0, 1),
            IpAddress::new(10, 0, 0, 5),
            IpAddress::from_prefix_len(29).unwrap(),
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["first"], "10.0.0.1");
        assert_eq!(json["mask"], "255.255.255.248");
        assert_eq!(json["prefix_len"], 29);
        assert_eq!(json["hosts"], 3);
    }
}
