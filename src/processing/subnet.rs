//! Subnet arithmetic on [`IpAddress`] values.
//!
//! Every operation here takes its mask as `impl Into<Option<&IpAddress>>`, so
//! callers pass `&mask` normally and `None` when no mask is available. The mask is
//! validated on each call; nothing is cached between calls.

use crate::error::{AddressError, Result};
use crate::models::IpAddress;

fn require_mask(mask: Option<&IpAddress>) -> Result<&IpAddress> {
    let mask = mask.ok_or(AddressError::MissingMask)?;
    mask.check_mask()?;
    Ok(mask)
}

impl IpAddress {
    /// Bitwise AND of this address with `mask`, octet by octet.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_mask::models::IpAddress;
    /// let mask = IpAddress::from_prefix_len(21).unwrap();
    /// let net = IpAddress::new(192, 168, 0, 13).apply_mask(&mask).unwrap();
    /// assert_eq!(net, IpAddress::new(192, 168, 0, 0));
    /// ```
    pub fn apply_mask<'a>(&self, mask: impl Into<Option<&'a IpAddress>>) -> Result<IpAddress> {
        let mask = require_mask(mask.into())?;
        let masked = self.to_u32() & mask.to_u32();
        log::trace!("apply_mask({self}, {mask}) = {}", IpAddress::from(masked));
        Ok(IpAddress::from(masked))
    }

    /// `true` when this address masked by `mask` equals `subnet`.
    pub fn belongs_to_subnet<'a>(
        &self,
        subnet: &IpAddress,
        mask: impl Into<Option<&'a IpAddress>>,
    ) -> Result<bool> {
        let mask = require_mask(mask.into())?;
        Ok(self.apply_mask(mask)? == *subnet)
    }

    /// Number of addresses strictly between `self` and `other`.
    ///
    /// Both addresses must share a network under `mask`. Identical addresses give 0.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_mask::models::IpAddress;
    /// let mask = IpAddress::from_prefix_len(24).unwrap();
    /// let first = IpAddress::new(127, 0, 0, 1);
    /// let second = IpAddress::new(127, 0, 0, 10);
    /// assert_eq!(first.count_hosts_between(&second, &mask).unwrap(), 8);
    /// ```
    pub fn count_hosts_between<'a>(
        &self,
        other: &IpAddress,
        mask: impl Into<Option<&'a IpAddress>>,
    ) -> Result<u32> {
        let mask = require_mask(mask.into())?;

        let net_address = other.apply_mask(mask)?;
        if !self.belongs_to_subnet(&net_address, mask)? {
            log::debug!("{self} and {other} are in different nets under {mask}");
            return Err(AddressError::NotSameSubnet {
                first: *self,
                second: *other,
                mask: *mask,
            });
        }

        if self == other {
            return Ok(0);
        }
        // Distinct addresses are at least 1 apart.
        Ok(self.to_u32().abs_diff(other.to_u32()) - 1)
    }

    /// Highest address of the net this address belongs to under `mask`.
    pub fn broadcast<'a>(&self, mask: impl Into<Option<&'a IpAddress>>) -> Result<IpAddress> {
        let mask = require_mask(mask.into())?;
        let bits = (self.to_u32() & mask.to_u32()) | !mask.to_u32();
        Ok(IpAddress::from(bits))
    }
}
