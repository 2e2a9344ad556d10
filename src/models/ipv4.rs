//! IPv4 address value type.
//!
//! Provides [`IpAddress`], an immutable 4-octet address that also doubles as a
//! subnet mask, plus parsing helpers for dotted and CIDR notation.

use super::mask::{raw_mask, MAX_PREFIX_LENGTH, MIN_PREFIX_LENGTH};
use crate::error::{AddressError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of octets in an IPv4 address.
pub const OCTETS_COUNT: usize = 4;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// IPv4 address stored as four octets, most significant first.
///
/// Values are `Copy` and never change after construction. Equality and ordering
/// are structural over the octets, which matches numeric order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpAddress {
    octets: [u8; OCTETS_COUNT],
}

impl IpAddress {
    /// 127.0.0.1
    pub const LOCALHOST: IpAddress = IpAddress::new(127, 0, 0, 1);
    /// 0.0.0.0
    pub const DEFAULT_ROUTE: IpAddress = IpAddress::new(0, 0, 0, 0);
    /// 255.255.255.255
    pub const LIMITED_BROADCAST: IpAddress = IpAddress::new(255, 255, 255, 255);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> IpAddress {
        IpAddress {
            octets: [a, b, c, d],
        }
    }

    /// Build an address from raw integers, checking count and range.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_mask::models::IpAddress;
    /// let ip = IpAddress::from_octets(&[192, 168, 0, 13]).unwrap();
    /// assert_eq!(ip.to_string(), "192.168.0.13");
    /// assert!(IpAddress::from_octets(&[1023, 12, 12, 34]).is_err());
    /// ```
    pub fn from_octets(raw: &[i32]) -> Result<IpAddress> {
        if raw.len() != OCTETS_COUNT {
            return Err(AddressError::InvalidAddress(format!(
                "IP address must consist only of {OCTETS_COUNT} octets, got {}",
                raw.len()
            )));
        }

        let mut octets = [0u8; OCTETS_COUNT];
        for (i, &value) in raw.iter().enumerate() {
            octets[i] = u8::try_from(value).map_err(|_| {
                AddressError::InvalidAddress(format!(
                    "octet {i} is {value}, each octet must be in range [0..255]"
                ))
            })?;
        }
        Ok(IpAddress { octets })
    }

    /// Build the canonical mask with `len` leading one-bits.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_mask::models::IpAddress;
    /// assert_eq!(IpAddress::from_prefix_len(21).unwrap().to_string(), "255.255.248.0");
    /// assert!(IpAddress::from_prefix_len(0).is_err());
    /// ```
    pub fn from_prefix_len(len: i32) -> Result<IpAddress> {
        if !(MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&len) {
            return Err(AddressError::InvalidPrefixLength(len));
        }
        Ok(IpAddress {
            octets: raw_mask(len as u8),
        })
    }

    /// Copy of the four octets.
    pub const fn octets(&self) -> [u8; OCTETS_COUNT] {
        self.octets
    }

    /// Pack the octets big-endian into a `u32`.
    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.octets)
    }
}

/// Split CIDR notation such as `10.0.0.1/8` into the address and its mask.
pub fn parse_cidr(addr_cidr: &str) -> Result<(IpAddress, IpAddress)> {
    let addr_cidr = addr_cidr.trim();
    let parts: Vec<&str> = addr_cidr.split('/').collect();
    if parts.len() != 2 {
        return Err(AddressError::InvalidAddress(format!(
            "expected address/mask, got '{addr_cidr}'"
        )));
    }

    let addr: IpAddress = parts[0].parse()?;
    let len: i32 = parts[1].parse().map_err(|_| {
        AddressError::InvalidAddress(format!("invalid mask length '{}'", parts[1]))
    })?;
    let mask = IpAddress::from_prefix_len(len)?;
    Ok((addr, mask))
}

impl TryFrom<&[i32]> for IpAddress {
    type Error = AddressError;

    fn try_from(raw: &[i32]) -> Result<IpAddress> {
        IpAddress::from_octets(raw)
    }
}

impl From<[u8; OCTETS_COUNT]> for IpAddress {
    fn from(octets: [u8; OCTETS_COUNT]) -> IpAddress {
        IpAddress { octets }
    }
}

impl From<u32> for IpAddress {
    fn from(bits: u32) -> IpAddress {
        IpAddress {
            octets: bits.to_be_bytes(),
        }
    }
}

impl From<IpAddress> for u32 {
    fn from(ip: IpAddress) -> u32 {
        ip.to_u32()
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> IpAddress {
        IpAddress {
            octets: addr.octets(),
        }
    }
}

impl From<IpAddress> for Ipv4Addr {
    fn from(ip: IpAddress) -> Ipv4Addr {
        Ipv4Addr::from(ip.octets)
    }
}

impl PartialEq<Option<IpAddress>> for IpAddress {
    fn eq(&self, other: &Option<IpAddress>) -> bool {
        other.as_ref().is_some_and(|other| other == self)
    }
}

impl FromStr for IpAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<IpAddress> {
        let caps = DOTTED_QUAD
            .captures(s)
            .ok_or_else(|| AddressError::InvalidAddress(format!("'{s}' is not a dotted quad")))?;

        let raw = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| {
                m.as_str().parse::<i32>().map_err(|e| {
                    AddressError::InvalidAddress(format!("octet '{}' in '{s}': {e}", m.as_str()))
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        IpAddress::from_octets(&raw)
    }
}

impl std::fmt::Display for IpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.octets.iter().join("."))
    }
}

impl Serialize for IpAddress {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IpAddress {
    fn deserialize<D>(deserializer: D) -> std::result::Result<IpAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IpAddress::from_str(&s).map_err(de::Error::custom)
    }
}
